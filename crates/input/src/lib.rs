//! Input module (host-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! host pointer and touch events into [`phonics_play_types::GameCommand`]
//! values and provides the hit-test geometry the gesture handling needs.

pub mod adapter;
pub mod geometry;

pub use phonics_play_types as types;

pub use adapter::{InteractionAdapter, UiEvent, MAX_COMMANDS_PER_EVENT};
pub use geometry::{Point, Rect, SlotLayout};
