//! Phonics Play (workspace facade crate).
//!
//! This package keeps a single `phonics_play::{core,adapter,input,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use phonics_play_adapter as adapter;
pub use phonics_play_core as core;
pub use phonics_play_input as input;
pub use phonics_play_types as types;
