//! Interaction adapter for pointer and touch input.
//!
//! Translates raw UI events into game commands across three modalities:
//! native drag and drop, tap-to-select then tap-to-place, and raw touch
//! sequences for platforms without native drag support. The adapter keeps
//! only transient gesture state; the game state machine stays the single
//! authority on whether a placement is legal.

use arrayvec::ArrayVec;
use phonics_play_types::GameCommand;

use crate::geometry::{Point, SlotLayout};

/// Raw UI event as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Native drag started on a pool tile.
    TileDragStart { token: u8 },
    /// Native drop landed on a slot.
    SlotDrop { token: u8, slot: u8 },
    /// Pool tile was tapped or clicked.
    TileTap { token: u8 },
    /// Slot was tapped or clicked.
    SlotTap { slot: u8 },
    /// Finger went down on a pool tile.
    TouchStart { token: u8, at: Point },
    /// Finger moved during a touch drag.
    TouchMove { at: Point },
    /// Finger lifted.
    TouchEnd { at: Point },
    /// Touch sequence was interrupted by the platform.
    TouchCancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TouchDrag {
    token: u8,
    position: Point,
}

/// Maximum commands one UI event can produce.
pub const MAX_COMMANDS_PER_EVENT: usize = 2;

/// Gesture state for one game view.
#[derive(Debug, Clone, Default)]
pub struct InteractionAdapter {
    selected: Option<u8>,
    touch: Option<TouchDrag>,
    highlighted: Option<u8>,
}

impl InteractionAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token currently selected by a tap, if any.
    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Slot highlighted under an active touch drag, if any.
    pub fn highlighted_slot(&self) -> Option<u8> {
        self.highlighted
    }

    /// Token carried by an active touch drag, if any.
    pub fn touch_token(&self) -> Option<u8> {
        self.touch.map(|t| t.token)
    }

    /// Finger position of an active touch drag, for drawing the ghost tile.
    pub fn touch_position(&self) -> Option<Point> {
        self.touch.map(|t| t.position)
    }

    /// Drop all gesture state. Hosts call this on round changes.
    pub fn reset(&mut self) {
        self.selected = None;
        self.touch = None;
        self.highlighted = None;
    }

    /// Feed one UI event. `token_placed` and `slot_filled` mirror the
    /// current round so the adapter can skip gestures on dead targets.
    pub fn handle(
        &mut self,
        event: UiEvent,
        layout: &SlotLayout,
        token_placed: &[bool],
        slot_filled: &[bool],
    ) -> ArrayVec<GameCommand, MAX_COMMANDS_PER_EVENT> {
        let mut commands = ArrayVec::new();

        match event {
            UiEvent::TileDragStart { token } => {
                if is_live_token(token, token_placed) {
                    // A native drag replaces any pending tap selection.
                    self.selected = None;
                }
            }
            UiEvent::SlotDrop { token, slot } => {
                self.selected = None;
                commands.push(GameCommand::PlaceToken { token, slot });
            }
            UiEvent::TileTap { token } => {
                if is_live_token(token, token_placed) {
                    self.selected = if self.selected == Some(token) {
                        None
                    } else {
                        Some(token)
                    };
                }
            }
            UiEvent::SlotTap { slot } => {
                if let Some(token) = self.selected.take() {
                    commands.push(GameCommand::PlaceToken { token, slot });
                } else if slot_filled.get(slot as usize).copied().unwrap_or(false) {
                    commands.push(GameCommand::RemoveToken { slot });
                }
            }
            UiEvent::TouchStart { token, at } => {
                if is_live_token(token, token_placed) {
                    self.selected = None;
                    self.touch = Some(TouchDrag {
                        token,
                        position: at,
                    });
                    self.highlighted = layout.slot_at(at);
                }
            }
            UiEvent::TouchMove { at } => {
                if let Some(touch) = self.touch.as_mut() {
                    touch.position = at;
                    self.highlighted = layout.slot_at(at);
                }
            }
            UiEvent::TouchEnd { at } => {
                if let Some(touch) = self.touch.take() {
                    if let Some(slot) = layout.slot_at(at) {
                        commands.push(GameCommand::PlaceToken {
                            token: touch.token,
                            slot,
                        });
                    }
                }
                self.highlighted = None;
            }
            UiEvent::TouchCancel => {
                self.touch = None;
                self.highlighted = None;
            }
        }

        commands
    }
}

fn is_live_token(token: u8, token_placed: &[bool]) -> bool {
    matches!(token_placed.get(token as usize), Some(false))
}
