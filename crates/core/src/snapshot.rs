//! Read-only snapshot of the game state for rendering and observation
//!
//! A snapshot is a flat copy of everything a host needs to draw one frame
//! or emit one observation message. `snapshot_into` reuses the caller's
//! buffer so a render loop allocates nothing per frame.

use arrayvec::ArrayVec;
use phonics_play_types::{Feedback, Phase, Token, Variant, MAX_ROUND_TOKENS};

use crate::curriculum::Lesson;
use crate::game_state::GameState;

/// One pool token as the UI sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub value: Token,
    pub id: u8,
    pub placed: bool,
}

/// Complete render state for one frame
#[derive(Debug, Clone, Default)]
pub struct GameSnapshot {
    pub variant: Option<Variant>,
    pub phase: Option<Phase>,
    pub level_index: usize,
    pub entry_index: usize,
    pub level_name: &'static str,
    pub level_label: &'static str,
    pub lesson: Option<&'static Lesson>,
    pub emoji: &'static str,
    pub hint: &'static str,
    pub tokens: ArrayVec<TokenSnapshot, MAX_ROUND_TOKENS>,
    pub slots: ArrayVec<Option<Token>, MAX_ROUND_TOKENS>,
    pub slot_feedback: ArrayVec<Feedback, MAX_ROUND_TOKENS>,
    pub last_submit: Feedback,
    pub score: u32,
    pub streak: u32,
    pub last_points: u32,
    pub level_transition: bool,
    pub game_complete: bool,
    pub seed: u32,
    pub round_start_ms: u64,
}

impl GameSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.variant = None;
        self.phase = None;
        self.level_index = 0;
        self.entry_index = 0;
        self.level_name = "";
        self.level_label = "";
        self.lesson = None;
        self.emoji = "";
        self.hint = "";
        self.tokens.clear();
        self.slots.clear();
        self.slot_feedback.clear();
        self.last_submit = Feedback::None;
        self.score = 0;
        self.streak = 0;
        self.last_points = 0;
        self.level_transition = false;
        self.game_complete = false;
        self.seed = 0;
        self.round_start_ms = 0;
    }
}

impl GameState {
    /// Fill `out` with the current render state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();

        out.variant = Some(self.variant());
        out.phase = Some(self.phase());
        out.level_index = self.level_index();
        out.entry_index = self.entry_index();
        out.score = self.score();
        out.streak = self.streak();
        out.last_points = self.last_points();
        out.level_transition = self.is_level_transition();
        out.game_complete = self.is_game_complete();
        out.seed = self.seed();
        out.round_start_ms = self.round_start_ms();
        out.last_submit = self.last_submit();

        let level = self.current_level();
        out.level_name = level.name;
        out.level_label = level.label;
        out.lesson = level.lesson.as_ref();

        // The entry is round state; hide it outside an active round so a
        // lesson or completion screen cannot leak the upcoming answer.
        if !self.tokens().is_empty() {
            let entry = self.current_entry();
            out.emoji = entry.emoji;
            out.hint = entry.hint;
        }

        for token in self.tokens() {
            out.tokens.push(TokenSnapshot {
                value: token.value,
                id: token.id,
                placed: token.placed,
            });
        }
        for i in 0..self.slots().len() {
            out.slots.push(self.slot_value(i));
        }
        for fb in self.slot_feedback() {
            out.slot_feedback.push(*fb);
        }
    }

    /// Convenience allocation of a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::new();
        self.snapshot_into(&mut out);
        out
    }
}
