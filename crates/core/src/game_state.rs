//! Game state module - the puzzle state machine
//!
//! One generic machine drives both game variants. Variant differences are
//! configuration: which curriculum, how decoys are sourced, which scoring
//! rules apply, and whether a correct submit passes through the blend
//! animation phase before celebration.
//!
//! Every command is a total function over the current state: commands that
//! are invalid in the current phase, or that carry stale indices from late
//! UI events, are ignored rather than treated as errors. The aggregate is
//! owned by a single UI session; there is no concurrent mutation.

use arrayvec::ArrayVec;
use phonics_play_types::{
    Feedback, GameCommand, Phase, SolveEvent, Token, Variant, MAX_ROUND_TOKENS,
};

use crate::curriculum::{Curriculum, Entry, Level, PHONEME_BLENDER, WORD_BUILDER};
use crate::rng::SimpleRng;
use crate::round::{build_round, DecoyPolicy, RoundToken};
use crate::scoring::{points_for, ScoringRules};

/// Variant configuration for the generic machine.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub variant: Variant,
    pub curriculum: Curriculum,
    pub decoys: DecoyPolicy,
    pub scoring: ScoringRules,
    /// Correct submits pass through `Phase::BlendAnimation` first.
    pub blend_animation: bool,
}

impl GameConfig {
    pub fn word_builder() -> Self {
        Self {
            variant: Variant::WordBuilder,
            curriculum: WORD_BUILDER,
            decoys: DecoyPolicy::GeneratedByTier,
            scoring: ScoringRules::LetterStreak,
            blend_animation: false,
        }
    }

    pub fn phoneme_blender() -> Self {
        Self {
            variant: Variant::PhonemeBlender,
            curriculum: PHONEME_BLENDER,
            decoys: DecoyPolicy::Authored,
            scoring: ScoringRules::PhonemeSpeed,
            blend_animation: true,
        }
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    seed: u32,
    level_index: usize,
    entry_index: usize,
    tokens: ArrayVec<RoundToken, MAX_ROUND_TOKENS>,
    /// One cell per target position; holds a pool token id or is empty.
    slots: ArrayVec<Option<u8>, MAX_ROUND_TOKENS>,
    slot_feedback: ArrayVec<Feedback, MAX_ROUND_TOKENS>,
    last_submit: Feedback,
    score: u32,
    streak: u32,
    phase: Phase,
    round_start_ms: u64,
    last_points: u32,
    level_transition: bool,
    game_complete: bool,
    /// Last correct-submit outcome (consumed by observers).
    last_event: Option<SolveEvent>,
}

impl GameState {
    /// Create a word-builder session with the given RNG seed
    pub fn word_builder(seed: u32) -> Self {
        Self::new(GameConfig::word_builder(), seed)
    }

    /// Create a phoneme-blender session with the given RNG seed
    pub fn phoneme_blender(seed: u32) -> Self {
        Self::new(GameConfig::phoneme_blender(), seed)
    }

    pub fn new(config: GameConfig, seed: u32) -> Self {
        let mut state = Self {
            config,
            rng: SimpleRng::new(seed),
            seed,
            level_index: 0,
            entry_index: 0,
            tokens: ArrayVec::new(),
            slots: ArrayVec::new(),
            slot_feedback: ArrayVec::new(),
            last_submit: Feedback::None,
            score: 0,
            streak: 0,
            phase: Phase::LessonIntro,
            round_start_ms: 0,
            last_points: 0,
            level_transition: false,
            game_complete: false,
            last_event: None,
        };

        // Levels without a lesson go straight into their first round.
        if state.current_level().lesson.is_none() {
            state.enter_round(0);
        }
        state
    }

    // ============== Accessors ==============

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn entry_index(&self) -> usize {
        self.entry_index
    }

    pub fn tokens(&self) -> &[RoundToken] {
        &self.tokens
    }

    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    pub fn slot_feedback(&self) -> &[Feedback] {
        &self.slot_feedback
    }

    pub fn last_submit(&self) -> Feedback {
        self.last_submit
    }

    pub fn last_points(&self) -> u32 {
        self.last_points
    }

    pub fn is_level_transition(&self) -> bool {
        self.level_transition
    }

    pub fn is_game_complete(&self) -> bool {
        self.game_complete
    }

    pub fn round_start_ms(&self) -> u64 {
        self.round_start_ms
    }

    pub fn current_level(&self) -> &'static Level {
        self.config.curriculum.level(self.level_index)
    }

    pub fn current_entry(&self) -> &'static Entry {
        &self.current_level().entries[self.entry_index]
    }

    pub fn all_slots_filled(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|s| s.is_some())
    }

    /// Token value occupying a slot, if any.
    pub fn slot_value(&self, slot: usize) -> Option<Token> {
        let id = (*self.slots.get(slot)?)?;
        Some(self.tokens[id as usize].value)
    }

    /// Take and clear the last solve event.
    pub fn take_last_event(&mut self) -> Option<SolveEvent> {
        self.last_event.take()
    }

    // ============== Commands ==============

    /// Apply a command. Returns true if the state changed.
    pub fn apply(&mut self, command: GameCommand, now_ms: u64) -> bool {
        match command {
            GameCommand::StartLevel => self.start_level(now_ms),
            GameCommand::PlaceToken { token, slot } => self.place_token(token, slot),
            GameCommand::RemoveToken { slot } => self.remove_token(slot),
            GameCommand::Submit => self.submit(now_ms),
            GameCommand::AnimationComplete => self.animation_complete(),
            GameCommand::Advance => self.advance(now_ms),
            GameCommand::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Leave the lesson screen and build the level's first round.
    fn start_level(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::LessonIntro {
            return false;
        }
        self.enter_round(now_ms);
        true
    }

    /// Place a pool token into a slot. A token occupying the target slot is
    /// returned to the pool first, so no token is ever duplicated or lost.
    fn place_token(&mut self, token: u8, slot: u8) -> bool {
        if self.phase != Phase::RoundActive {
            return false;
        }
        let (token, slot) = (token as usize, slot as usize);
        if token >= self.tokens.len() || slot >= self.slots.len() {
            return false;
        }
        if self.tokens[token].placed {
            return false;
        }

        if let Some(existing) = self.slots[slot] {
            self.tokens[existing as usize].placed = false;
        }
        self.tokens[token].placed = true;
        self.slots[slot] = Some(token as u8);
        self.clear_feedback();
        true
    }

    /// Free the token in a slot back to the pool.
    fn remove_token(&mut self, slot: u8) -> bool {
        if self.phase != Phase::RoundActive {
            return false;
        }
        let slot = slot as usize;
        if slot >= self.slots.len() {
            return false;
        }
        let Some(id) = self.slots[slot] else {
            return false;
        };

        self.tokens[id as usize].placed = false;
        self.slots[slot] = None;
        self.clear_feedback();
        true
    }

    /// Compare the placed sequence slot-by-slot against the target. Order
    /// matters: an anagram of the target is incorrect.
    fn submit(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::RoundActive || !self.all_slots_filled() {
            return false;
        }

        let entry = self.current_entry();
        let correct = self
            .slots
            .iter()
            .zip(entry.target.iter())
            .all(|(cell, expected)| {
                cell.map(|id| self.tokens[id as usize].value == *expected)
                    .unwrap_or(false)
            });

        if correct {
            self.streak += 1;
            let elapsed = now_ms.saturating_sub(self.round_start_ms);
            let points = points_for(
                self.config.scoring,
                self.streak,
                elapsed,
                entry.target.len(),
            );
            self.score += points;
            self.last_points = points;
            self.last_submit = Feedback::Correct;
            for fb in self.slot_feedback.iter_mut() {
                *fb = Feedback::Correct;
            }

            let last_entry =
                self.entry_index + 1 >= self.current_level().entries.len();
            let last_level =
                self.level_index + 1 >= self.config.curriculum.level_count();
            self.level_transition = last_entry && !last_level;
            self.game_complete = last_entry && last_level;

            self.last_event = Some(SolveEvent {
                word: entry.word,
                points,
                streak: self.streak,
                level_up: self.level_transition,
                game_complete: self.game_complete,
            });

            self.phase = if self.config.blend_animation {
                Phase::BlendAnimation
            } else {
                Phase::Celebration
            };
        } else {
            self.streak = 0;
            self.last_submit = Feedback::Incorrect;
            for (i, fb) in self.slot_feedback.iter_mut().enumerate() {
                let placed = self.slots[i].map(|id| self.tokens[id as usize].value);
                *fb = if placed == Some(entry.target[i]) {
                    Feedback::Correct
                } else {
                    Feedback::Incorrect
                };
            }
        }
        true
    }

    /// Phoneme variant only: the blend animation has finished playing.
    fn animation_complete(&mut self) -> bool {
        if self.phase != Phase::BlendAnimation {
            return false;
        }
        self.phase = Phase::Celebration;
        true
    }

    /// Leave the celebration screen: next entry, next level, or completion.
    fn advance(&mut self, now_ms: u64) -> bool {
        if self.phase != Phase::Celebration {
            return false;
        }

        if self.game_complete {
            self.phase = Phase::Complete;
            self.clear_round();
            return true;
        }

        self.last_points = 0;
        self.level_transition = false;

        if self.entry_index + 1 < self.current_level().entries.len() {
            self.entry_index += 1;
            self.enter_round(now_ms);
            return true;
        }

        // Level exhausted; move to the next one.
        self.level_index += 1;
        self.entry_index = 0;
        if self.current_level().lesson.is_some() {
            self.phase = Phase::LessonIntro;
            self.clear_round();
        } else {
            self.enter_round(now_ms);
        }
        true
    }

    /// Reinitialize to level 0, entry 0, zero score. Uses the original seed,
    /// so a reset session is indistinguishable from a fresh one.
    pub fn reset(&mut self) {
        *self = Self::new(self.config, self.seed);
    }

    // ============== Round lifecycle ==============

    fn enter_round(&mut self, now_ms: u64) {
        let entry = *self.current_entry();
        self.tokens = build_round(&mut self.rng, &entry, self.config.decoys, self.level_index);

        self.slots.clear();
        self.slot_feedback.clear();
        for _ in 0..entry.target.len() {
            self.slots.push(None);
            self.slot_feedback.push(Feedback::None);
        }
        self.last_submit = Feedback::None;
        self.round_start_ms = now_ms;
        self.phase = Phase::RoundActive;
    }

    fn clear_round(&mut self) {
        self.tokens.clear();
        self.slots.clear();
        self.slot_feedback.clear();
        self.last_submit = Feedback::None;
    }

    fn clear_feedback(&mut self) {
        self.last_submit = Feedback::None;
        for fb in self.slot_feedback.iter_mut() {
            *fb = Feedback::None;
        }
    }

    // ============== Test helpers ==============

    /// Fill every slot with the target sequence, in order.
    #[cfg(test)]
    pub fn fill_correctly(&mut self) {
        let target: Vec<Token> = self.current_entry().target.to_vec();
        for (slot, expected) in target.iter().enumerate() {
            let id = self
                .tokens
                .iter()
                .find(|t| !t.placed && t.value == *expected)
                .map(|t| t.id)
                .expect("pool must contain every target token");
            assert!(self.place_token(id, slot as u8));
        }
    }
}
