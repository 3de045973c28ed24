//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Pool capacity: longest target sequence (5 letters) plus the largest
/// decoy count (2), with one token of headroom.
pub const MAX_ROUND_TOKENS: usize = 8;

/// Scoring constants (letter variant)
pub const BASE_POINTS: u32 = 10;
pub const STREAK_BONUS_STEP: u32 = 2;

/// Scoring constants (phoneme variant)
pub const STREAK_MULTIPLIER_STEP: f64 = 0.2;
pub const SPEED_BONUS_MAX: f64 = 5.0;
pub const SPEED_WINDOW_PER_TOKEN_MS: u64 = 2000;

/// Decoy counts by level tier (letter variant)
pub const DECOY_COUNTS: [usize; 3] = [0, 1, 2];

/// An atomic unit of a puzzle's target sequence: a single letter in the
/// word-builder game, or a phoneme segment such as "SH" in the blender game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token(pub &'static str);

impl Token {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Rendering category for a token. Classification is a pure lookup over the
/// vowel-phoneme set, never stored per token instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Vowel,
    Consonant,
}

impl TokenClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Vowel => "vowel",
            TokenClass::Consonant => "consonant",
        }
    }
}

/// Game variants sharing the same state-machine shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    WordBuilder,
    PhonemeBlender,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::WordBuilder => "word_builder",
            Variant::PhonemeBlender => "phoneme_blender",
        }
    }
}

/// Game phases. `BlendAnimation` is reachable only in the phoneme variant;
/// the letter variant goes straight from a correct submit to `Celebration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    LessonIntro,
    RoundActive,
    BlendAnimation,
    Celebration,
    Complete,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::LessonIntro => "lesson_intro",
            Phase::RoundActive => "round_active",
            Phase::BlendAnimation => "blend_animation",
            Phase::Celebration => "celebration",
            Phase::Complete => "complete",
        }
    }
}

/// Submit feedback, used both for the whole round and per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
}

impl Feedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feedback::None => "none",
            Feedback::Correct => "correct",
            Feedback::Incorrect => "incorrect",
        }
    }
}

/// Commands accepted by the puzzle state machine. Token and slot indices are
/// round-local; stale indices from late UI events are ignored, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    StartLevel,
    PlaceToken { token: u8, slot: u8 },
    RemoveToken { slot: u8 },
    Submit,
    AnimationComplete,
    Advance,
    Reset,
}

impl GameCommand {
    /// Wire name used by the observation/command boundary.
    pub fn name(&self) -> &'static str {
        match self {
            GameCommand::StartLevel => "start_level",
            GameCommand::PlaceToken { .. } => "place_token",
            GameCommand::RemoveToken { .. } => "remove_token",
            GameCommand::Submit => "submit",
            GameCommand::AnimationComplete => "animation_complete",
            GameCommand::Advance => "advance",
            GameCommand::Reset => "reset",
        }
    }
}

/// Notable outcome of a correct submit (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveEvent {
    pub word: &'static str,
    pub points: u32,
    pub streak: u32,
    pub level_up: bool,
    pub game_complete: bool,
}
