//! Core game logic for the phonics puzzle games
//!
//! Pure state machine, curricula, seeded RNG, and scoring. No I/O, no
//! timers, no rendering: hosts feed commands in with a timestamp and read
//! state back out through snapshots.

pub mod curriculum;
pub mod game_state;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod snapshot;

pub use curriculum::{
    token_class, Curriculum, Entry, Lesson, Level, WorkedExample, LETTER_ALPHABET,
    PHONEME_BLENDER, WORD_BUILDER,
};
pub use game_state::{GameConfig, GameState};
pub use rng::{choose_distractors, shuffle_tokens, SimpleRng};
pub use round::{build_round, decoy_count_for_tier, DecoyPolicy, RoundToken};
pub use scoring::{blend_points, letter_points, points_for, speed_bonus, ScoringRules};
pub use snapshot::{GameSnapshot, TokenSnapshot};
