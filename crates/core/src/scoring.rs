//! Scoring module - streak and speed based point policies
//!
//! Both policies are pure functions and fully reproducible from
//! `(streak, elapsed_ms, token_count)`. Streak counts consecutive correct
//! submits including the one being scored, so the first solve is streak 1.
//!
//! Rounding is half-away-from-zero, matching the original product's
//! behavior for the non-negative values used here.

use phonics_play_types::{
    BASE_POINTS, SPEED_BONUS_MAX, SPEED_WINDOW_PER_TOKEN_MS, STREAK_BONUS_STEP,
    STREAK_MULTIPLIER_STEP,
};

/// Which point policy a game variant applies on a correct submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRules {
    /// Word builder: flat base plus a linear streak bonus.
    LetterStreak,
    /// Phoneme blender: streak multiplier on the base plus a speed bonus.
    PhonemeSpeed,
}

/// Letter variant: `10 + (streak - 1) * 2` once a streak is running.
pub fn letter_points(streak: u32) -> u32 {
    if streak >= 2 {
        BASE_POINTS + (streak - 1) * STREAK_BONUS_STEP
    } else {
        BASE_POINTS
    }
}

/// Speed bonus for the phoneme variant: up to 5 points, decaying linearly
/// over a window of 2 seconds per token, floored at 0 once the window has
/// fully elapsed.
pub fn speed_bonus(elapsed_ms: u64, token_count: usize) -> u32 {
    let window_ms = token_count as u64 * SPEED_WINDOW_PER_TOKEN_MS;
    if window_ms == 0 || elapsed_ms >= window_ms {
        return 0;
    }
    let ratio = 1.0 - elapsed_ms as f64 / window_ms as f64;
    (ratio * SPEED_BONUS_MAX).round() as u32
}

/// Phoneme variant: `round(10 * multiplier) + speed_bonus` where the
/// multiplier is `1 + (streak - 1) * 0.2` from the second consecutive solve.
pub fn blend_points(streak: u32, speed_bonus: u32) -> u32 {
    let multiplier = if streak >= 2 {
        1.0 + (streak - 1) as f64 * STREAK_MULTIPLIER_STEP
    } else {
        1.0
    };
    (BASE_POINTS as f64 * multiplier).round() as u32 + speed_bonus
}

/// Apply a variant's rules for one correct submit.
pub fn points_for(rules: ScoringRules, streak: u32, elapsed_ms: u64, token_count: usize) -> u32 {
    match rules {
        ScoringRules::LetterStreak => letter_points(streak),
        ScoringRules::PhonemeSpeed => {
            blend_points(streak, speed_bonus(elapsed_ms, token_count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_points_table() {
        assert_eq!(letter_points(0), 10);
        assert_eq!(letter_points(1), 10);
        assert_eq!(letter_points(2), 12);
        assert_eq!(letter_points(3), 14);
        assert_eq!(letter_points(10), 28);
    }

    #[test]
    fn test_speed_bonus_full_at_instant_solve() {
        assert_eq!(speed_bonus(0, 3), 5);
    }

    #[test]
    fn test_speed_bonus_midpoint_rounds_up() {
        // 3 tokens: 6000ms window; half elapsed gives 2.5, rounded to 3.
        assert_eq!(speed_bonus(3000, 3), 3);
    }

    #[test]
    fn test_speed_bonus_floors_at_window() {
        assert_eq!(speed_bonus(6000, 3), 0);
        assert_eq!(speed_bonus(60_000, 3), 0);
    }

    #[test]
    fn test_speed_bonus_decays_monotonically() {
        let mut prev = u32::MAX;
        for elapsed in (0..=6000).step_by(500) {
            let bonus = speed_bonus(elapsed, 3);
            assert!(bonus <= prev);
            prev = bonus;
        }
    }

    #[test]
    fn test_blend_points_without_streak() {
        assert_eq!(blend_points(1, 0), 10);
        assert_eq!(blend_points(1, 5), 15);
    }

    #[test]
    fn test_blend_points_with_streak_multiplier() {
        // streak 3: multiplier 1.4, round(14) + 2 = 16
        assert_eq!(blend_points(3, 2), 16);
        // streak 2: multiplier 1.2, round(12) = 12
        assert_eq!(blend_points(2, 0), 12);
        // streak 4: multiplier 1.6, round(16) + 5 = 21
        assert_eq!(blend_points(4, 5), 21);
    }

    #[test]
    fn test_points_determinism() {
        for _ in 0..100 {
            // 3600ms of a 6000ms window: bonus 2; round(10 * 1.4) + 2 = 16
            assert_eq!(points_for(ScoringRules::PhonemeSpeed, 3, 3600, 3), 16);
            assert_eq!(points_for(ScoringRules::LetterStreak, 3, 3600, 3), 14);
        }
    }
}
