//! Round construction - scrambled token pools for one active entry
//!
//! A round's pool holds the entry's target tokens plus decoys, in a
//! scrambled presentation order that is never the un-scrambled order.
//! Pool instances carry an id unique within the round so duplicate values
//! (the two Os of MOON) stay distinguishable.

use arrayvec::ArrayVec;
use phonics_play_types::{Token, DECOY_COUNTS, MAX_ROUND_TOKENS};

use crate::curriculum::Entry;
use crate::rng::{choose_distractors, shuffle_tokens, SimpleRng};

/// How a variant sources its decoy tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoyPolicy {
    /// Draw random letters, count determined by the level tier.
    GeneratedByTier,
    /// Use the decoys authored on the entry itself.
    Authored,
}

/// A token instance in the scrambled pool for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundToken {
    pub value: Token,
    /// Unique within the round; referenced by slots.
    pub id: u8,
    /// True while the token occupies a slot.
    pub placed: bool,
}

/// Number of generated decoys for a difficulty tier: 0, then 1, then 2.
pub fn decoy_count_for_tier(tier: usize) -> usize {
    DECOY_COUNTS[tier.min(DECOY_COUNTS.len() - 1)]
}

/// Build the scrambled pool for `entry`: target tokens plus decoys, in a
/// presentation order guarded against matching the original order.
pub fn build_round(
    rng: &mut SimpleRng,
    entry: &Entry,
    policy: DecoyPolicy,
    tier: usize,
) -> ArrayVec<RoundToken, MAX_ROUND_TOKENS> {
    let mut values: ArrayVec<Token, MAX_ROUND_TOKENS> = entry.target.iter().copied().collect();

    match policy {
        DecoyPolicy::GeneratedByTier => {
            let picked = choose_distractors(rng, entry.target, decoy_count_for_tier(tier));
            values.extend(picked);
        }
        DecoyPolicy::Authored => {
            values.extend(entry.decoys.iter().copied());
        }
    }

    shuffle_tokens(rng, &mut values);

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| RoundToken {
            value,
            id: i as u8,
            placed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::{PHONEME_BLENDER, WORD_BUILDER};

    #[test]
    fn test_decoy_count_per_tier() {
        assert_eq!(decoy_count_for_tier(0), 0);
        assert_eq!(decoy_count_for_tier(1), 1);
        assert_eq!(decoy_count_for_tier(2), 2);
        // Tiers past the table clamp to the hardest count.
        assert_eq!(decoy_count_for_tier(7), 2);
    }

    #[test]
    fn test_round_size_matches_target_plus_decoys() {
        let mut rng = SimpleRng::new(3);
        for (tier, expected_decoys) in [(0usize, 0usize), (1, 1), (2, 2)] {
            let entry = WORD_BUILDER.level(tier).entries[0];
            let pool = build_round(&mut rng, &entry, DecoyPolicy::GeneratedByTier, tier);
            assert_eq!(pool.len(), entry.target.len() + expected_decoys);
        }
    }

    #[test]
    fn test_round_ids_are_unique_and_dense() {
        let mut rng = SimpleRng::new(11);
        let entry = WORD_BUILDER.level(2).entries[0];
        let pool = build_round(&mut rng, &entry, DecoyPolicy::GeneratedByTier, 2);

        let mut ids: Vec<u8> = pool.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        let expected: Vec<u8> = (0..pool.len() as u8).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_round_contains_every_target_token() {
        let mut rng = SimpleRng::new(21);
        let entry = PHONEME_BLENDER.level(2).entries[5]; // SHARK
        let pool = build_round(&mut rng, &entry, DecoyPolicy::Authored, 2);

        assert_eq!(pool.len(), entry.target.len());
        for t in entry.target {
            assert!(pool.iter().any(|r| r.value == *t));
        }
    }

    #[test]
    fn test_round_never_starts_presolved() {
        let mut rng = SimpleRng::new(17);
        let entry = PHONEME_BLENDER.level(0).entries[0]; // CAT
        for _ in 0..1000 {
            let pool = build_round(&mut rng, &entry, DecoyPolicy::Authored, 0);
            let in_target_order = pool
                .iter()
                .zip(entry.target.iter())
                .all(|(r, t)| r.value == *t);
            assert!(!in_target_order);
        }
    }

    #[test]
    fn test_round_tokens_start_unplaced() {
        let mut rng = SimpleRng::new(5);
        let entry = WORD_BUILDER.level(1).entries[3];
        let pool = build_round(&mut rng, &entry, DecoyPolicy::GeneratedByTier, 1);
        assert!(pool.iter().all(|t| !t.placed));
    }
}
