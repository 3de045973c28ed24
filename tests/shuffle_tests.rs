//! Shuffle and round-construction guarantees across many seeds.

use phonics_play::core::{
    build_round, decoy_count_for_tier, DecoyPolicy, GameState, SimpleRng, PHONEME_BLENDER,
    WORD_BUILDER,
};
use phonics_play::types::Token;

#[test]
fn no_round_is_ever_presolved() {
    for seed in 1..=1000u32 {
        let state = GameState::word_builder(seed);
        let target = state.current_entry().target;
        let pool: Vec<Token> = state.tokens().iter().map(|t| t.value).collect();
        assert_ne!(
            &pool[..target.len()],
            target,
            "seed {seed} dealt the answer in order"
        );
    }
}

#[test]
fn pool_always_contains_the_target_tokens() {
    for seed in 1..=200u32 {
        let mut rng = SimpleRng::new(seed);
        for tier in 0..WORD_BUILDER.level_count() {
            for entry in WORD_BUILDER.level(tier).entries {
                let round = build_round(&mut rng, entry, DecoyPolicy::GeneratedByTier, tier);
                let mut pool: Vec<&str> =
                    round.iter().map(|t| t.value.as_str()).collect();
                for expected in entry.target {
                    let pos = pool
                        .iter()
                        .position(|v| *v == expected.as_str())
                        .expect("target token missing from pool");
                    pool.swap_remove(pos);
                }
                assert_eq!(
                    pool.len(),
                    decoy_count_for_tier(tier),
                    "leftovers are exactly the tier's decoys"
                );
            }
        }
    }
}

#[test]
fn authored_decoys_are_dealt_verbatim() {
    let mut rng = SimpleRng::new(42);
    for tier in 0..PHONEME_BLENDER.level_count() {
        for entry in PHONEME_BLENDER.level(tier).entries {
            let round = build_round(&mut rng, entry, DecoyPolicy::Authored, tier);
            assert_eq!(round.len(), entry.target.len() + entry.decoys.len());
            for decoy in entry.decoys {
                assert!(round.iter().any(|t| t.value == *decoy));
            }
        }
    }
}

#[test]
fn generated_decoys_never_alias_the_target() {
    for seed in 1..=200u32 {
        let mut rng = SimpleRng::new(seed);
        // Hard tier draws two decoys.
        for entry in WORD_BUILDER.level(2).entries {
            let round = build_round(&mut rng, entry, DecoyPolicy::GeneratedByTier, 2);
            let mut remaining_target: Vec<&str> =
                entry.target.iter().map(|t| t.as_str()).collect();
            let mut decoys: Vec<&str> = Vec::new();
            for token in &round {
                if let Some(pos) = remaining_target.iter().position(|v| *v == token.value.as_str()) {
                    remaining_target.swap_remove(pos);
                } else {
                    decoys.push(token.value.as_str());
                }
            }
            for decoy in &decoys {
                assert!(
                    !entry.target.iter().any(|t| t.as_str() == *decoy),
                    "decoy {decoy} duplicates a target letter of {}",
                    entry.word
                );
            }
            let mut unique = decoys.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), decoys.len(), "decoys are distinct");
        }
    }
}

#[test]
fn rng_stream_is_stable() {
    let mut a = SimpleRng::new(12345);
    let mut b = SimpleRng::new(12345);
    for _ in 0..1000 {
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
