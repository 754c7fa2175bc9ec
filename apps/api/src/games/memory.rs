//! Memory matching — a shuffled deck of base/past-simple card pairs.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Verb, VerbForm};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryCard {
    /// Both cards of a pair carry the same id.
    pub pair_id: usize,
    pub form: VerbForm,
    pub text: String,
}

/// Picks up to `pairs` random verbs and returns two cards per verb, shuffled.
///
/// Verbs whose past simple equals the base form (`read`, `put`) would give two
/// identical cards and are skipped. Fewer usable verbs than `pairs` yields a
/// smaller deck.
pub fn build_memory_deck<R: Rng>(verbs: &[Verb], pairs: usize, rng: &mut R) -> Vec<MemoryCard> {
    let mut chosen: Vec<&Verb> = verbs
        .iter()
        .filter(|v| !v.base.eq_ignore_ascii_case(&v.past_simple))
        .collect();
    chosen.shuffle(rng);
    chosen.truncate(pairs);

    let mut cards = Vec::with_capacity(chosen.len() * 2);
    for (pair_id, verb) in chosen.into_iter().enumerate() {
        for form in [VerbForm::Base, VerbForm::PastSimple] {
            cards.push(MemoryCard {
                pair_id,
                form,
                text: verb.form(form).to_string(),
            });
        }
    }

    cards.shuffle(rng);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;
    use crate::vocabulary::catalog::builtin_verbs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_each_pair_has_base_and_past_card() {
        let verbs = builtin_verbs();
        let mut rng = StdRng::seed_from_u64(4);
        let deck = build_memory_deck(&verbs, 6, &mut rng);
        assert_eq!(deck.len(), 12);

        for pair_id in 0..6 {
            let pair: Vec<&MemoryCard> = deck.iter().filter(|c| c.pair_id == pair_id).collect();
            assert_eq!(pair.len(), 2);
            let base = pair.iter().find(|c| c.form == VerbForm::Base).unwrap();
            let past = pair.iter().find(|c| c.form == VerbForm::PastSimple).unwrap();
            let verb = verbs.iter().find(|v| v.base == base.text).unwrap();
            assert_eq!(verb.past_simple, past.text);
        }
    }

    #[test]
    fn test_skips_verbs_with_identical_base_and_past() {
        let verbs = builtin_verbs();
        let read_only: Vec<Verb> = verbs.iter().filter(|v| v.base == "read").cloned().collect();
        let mut rng = StdRng::seed_from_u64(2);
        assert!(build_memory_deck(&read_only, 5, &mut rng).is_empty());

        let easy: Vec<Verb> = verbs
            .into_iter()
            .filter(|v| v.difficulty == Difficulty::Easy)
            .collect();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let deck = build_memory_deck(&easy, 20, &mut rng);
            assert!(deck.iter().all(|c| c.text != "read"));
            for pair_id in 0..deck.len() / 2 {
                let texts: Vec<&str> = deck
                    .iter()
                    .filter(|c| c.pair_id == pair_id)
                    .map(|c| c.text.as_str())
                    .collect();
                assert_ne!(texts[0], texts[1]);
            }
        }
    }

    #[test]
    fn test_small_verb_list_gives_small_deck() {
        let verbs: Vec<Verb> = builtin_verbs()
            .into_iter()
            .filter(|v| v.difficulty == Difficulty::Easy)
            .take(3)
            .collect();
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(build_memory_deck(&verbs, 10, &mut rng).len(), 6);
    }
}
