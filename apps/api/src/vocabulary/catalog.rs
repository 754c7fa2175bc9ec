//! Built-in catalog of irregular English verbs, tagged by difficulty.
//!
//! Used when no `VERBS_FILE` is configured.

use crate::models::{Difficulty, Verb};

const EASY: &[(&str, &str, &str)] = &[
    ("go", "went", "gone"),
    ("eat", "ate", "eaten"),
    ("see", "saw", "seen"),
    ("come", "came", "come"),
    ("run", "ran", "run"),
    ("sit", "sat", "sat"),
    ("get", "got", "got"),
    ("give", "gave", "given"),
    ("take", "took", "taken"),
    ("make", "made", "made"),
    ("have", "had", "had"),
    ("do", "did", "done"),
    ("say", "said", "said"),
    ("know", "knew", "known"),
    ("buy", "bought", "bought"),
    ("drink", "drank", "drunk"),
    ("sleep", "slept", "slept"),
    ("write", "wrote", "written"),
    ("read", "read", "read"),
    ("swim", "swam", "swum"),
];

const MEDIUM: &[(&str, &str, &str)] = &[
    ("begin", "began", "begun"),
    ("break", "broke", "broken"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("choose", "chose", "chosen"),
    ("drive", "drove", "driven"),
    ("fall", "fell", "fallen"),
    ("feel", "felt", "felt"),
    ("fly", "flew", "flown"),
    ("forget", "forgot", "forgotten"),
    ("grow", "grew", "grown"),
    ("hide", "hid", "hidden"),
    ("keep", "kept", "kept"),
    ("leave", "left", "left"),
    ("lose", "lost", "lost"),
    ("meet", "met", "met"),
    ("sell", "sold", "sold"),
    ("speak", "spoke", "spoken"),
    ("teach", "taught", "taught"),
    ("throw", "threw", "thrown"),
];

const HARD: &[(&str, &str, &str)] = &[
    ("arise", "arose", "arisen"),
    ("bear", "bore", "borne"),
    ("bind", "bound", "bound"),
    ("bleed", "bled", "bled"),
    ("cling", "clung", "clung"),
    ("dwell", "dwelt", "dwelt"),
    ("forbid", "forbade", "forbidden"),
    ("forsake", "forsook", "forsaken"),
    ("grind", "ground", "ground"),
    ("kneel", "knelt", "knelt"),
    ("overtake", "overtook", "overtaken"),
    ("seek", "sought", "sought"),
    ("shrink", "shrank", "shrunk"),
    ("slay", "slew", "slain"),
    ("sling", "slung", "slung"),
    ("stride", "strode", "stridden"),
    ("strive", "strove", "striven"),
    ("swear", "swore", "sworn"),
    ("tread", "trod", "trodden"),
    ("weave", "wove", "woven"),
];

pub fn builtin_verbs() -> Vec<Verb> {
    [
        (Difficulty::Easy, EASY),
        (Difficulty::Medium, MEDIUM),
        (Difficulty::Hard, HARD),
    ]
    .into_iter()
    .flat_map(|(difficulty, table)| {
        table.iter().map(move |&(base, past_simple, past_participle)| Verb {
            base: base.to_string(),
            past_simple: past_simple.to_string(),
            past_participle: past_participle.to_string(),
            translation: None,
            difficulty,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_level_has_verbs() {
        let verbs = builtin_verbs();
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let count = verbs.iter().filter(|v| v.difficulty == d).count();
            assert!(count >= d.word_count(), "{d:?} has only {count} verbs");
        }
    }

    #[test]
    fn test_base_forms_unique_and_alphabetic() {
        let verbs = builtin_verbs();
        let bases: HashSet<&str> = verbs.iter().map(|v| v.base.as_str()).collect();
        assert_eq!(bases.len(), verbs.len());
        assert!(verbs
            .iter()
            .flat_map(|v| v.forms())
            .all(|f| f.chars().all(|c| c.is_ascii_lowercase())));
    }
}
