use serde::{Deserialize, Serialize};

/// Coarse level used to filter eligible verbs and size each game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Side length of the word-search grid.
    pub fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        }
    }

    /// Words requested for a word-search puzzle.
    pub fn word_count(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 10,
            Difficulty::Hard => 15,
        }
    }

    pub fn memory_pairs(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 8,
            Difficulty::Hard => 10,
        }
    }

    pub fn quiz_questions(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 10,
            Difficulty::Hard => 15,
        }
    }
}

/// Which conjugated form a game asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerbForm {
    Base,
    PastSimple,
    PastParticiple,
}

impl VerbForm {
    pub fn label(self) -> &'static str {
        match self {
            VerbForm::Base => "base form",
            VerbForm::PastSimple => "past simple",
            VerbForm::PastParticiple => "past participle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verb {
    pub base: String,
    pub past_simple: String,
    pub past_participle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
    pub difficulty: Difficulty,
}

impl Verb {
    pub fn form(&self, form: VerbForm) -> &str {
        match form {
            VerbForm::Base => &self.base,
            VerbForm::PastSimple => &self.past_simple,
            VerbForm::PastParticiple => &self.past_participle,
        }
    }

    /// Base, past simple and past participle, in that order.
    pub fn forms(&self) -> [&str; 3] {
        [&self.base, &self.past_simple, &self.past_participle]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parses_lowercase() {
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_word_count_fits_grid_budget() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert!(d.grid_size() <= 20);
            assert!(d.word_count() <= 20);
        }
    }

    #[test]
    fn test_verb_forms_order() {
        let verb = Verb {
            base: "go".to_string(),
            past_simple: "went".to_string(),
            past_participle: "gone".to_string(),
            translation: None,
            difficulty: Difficulty::Easy,
        };
        assert_eq!(verb.forms(), ["go", "went", "gone"]);
        assert_eq!(verb.form(VerbForm::PastParticiple), "gone");
    }
}
