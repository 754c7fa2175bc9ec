//! Verb-form quiz — multiple-choice questions on past simple and past participle.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Verb, VerbForm};

/// Wrong options offered alongside the correct answer, when enough exist.
pub const DISTRACTORS_PER_QUESTION: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub verb: String,
    pub form: VerbForm,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer_index: usize,
}

/// Builds up to `questions` questions, one per randomly chosen verb.
///
/// Distractors are the same form taken from other verbs, so every option is a
/// plausible conjugation.
pub fn build_quiz<R: Rng>(verbs: &[Verb], questions: usize, rng: &mut R) -> Vec<QuizQuestion> {
    let mut chosen: Vec<&Verb> = verbs.iter().collect();
    chosen.shuffle(rng);
    chosen.truncate(questions);

    chosen
        .into_iter()
        .map(|verb| {
            let form = if rng.random_bool(0.5) {
                VerbForm::PastSimple
            } else {
                VerbForm::PastParticiple
            };
            let answer = verb.form(form);

            let mut distractors: Vec<&str> = verbs
                .iter()
                .filter(|other| other.base != verb.base)
                .map(|other| other.form(form))
                .filter(|candidate| *candidate != answer)
                .collect();
            distractors.sort_unstable();
            distractors.dedup();
            distractors.shuffle(rng);
            distractors.truncate(DISTRACTORS_PER_QUESTION);

            let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
            options.push(answer.to_string());
            options.shuffle(rng);
            let answer_index = options
                .iter()
                .position(|option| option == answer)
                .unwrap_or_default();

            QuizQuestion {
                verb: verb.base.clone(),
                form,
                prompt: format!("What is the {} of \"{}\"?", form.label(), verb.base),
                options,
                answer_index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::catalog::builtin_verbs;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_answer_index_points_at_correct_form() {
        let verbs = builtin_verbs();
        let mut rng = StdRng::seed_from_u64(21);
        let quiz = build_quiz(&verbs, 10, &mut rng);
        assert_eq!(quiz.len(), 10);

        for question in &quiz {
            let verb = verbs.iter().find(|v| v.base == question.verb).unwrap();
            assert_eq!(question.options[question.answer_index], verb.form(question.form));
            assert_eq!(question.options.len(), DISTRACTORS_PER_QUESTION + 1);
            let unique: HashSet<&String> = question.options.iter().collect();
            assert_eq!(unique.len(), question.options.len());
        }
    }

    #[test]
    fn test_questions_use_distinct_verbs() {
        let verbs = builtin_verbs();
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = build_quiz(&verbs, 15, &mut rng);
        let bases: HashSet<&String> = quiz.iter().map(|q| &q.verb).collect();
        assert_eq!(bases.len(), quiz.len());
    }

    #[test]
    fn test_single_verb_has_no_distractors() {
        let verbs: Vec<Verb> = builtin_verbs().into_iter().take(1).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let quiz = build_quiz(&verbs, 5, &mut rng);
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz[0].options.len(), 1);
        assert_eq!(quiz[0].answer_index, 0);
    }
}
