//! Word-list preparation for the word-search generator.
//!
//! The generator expects uppercase, deduplicated words; everything here exists
//! to hand it exactly that.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::AppError;
use crate::models::Verb;

/// Upper bound on words in a single puzzle.
pub const MAX_WORDS: usize = 20;

/// Collects every verb form that can fit a `size`×`size` grid, deduplicated,
/// and picks `count` of them at random.
pub fn word_search_candidates<R: Rng>(
    verbs: &[Verb],
    size: usize,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool: Vec<String> = verbs
        .iter()
        .flat_map(|v| v.forms())
        .map(|form| form.trim().to_ascii_uppercase())
        .filter(|word| is_grid_word(word, size))
        .filter(|word| seen.insert(word.clone()))
        .collect();

    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

/// Trims, uppercases and deduplicates caller-supplied words, keeping first-seen order.
///
/// Rejects non-letter words. Over-long words are kept: the generator drops
/// them on its own.
pub fn normalize_words(raw: &[String]) -> Result<Vec<String>, AppError> {
    if raw.len() > MAX_WORDS {
        return Err(AppError::Validation(format!(
            "At most {MAX_WORDS} words per puzzle, got {}",
            raw.len()
        )));
    }

    let mut seen = HashSet::new();
    let mut words = Vec::with_capacity(raw.len());
    for word in raw {
        let word = word.trim().to_ascii_uppercase();
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::Validation(format!(
                "Word '{word}' must contain only letters A-Z"
            )));
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }
    Ok(words)
}

fn is_grid_word(word: &str, size: usize) -> bool {
    (2..=size).contains(&word.len()) && word.chars().all(|c| c.is_ascii_uppercase())
}
