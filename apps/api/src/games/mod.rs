// Mini-game generators: word search, memory matching, verb-form quiz.
// Generators are pure and synchronous; randomness is injected by the caller.

pub mod handlers;
pub mod memory;
pub mod quiz;
pub mod word_search;
