pub mod verb;

pub use verb::{Difficulty, Verb, VerbForm};
