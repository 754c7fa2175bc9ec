// Vocabulary: verb catalog, repository seam, and word-list preparation for games.

pub mod catalog;
pub mod handlers;
pub mod repository;
pub mod selection;

pub use repository::{InMemoryVerbRepository, VerbRepository};
