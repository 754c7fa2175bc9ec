//! Verb Repository — pluggable source of verbs for every game.
//!
//! Default: `InMemoryVerbRepository` seeded from the built-in catalog, or from a
//! JSON file when `VERBS_FILE` is set. `AppState` holds an `Arc<dyn VerbRepository>`,
//! so handlers never reach for storage directly.

use std::path::Path;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::models::{Difficulty, Verb};
use crate::vocabulary::catalog::builtin_verbs;

/// The verb repository trait. Implement this to swap storage backends without
/// touching handlers.
#[async_trait]
pub trait VerbRepository: Send + Sync {
    /// All verbs, or only those tagged with `difficulty`.
    async fn list(&self, difficulty: Option<Difficulty>) -> Result<Vec<Verb>, AppError>;
}

pub struct InMemoryVerbRepository {
    verbs: Vec<Verb>,
}

impl InMemoryVerbRepository {
    pub fn new(verbs: Vec<Verb>) -> Self {
        Self { verbs }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_verbs())
    }

    /// Loads a JSON array of verbs. Every form must be a non-empty ASCII word.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read verbs file '{}'", path.display()))?;
        let verbs: Vec<Verb> = serde_json::from_str(&raw)
            .with_context(|| format!("Verbs file '{}' is not a valid verb list", path.display()))?;

        for verb in &verbs {
            for form in verb.forms() {
                if form.is_empty() || !form.chars().all(|c| c.is_ascii_alphabetic()) {
                    bail!(
                        "Verb '{}' has invalid form '{}': only ASCII letters are allowed",
                        verb.base,
                        form
                    );
                }
            }
        }

        info!(count = verbs.len(), path = %path.display(), "Loaded verbs file");
        Ok(Self::new(verbs))
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }
}

#[async_trait]
impl VerbRepository for InMemoryVerbRepository {
    async fn list(&self, difficulty: Option<Difficulty>) -> Result<Vec<Verb>, AppError> {
        Ok(self
            .verbs
            .iter()
            .filter(|v| difficulty.map_or(true, |d| v.difficulty == d))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_list_filters_by_difficulty() {
        let repo = InMemoryVerbRepository::builtin();
        let all = repo.list(None).await.unwrap();
        let hard = repo.list(Some(Difficulty::Hard)).await.unwrap();
        assert_eq!(all.len(), repo.len());
        assert!(!hard.is_empty());
        assert!(hard.iter().all(|v| v.difficulty == Difficulty::Hard));
        assert!(hard.len() < all.len());
    }

    #[tokio::test]
    async fn test_loads_verbs_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"base":"go","past_simple":"went","past_participle":"gone","translation":"ir","difficulty":"easy"}}]"#
        )
        .unwrap();

        let repo = InMemoryVerbRepository::from_json_file(file.path()).unwrap();
        let verbs = repo.list(Some(Difficulty::Easy)).await.unwrap();
        assert_eq!(verbs.len(), 1);
        assert_eq!(verbs[0].past_simple, "went");
        assert_eq!(verbs[0].translation.as_deref(), Some("ir"));
    }

    #[test]
    fn test_rejects_non_alphabetic_forms() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"base":"get","past_simple":"got","past_participle":"got/gotten","difficulty":"easy"}}]"#
        )
        .unwrap();

        let err = InMemoryVerbRepository::from_json_file(file.path())
            .err()
            .expect("should reject slash in form");
        assert!(err.to_string().contains("got/gotten"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = InMemoryVerbRepository::from_json_file(&dir.path().join("nope.json"));
        assert!(result.is_err());
    }
}
