use std::sync::Arc;

use crate::config::Config;
use crate::vocabulary::VerbRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable verb source. Default: built-in catalog, or `VERBS_FILE` when set.
    pub verbs: Arc<dyn VerbRepository>,
}

impl AppState {
    pub fn new(config: Config, verbs: Arc<dyn VerbRepository>) -> Self {
        Self { config, verbs }
    }

    #[cfg(test)]
    pub fn with_builtin_verbs() -> Self {
        Self::new(
            Config::for_tests(),
            Arc::new(crate::vocabulary::InMemoryVerbRepository::builtin()),
        )
    }
}
