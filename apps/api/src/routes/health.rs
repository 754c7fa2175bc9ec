use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and verb source.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let verbs_source = match &state.config.verbs_file {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "verbgrid-api",
        "verbs_source": verbs_source
    }))
}
