pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::games::handlers as games;
use crate::state::AppState;
use crate::vocabulary::handlers as vocabulary;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Verbs API
        .route("/api/v1/verbs", get(vocabulary::handle_list_verbs))
        // Games API
        .route("/api/v1/games/word-search", post(games::handle_word_search))
        .route(
            "/api/v1/games/word-search/check",
            post(games::handle_check_selection),
        )
        .route("/api/v1/games/memory", post(games::handle_memory))
        .route("/api/v1/games/quiz", post(games::handle_quiz))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health() {
        let app = build_router(AppState::with_builtin_verbs());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["verbs_source"], "builtin");
    }
}
