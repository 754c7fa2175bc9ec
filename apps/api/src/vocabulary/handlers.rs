//! Axum route handlers for the Verbs API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{Difficulty, Verb};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerbsQuery {
    pub difficulty: Option<Difficulty>,
}

/// GET /api/v1/verbs
pub async fn handle_list_verbs(
    State(state): State<AppState>,
    Query(params): Query<VerbsQuery>,
) -> Result<Json<Vec<Verb>>, AppError> {
    let verbs = state.verbs.list(params.difficulty).await?;
    Ok(Json(verbs))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::models::{Difficulty, Verb};
    use crate::routes::build_router;
    use crate::state::AppState;

    #[tokio::test]
    async fn test_list_verbs_filtered() {
        let app = build_router(AppState::with_builtin_verbs());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/verbs?difficulty=medium")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let verbs: Vec<Verb> = serde_json::from_slice(&body).unwrap();
        assert!(!verbs.is_empty());
        assert!(verbs.iter().all(|v| v.difficulty == Difficulty::Medium));
    }

    #[tokio::test]
    async fn test_unknown_difficulty_is_rejected() {
        let app = build_router(AppState::with_builtin_verbs());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/verbs?difficulty=impossible")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
