//! Axum route handlers for the Games API.
//!
//! Each handler draws a seed (or takes the caller's), drives every random choice
//! from it and echoes it back so any game can be regenerated exactly.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{info, trace};
use uuid::Uuid;

use crate::errors::AppError;
use crate::games::memory::{build_memory_deck, MemoryCard};
use crate::games::quiz::{build_quiz, QuizQuestion};
use crate::games::word_search::{find_selection, generate, Placement, Selection};
use crate::models::{Difficulty, Verb};
use crate::state::AppState;
use crate::vocabulary::selection::{normalize_words, word_search_candidates};

/// Largest grid the word search will build.
pub const MAX_GRID_SIZE: usize = 20;

/// Largest memory deck (in pairs) or quiz (in questions).
pub const MAX_GAME_ITEMS: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct WordSearchRequest {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Overrides the difficulty's grid size.
    pub size: Option<usize>,
    /// Explicit words; when absent, words are drawn from the verb repository.
    pub words: Option<Vec<String>>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordSearchResponse {
    pub puzzle_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub size: usize,
    pub rows: Vec<String>,
    pub placements: Vec<Placement>,
    /// Words handed to the generator. `placed < requested` is normal.
    pub requested: usize,
    pub placed: usize,
}

#[derive(Debug, Deserialize)]
pub struct CheckSelectionRequest {
    pub placements: Vec<Placement>,
    pub selection: Selection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckSelectionResponse {
    pub found: bool,
    pub placement: Option<Placement>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GameRequest {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Pairs for memory, questions for the quiz. Defaults per difficulty.
    pub count: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemoryResponse {
    pub game_id: Uuid,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub cards: Vec<MemoryCard>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    pub game_id: Uuid,
    pub difficulty: Difficulty,
    pub seed: u64,
    pub questions: Vec<QuizQuestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/games/word-search
pub async fn handle_word_search(
    State(state): State<AppState>,
    Json(request): Json<WordSearchRequest>,
) -> Result<Json<WordSearchResponse>, AppError> {
    let size = request
        .size
        .unwrap_or_else(|| request.difficulty.grid_size());
    if size == 0 || size > MAX_GRID_SIZE {
        return Err(AppError::Validation(format!(
            "size must be between 1 and {MAX_GRID_SIZE}, got {size}"
        )));
    }

    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let words = match &request.words {
        Some(raw) => normalize_words(raw)?,
        None => {
            let verbs = available_verbs(&state, request.difficulty).await?;
            word_search_candidates(&verbs, size, request.difficulty.word_count(), &mut rng)
        }
    };

    let puzzle = generate(&words, size, &mut rng);
    trace!("Word search grid:\n{puzzle}");
    info!(
        size,
        seed,
        requested = words.len(),
        placed = puzzle.placements.len(),
        "Word search created"
    );

    Ok(Json(WordSearchResponse {
        puzzle_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        difficulty: request.difficulty,
        seed,
        size,
        rows: puzzle.rows(),
        requested: words.len(),
        placed: puzzle.placements.len(),
        placements: puzzle.placements,
    }))
}

/// POST /api/v1/games/word-search/check
///
/// Stateless: the client sends back the placements it was given.
pub async fn handle_check_selection(
    Json(request): Json<CheckSelectionRequest>,
) -> Json<CheckSelectionResponse> {
    let placement = find_selection(&request.placements, &request.selection).cloned();
    Json(CheckSelectionResponse {
        found: placement.is_some(),
        placement,
    })
}

/// POST /api/v1/games/memory
pub async fn handle_memory(
    State(state): State<AppState>,
    Json(request): Json<GameRequest>,
) -> Result<Json<MemoryResponse>, AppError> {
    let pairs = game_size(request.count, request.difficulty.memory_pairs())?;
    let verbs = available_verbs(&state, request.difficulty).await?;

    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let cards = build_memory_deck(&verbs, pairs, &mut rng);

    Ok(Json(MemoryResponse {
        game_id: Uuid::new_v4(),
        difficulty: request.difficulty,
        seed,
        cards,
    }))
}

/// POST /api/v1/games/quiz
pub async fn handle_quiz(
    State(state): State<AppState>,
    Json(request): Json<GameRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let count = game_size(request.count, request.difficulty.quiz_questions())?;
    let verbs = available_verbs(&state, request.difficulty).await?;

    let seed = request.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let questions = build_quiz(&verbs, count, &mut rng);

    Ok(Json(QuizResponse {
        game_id: Uuid::new_v4(),
        difficulty: request.difficulty,
        seed,
        questions,
    }))
}

async fn available_verbs(state: &AppState, difficulty: Difficulty) -> Result<Vec<Verb>, AppError> {
    let verbs = state.verbs.list(Some(difficulty)).await?;
    if verbs.is_empty() {
        return Err(AppError::NotFound(format!(
            "No verbs available for difficulty {difficulty:?}"
        )));
    }
    Ok(verbs)
}

fn game_size(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    let count = requested.unwrap_or(default);
    if count == 0 || count > MAX_GAME_ITEMS {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_GAME_ITEMS}, got {count}"
        )));
    }
    Ok(count)
}
