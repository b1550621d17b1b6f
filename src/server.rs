//! HTTP surface
//!
//! Thin JSON plumbing over the game session. Handlers translate between
//! wire bodies and session operations; no game logic lives here.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::core::Score;
use crate::session::{Origin, Session};

#[derive(Debug, Deserialize)]
struct GuessRequest {
    // Absent field scores as the empty string, surfacing the length error
    #[serde(default)]
    word: String,
}

#[derive(Debug, Serialize)]
struct GuessResponse {
    result: Score,
    target_length: usize,
}

#[derive(Debug, Serialize)]
struct LengthResponse {
    length: usize,
}

#[derive(Debug, Serialize)]
struct AnswerResponse {
    answer: String,
}

#[derive(Debug, Serialize)]
struct NewGameResponse {
    length: usize,
    source: Origin,
    word: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Build the application router
///
/// CORS is wide open: the API is meant to sit behind a browser game served
/// from another origin.
pub fn router(session: Arc<Session>) -> Router {
    Router::new()
        .route("/guess", post(submit_guess))
        .route("/word", get(word_length))
        .route("/answer", get(reveal_answer))
        .route("/new", get(new_game).post(new_game))
        .layer(CorsLayer::permissive())
        .with_state(session)
}

async fn submit_guess(
    State(session): State<Arc<Session>>,
    Json(request): Json<GuessRequest>,
) -> Response {
    match session.guess(&request.word).await {
        Ok((result, target_length)) => Json(GuessResponse {
            result,
            target_length,
        })
        .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn word_length(State(session): State<Arc<Session>>) -> Json<LengthResponse> {
    Json(LengthResponse {
        length: session.target_length().await,
    })
}

async fn reveal_answer(State(session): State<Arc<Session>>) -> Json<AnswerResponse> {
    Json(AnswerResponse {
        answer: session.reveal().await.text().to_string(),
    })
}

async fn new_game(State(session): State<Arc<Session>>) -> Json<NewGameResponse> {
    let new_game = session.new_game().await;

    Json(NewGameResponse {
        length: new_game.word.length(),
        source: new_game.origin,
        word: new_game.word.text().to_string(),
    })
}
