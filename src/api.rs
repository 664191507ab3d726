//! HTTP surface over the analyzer.
//!
//! - `GET  /health`  → `OK`
//! - `POST /analyze` → `FileStats` for `{ "name"?, "text" }`
//! - `POST /words`   → full ranked listing for `{ "text" }`

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::analyze::{ranker, Analyzer, FileStats, RankedEntry};
use crate::error::AnalysisError;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

impl AppState {
    pub fn new(analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/analyze", post(analyze))
        .route("/words", post(words))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct AnalyzeReq {
    #[serde(default)]
    name: Option<String>,
    text: String,
}

#[derive(Deserialize)]
struct WordsReq {
    text: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

pub struct ApiError(AnalysisError);

impl From<AnalysisError> for ApiError {
    fn from(e: AnalysisError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AnalysisError::NoSections(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::Io { .. } | AnalysisError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            error: self.0.kind(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

async fn analyze(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Result<Json<FileStats>, ApiError> {
    let name = body.name.unwrap_or_else(|| "inline".to_string());
    // Never log raw text.
    debug!(id = %anon_hash(&body.text), name = %name, "analyze request");
    let stats = state.analyzer.analyze_text(&name, &body.text)?;
    Ok(Json(stats))
}

async fn words(State(state): State<AppState>, Json(body): Json<WordsReq>) -> Json<Vec<RankedEntry>> {
    debug!(id = %anon_hash(&body.text), "words request");
    let map = state.analyzer.frequencies(&body.text);
    Json(ranker::rank(&map))
}

/// Short, stable id for a text: first 6 bytes of its SHA-256, hex.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
