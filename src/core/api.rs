//! HTTP API for the kiosk
//!
//! Endpoints:
//! - GET  /health - Health check
//! - POST /vote - Record a vote (category + age bracket)
//! - POST /tap - Feed a pointer event to the admin gate
//! - GET  /summary - Session tally
//! - GET  /matrix - Aggregate matrix + totals + recent votes
//! - GET  /export - Plain-text session report
//! - POST /reset - Reset the session tally (history untouched)
//! - POST /view/vote - Return to the vote view

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::core::gate::GateConfig;
use crate::core::kiosk::Kiosk;
use crate::core::report::session_report;
use crate::core::store::FileStorage;
use crate::types::{
    AgeBracket, AggregateMatrix, Category, CategoryTotals, FeedbackRecord, TapOutput, ViewState,
};
use crate::{RECENT_VOTES_SHOWN, VERSION};

/// App state: one kiosk shared across handlers
pub struct AppState {
    pub kiosk: RwLock<Kiosk<FileStorage>>,
}

/// API error surface
#[derive(Debug, Error)]
pub enum ApiError {
    /// The shell must block votes until a bracket is chosen
    #[error("Choisis une tranche d'âge avant de voter.")]
    AgeNotSelected,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::AgeNotSelected => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, self.to_string()).into_response()
    }
}

/// Vote request: category token plus the previously selected bracket
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub category: Category,
    pub age: Option<AgeBracket>,
}

/// Vote response
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub category: Category,
    pub rating: i64,
    pub session_count: u64,
    pub persisted: bool,
}

/// Tap request; server clock is used when `timestamp_ms` is absent
#[derive(Debug, Deserialize)]
pub struct TapRequest {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: Option<u64>,
}

/// Tap response: gate output plus the resulting view
#[derive(Debug, Serialize)]
pub struct TapResponse {
    #[serde(flatten)]
    pub output: TapOutput,
    pub view: ViewState,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub session_votes: u64,
}

/// Session tally response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub session: CategoryTotals,
}

/// Operator view payload
#[derive(Debug, Serialize)]
pub struct MatrixResponse {
    pub matrix: AggregateMatrix,
    pub totals: CategoryTotals,
    pub recent: Vec<FeedbackRecord>,
    pub records: usize,
}

/// Create the API router over a data directory
pub fn create_router(data_dir: String) -> Router {
    let storage = FileStorage::new(data_dir);
    let kiosk = Kiosk::new(storage, GateConfig::default());
    let state = Arc::new(AppState {
        kiosk: RwLock::new(kiosk),
    });

    Router::new()
        .route("/health", get(health))
        .route("/vote", post(vote))
        .route("/tap", post(tap))
        .route("/summary", get(summary))
        .route("/matrix", get(matrix))
        .route("/export", get(export))
        .route("/reset", post(reset))
        .route("/view/vote", post(back_to_vote))
        .with_state(state)
}

/// Health check endpoint
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let kiosk = state.kiosk.read().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
        records: kiosk.record_count(),
        session_votes: kiosk.session().total(),
    })
}

/// Record a vote
async fn vote(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    let age = req.age.ok_or(ApiError::AgeNotSelected)?;

    let mut kiosk = state.kiosk.write().await;
    let outcome = kiosk.submit_vote(req.category, age);

    Ok(Json(VoteResponse {
        category: outcome.category,
        rating: outcome.rating,
        session_count: outcome.session_count,
        persisted: outcome.persisted,
    }))
}

/// Feed a pointer event to the admin gate
async fn tap(State(state): State<Arc<AppState>>, Json(req): Json<TapRequest>) -> Json<TapResponse> {
    let timestamp_ms = req
        .timestamp_ms
        .unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as u64);

    let mut kiosk = state.kiosk.write().await;
    let output = kiosk.on_tap(req.x, req.y, timestamp_ms);

    Json(TapResponse {
        output,
        view: kiosk.view(),
    })
}

/// Session tally
async fn summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let kiosk = state.kiosk.read().await;
    Json(SummaryResponse {
        session: kiosk.session(),
    })
}

/// Aggregate matrix, totals and recent votes
async fn matrix(State(state): State<Arc<AppState>>) -> Json<MatrixResponse> {
    let kiosk = state.kiosk.read().await;
    Json(MatrixResponse {
        matrix: kiosk.matrix(),
        totals: kiosk.totals(),
        recent: kiosk.recent(RECENT_VOTES_SHOWN).to_vec(),
        records: kiosk.record_count(),
    })
}

/// Plain-text session report
async fn export(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let kiosk = state.kiosk.read().await;
    let report = session_report(&kiosk.session());
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        report,
    )
}

/// Reset the session tally; persisted history is never touched
async fn reset(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let mut kiosk = state.kiosk.write().await;
    kiosk.reset_session();
    Json(SummaryResponse {
        session: kiosk.session(),
    })
}

/// Leave the operator view
async fn back_to_vote(State(state): State<Arc<AppState>>) -> StatusCode {
    let mut kiosk = state.kiosk.write().await;
    kiosk.back_to_vote();
    StatusCode::NO_CONTENT
}

/// Run the API server
pub async fn run_server(addr: &str, data_dir: String) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(data_dir);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("tapvote API running on {}", addr);
    info!("  POST /vote      - Record a vote");
    info!("  POST /tap       - Pointer event for the admin gate");
    info!("  GET  /summary   - Session tally");
    info!("  GET  /matrix    - Aggregate matrix");
    info!("  GET  /export    - Plain-text report");
    info!("  POST /reset     - Reset session tally");
    info!("  GET  /health    - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
