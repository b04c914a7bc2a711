//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use crate::analysis::models::{FeedbackAnalysis, FeedbackRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Runs one piece of employee feedback through the model and returns the
/// validated analysis. Blank feedback is rejected before the model is called.
/// Malformed bodies are reported in the same error envelope as every other failure.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackAnalysis>, AppError> {
    let Json(request) = payload?;
    let analysis = state.analyzer.analyze(&request.feedback).await?;
    Ok(Json(analysis))
}
