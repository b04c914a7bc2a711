use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub const LIVENESS_MESSAGE: &str = "Employee Sentiment Analysis API is running ✅";

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": LIVENESS_MESSAGE }))
}

/// GET /health
/// Returns a simple status object with service version and model.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "model": state.analyzer.model(),
        "llm_timeout_secs": state.config.llm_timeout.as_secs(),
    }))
}
