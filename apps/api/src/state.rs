use crate::analysis::analyzer::FeedbackAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Wraps the `Arc<dyn TextGenerator>` collaborator; swapped for a stub in tests.
    pub analyzer: FeedbackAnalyzer,
    pub config: Config,
}
