//! Feedback Analyzer — turns raw feedback text into a validated `FeedbackAnalysis`.
//!
//! Pipeline: trim + validate → build prompt → one collaborator call →
//! decode (`Result`) → fill defaults. No retries, no caching.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::models::{
    FeedbackAnalysis, RawAnalysis, ATTRITION_RISKS, SENTIMENTS, UNKNOWN,
};
use crate::analysis::prompts::ANALYSIS_PROMPT;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::TextGenerator;

/// Why model output could not be decoded into a `RawAnalysis`.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("model output is not valid JSON: {0}")]
    Syntax(serde_json::Error),

    #[error("model output is JSON but not an object")]
    NotAnObject,

    #[error("model output does not match the analysis schema: {0}")]
    Schema(serde_json::Error),
}

#[derive(Clone)]
pub struct FeedbackAnalyzer {
    generator: Arc<dyn TextGenerator>,
}

impl FeedbackAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn model(&self) -> &str {
        self.generator.model()
    }

    pub async fn analyze(&self, feedback: &str) -> Result<FeedbackAnalysis, AppError> {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            return Err(AppError::Validation("No feedback provided".to_string()));
        }

        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            model = self.generator.model(),
            chars = feedback.chars().count(),
            "Analyzing feedback"
        );

        let prompt = build_prompt(feedback);
        let raw_output = self.generator.generate(&prompt).await?;

        match decode_model_output(&raw_output) {
            Ok(raw) => {
                let analysis = fill_defaults(raw, feedback);
                info!(
                    %request_id,
                    sentiment = %analysis.sentiment,
                    attrition_risk = %analysis.attrition_risk,
                    recommendations = analysis.recommendations.len(),
                    "Feedback analyzed"
                );
                Ok(analysis)
            }
            Err(e) => {
                warn!(%request_id, "Rejecting model output: {e}; raw output: {raw_output}");
                Err(AppError::InvalidModelOutput {
                    reason: e.to_string(),
                    raw_output,
                })
            }
        }
    }
}

/// Builds the instruction prompt for one piece of (already trimmed) feedback.
pub fn build_prompt(feedback: &str) -> String {
    ANALYSIS_PROMPT
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{sentiments}", &SENTIMENTS.join(" | "))
        .replace("{attrition_risks}", &ATTRITION_RISKS.join(" | "))
        .replace("{feedback}", feedback)
}

/// Decodes model output into a `RawAnalysis`. A single wrapping code fence is tolerated.
pub fn decode_model_output(text: &str) -> Result<RawAnalysis, DecodeError> {
    let value: Value =
        serde_json::from_str(strip_json_fences(text)).map_err(DecodeError::Syntax)?;
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    serde_json::from_value(value).map_err(DecodeError::Schema)
}

/// Fills every field the model omitted with its default.
pub fn fill_defaults(raw: RawAnalysis, feedback: &str) -> FeedbackAnalysis {
    FeedbackAnalysis {
        feedback: raw.feedback.unwrap_or_else(|| feedback.to_string()),
        sentiment: raw.sentiment.unwrap_or_else(|| UNKNOWN.to_string()),
        attrition_risk: raw.attrition_risk.unwrap_or_else(|| UNKNOWN.to_string()),
        recommendations: raw.recommendations.unwrap_or_default(),
    }
}

/// Strips a ```json ... ``` or ``` ... ``` fence that wraps the whole output.
/// An unclosed fence is left in place so the output fails to decode.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(opened) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    match opened.strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => text,
    }
}
