use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder for a sentiment or attrition risk the model did not report.
pub const UNKNOWN: &str = "Unknown";

/// Allowed sentiment labels, as requested from the model.
pub const SENTIMENTS: [&str; 3] = ["Positive", "Neutral", "Negative"];

/// Allowed attrition risk labels, as requested from the model.
pub const ATTRITION_RISKS: [&str; 3] = ["High", "Medium", "Low"];

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: String,
}

/// Validated analysis returned to callers. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeedbackAnalysis {
    /// The analysed feedback text.
    pub feedback: String,
    /// Positive | Neutral | Negative | Unknown
    pub sentiment: String,
    /// High | Medium | Low | Unknown
    pub attrition_risk: String,
    pub recommendations: Vec<String>,
}

/// Model output as decoded, before defaults are filled in.
/// `null` and absent fields both decode to `None`.
#[derive(Debug, Default, Deserialize)]
pub struct RawAnalysis {
    pub feedback: Option<String>,
    pub sentiment: Option<String>,
    pub attrition_risk: Option<String>,
    pub recommendations: Option<Vec<String>>,
}

/// JSON Schema of `FeedbackAnalysis`, reported when model output cannot be decoded.
pub fn expected_format() -> Value {
    serde_json::to_value(schema_for!(FeedbackAnalysis)).unwrap_or(Value::Null)
}
