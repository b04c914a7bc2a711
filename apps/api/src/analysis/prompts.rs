// Feedback analysis prompt templates.

pub const ANALYSIS_PROMPT: &str = r#"You are an HR analytics assistant.
Analyze the employee feedback below. {json_only}
The JSON must exactly follow this schema:
{
    "feedback": "<the original feedback>",
    "sentiment": "{sentiments}",
    "attrition_risk": "{attrition_risks}",
    "recommendations": ["<string>", "<string>", ...]
}

Employee Feedback: "{feedback}""#;
