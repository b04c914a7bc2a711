// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Instruction fragment that enforces JSON-only output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
Return ONLY valid JSON (no text, no markdown, no explanation). \
Do NOT wrap the JSON in code fences. \
Do NOT include any text before or after the JSON object.";
