// Feedback analysis: prompt construction, model output decoding, default filling.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
