// Structured Generator: job description generation, refinement by regeneration,
// and best-effort search filter derivation.
// All LLM calls go through llm_client; no direct model API calls here.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
