// Resume analysis: prompt building, model-output normalization, and the two
// HTTP entry points. All model calls go through llm_client.

pub mod handlers;
pub mod normalizer;
pub mod prompts;
pub mod service;
