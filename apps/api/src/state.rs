use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{CompletionModel, GeminiClient};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when no Gemini key is configured. Analysis requests then fail
    /// with a configuration error after input validation.
    pub model: Option<Arc<dyn CompletionModel>>,
}

impl AppState {
    pub fn new(config: Config, model: Option<Arc<dyn CompletionModel>>) -> Self {
        Self {
            config: Arc::new(config),
            model,
        }
    }

    /// Wires the production Gemini client from config.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let model = GeminiClient::from_config(&config)?
            .map(|client| Arc::new(client) as Arc<dyn CompletionModel>);
        Ok(Self::new(config, model))
    }

    pub fn require_model(&self) -> Result<&dyn CompletionModel, AppError> {
        self.model.as_deref().ok_or_else(AppError::missing_api_key)
    }
}
