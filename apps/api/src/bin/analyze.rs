use anyhow::Result;

use cv_analyzer::cli;
use cv_analyzer::config::Config;
use cv_analyzer::llm_client::{CompletionModel, GeminiClient};
use cv_analyzer::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::model_settings_from_env()?;

    // stdout carries the CLI's own output; logs stay quiet unless RUST_LOG asks.
    init_tracing(env!("CARGO_CRATE_NAME"), "warn");

    let model = GeminiClient::from_config(&config)?;
    let model = model.as_ref().map(|m| m as &dyn CompletionModel);

    let mut stdout = std::io::stdout();
    cli::run(std::env::args_os(), model, &mut stdout).await
}
