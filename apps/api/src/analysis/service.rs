//! The analysis pipeline shared by both HTTP handlers and the CLI:
//! prompt → model → normalizer.

use tracing::{debug, info};

use crate::analysis::normalizer::normalize_response;
use crate::analysis::prompts::build_analysis_prompt;
use crate::llm_client::{CompletionModel, LlmError};
use crate::models::analysis::{AnalysisRequest, AnalysisResult};

/// Runs one analysis. Only a failed model call is an error; unusable model
/// output comes back as the zero-score fallback result.
pub async fn analyze(
    model: &dyn CompletionModel,
    request: &AnalysisRequest,
) -> Result<AnalysisResult, LlmError> {
    let prompt = build_analysis_prompt(&request.resume_text, &request.job_description_text);
    debug!(
        "Built analysis prompt: resume_chars={}, jd_chars={}, prompt_chars={}",
        request.resume_text.len(),
        request.job_description_text.len(),
        prompt.len()
    );

    let raw = model.generate(&prompt).await?;
    let result = normalize_response(&raw);
    info!("Analysis complete: JD_match={}", result.match_score);

    Ok(result)
}
