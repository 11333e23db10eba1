//! Turns raw model output into an `AnalysisResult`.
//!
//! Output that is not a JSON object of the expected shape is not an error:
//! it degrades to a zero score whose analysis carries the raw output.

use tracing::warn;

use crate::models::analysis::AnalysisResult;

const FENCE: &str = "```";

/// Strips a markdown code fence (```` ``` ```` or ```` ```json ````) that
/// wraps the whole output. Both markers are anchored: the opening one at the
/// start, the closing one at the end. Text without a leading fence is
/// returned trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(after_open) = text.strip_prefix(FENCE) else {
        return text;
    };
    let body = after_open.strip_prefix("json").unwrap_or(after_open);
    body.strip_suffix(FENCE).unwrap_or(body).trim()
}

/// The body of the first complete fenced block inside `text`, for output
/// where the model wrote prose around the JSON.
fn embedded_block(text: &str) -> Option<&str> {
    let start = text.find(FENCE)?;
    let after_open = &text[start + FENCE.len()..];
    let body = after_open.strip_prefix("json").unwrap_or(after_open);
    let end = body.find(FENCE)?;
    Some(body[..end].trim())
}

/// Parses already-unfenced text into the strict result type.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, serde_json::Error> {
    serde_json::from_str(text)
}

/// Normalizes raw model output. Never fails.
pub fn normalize_response(raw: &str) -> AnalysisResult {
    let stripped = strip_code_fences(raw);
    let parsed = parse_analysis(stripped).or_else(|e| match embedded_block(raw.trim()) {
        Some(block) => parse_analysis(block).map_err(|_| e),
        None => Err(e),
    });
    match parsed {
        Ok(result) => result,
        Err(e) => {
            warn!("Model output did not match the analysis schema: {e}");
            AnalysisResult::format_error(raw)
        }
    }
}
