use serde::{Deserialize, Deserializer, Serialize};

/// Inputs to one analysis, after extraction.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub job_description_text: String,
}

/// The normalized model verdict. Wire names match what the frontend reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "JD_match", deserialize_with = "deserialize_match_score")]
    pub match_score: u8,
    pub analysis: String,
}

impl AnalysisResult {
    /// Stand-in result when the model output cannot be used as-is.
    pub fn format_error(raw_output: &str) -> Self {
        AnalysisResult {
            match_score: 0,
            analysis: format!("Analysis completed but response format error: {raw_output}"),
        }
    }
}

/// Accepts any JSON number in 0..=100; fractional scores are rounded.
fn deserialize_match_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let score = f64::deserialize(deserializer)?.round();
    if (0.0..=100.0).contains(&score) {
        Ok(score as u8)
    } else {
        Err(serde::de::Error::custom(format!(
            "JD_match {score} is outside 0..=100"
        )))
    }
}
