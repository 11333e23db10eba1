//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::service::analyze;
use crate::errors::AppError;
use crate::extract::extract_text_from_pdf_upload;
use crate::models::analysis::{AnalysisRequest, AnalysisResult};
use crate::state::AppState;

const NO_RESUME_FILE: &str = "No resume file provided";
const NO_JOB_DESCRIPTION: &str = "No job description provided";
const NO_FILE_SELECTED: &str = "No resume file selected";
const INVALID_PDF: &str = "Failed to extract text from PDF. Please ensure it's a valid PDF file.";
const MISSING_TEXT_FIELDS: &str = "Both resume_text and job_description_text are required";
const TEXT_FIELDS_NOT_STRINGS: &str = "resume_text and job_description_text must be strings";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub result: AnalysisResult,
}

impl AnalyzeResponse {
    fn ok(result: AnalysisResult) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

/// A multipart part that carried a `filename` attribute.
#[derive(Debug)]
struct UploadedFile {
    file_name: String,
    bytes: Bytes,
}

#[derive(Debug, Default)]
struct UploadForm {
    resume: Option<UploadedFile>,
    job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Multipart form: `resume` (PDF file) and `job_description` (text).
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = match multipart {
        Ok(mut multipart) => read_upload_form(&mut multipart).await?,
        Err(rejection) => {
            warn!("Analyze request is not multipart: {rejection}");
            UploadForm::default()
        }
    };

    let resume = form
        .resume
        .ok_or_else(|| AppError::bad_request(NO_RESUME_FILE))?;
    let job_description = form
        .job_description
        .ok_or_else(|| AppError::bad_request(NO_JOB_DESCRIPTION))?;
    if resume.file_name.is_empty() {
        return Err(AppError::bad_request(NO_FILE_SELECTED));
    }

    info!(
        "Analyzing uploaded resume '{}' ({} bytes)",
        resume.file_name,
        resume.bytes.len()
    );

    let resume_text = extract_text_from_pdf_upload(resume.bytes)
        .await
        .map_err(|e| {
            warn!("Rejected resume '{}': {e}", resume.file_name);
            AppError::bad_request(INVALID_PDF)
        })?;

    let model = state.require_model()?;
    let request = AnalysisRequest {
        resume_text,
        job_description_text: job_description,
    };
    let result = analyze(model, &request).await?;

    Ok(Json(AnalyzeResponse::ok(result)))
}

/// POST /api/analyze-text
///
/// JSON body: `{resume_text, job_description_text}`. Only key presence is
/// checked; empty strings go to the model as-is.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request = parse_text_request(&body)?;

    info!(
        "Analyzing text resume ({} chars) against JD ({} chars)",
        request.resume_text.len(),
        request.job_description_text.len()
    );

    let model = state.require_model()?;
    let result = analyze(model, &request).await?;

    Ok(Json(AnalyzeResponse::ok(result)))
}

// ────────────────────────────────────────────────────────────────────────────
// Request parsing
// ────────────────────────────────────────────────────────────────────────────

/// Collects the `resume` file part and the `job_description` field.
/// A `resume` part without a filename attribute is a plain field, not a file.
async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart body: {}", e.body_text())))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("resume") => {
                let Some(file_name) = field.file_name().map(str::to_owned) else {
                    continue;
                };
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::bad_request(format!("Invalid multipart body: {}", e.body_text()))
                })?;
                form.resume = Some(UploadedFile { file_name, bytes });
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::bad_request(format!("Invalid multipart body: {}", e.body_text()))
                })?;
                form.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

fn parse_text_request(body: &[u8]) -> Result<AnalysisRequest, AppError> {
    let data: Value =
        serde_json::from_slice(body).map_err(|_| AppError::bad_request(MISSING_TEXT_FIELDS))?;

    let (Some(resume), Some(job_description)) =
        (data.get("resume_text"), data.get("job_description_text"))
    else {
        return Err(AppError::bad_request(MISSING_TEXT_FIELDS));
    };

    match (resume.as_str(), job_description.as_str()) {
        (Some(resume), Some(job_description)) => Ok(AnalysisRequest {
            resume_text: resume.to_string(),
            job_description_text: job_description.to_string(),
        }),
        _ => Err(AppError::bad_request(TEXT_FIELDS_NOT_STRINGS)),
    }
}
