//! `analyze <resume.pdf> <job_description.txt>`: one analysis from the
//! terminal. Every diagnostic goes to `out`; failures are printed, not
//! returned, so the exit code does not vary with the failure kind.

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};

use crate::analysis::service::analyze;
use crate::extract::{extract_text_from_pdf_path, ExtractError};
use crate::llm_client::CompletionModel;
use crate::models::analysis::AnalysisRequest;

#[derive(Debug, Parser)]
#[command(name = "analyze", version, about = "Score a resume PDF against a job description")]
pub struct Cli {
    /// Resume PDF
    pub resume: PathBuf,

    /// Plain-text job description
    pub job_description: PathBuf,
}

/// Runs the CLI. `model` is `None` when no Gemini key is configured.
pub async fn run<I, T, W>(args: I, model: Option<&dyn CompletionModel>, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{e}")?;
            return Ok(());
        }
        Err(_) => {
            writeln!(
                out,
                "Error: You must provide the resume and job description file paths."
            )?;
            writeln!(out, "Usage: analyze <path_to_resume.pdf> <path_to_jd.txt>")?;
            return Ok(());
        }
    };

    let Some(model) = model else {
        writeln!(
            out,
            "Error: GEMINI_API_KEY not found. Please create a .env file with your API key."
        )?;
        return Ok(());
    };

    let resume_text = match extract_text_from_pdf_path(&cli.resume).await {
        Ok(text) if text.trim().is_empty() => {
            writeln!(
                out,
                "Error: No text could be extracted from '{}'.",
                cli.resume.display()
            )?;
            return Ok(());
        }
        Ok(text) => text,
        Err(e @ ExtractError::NotFound(_)) => {
            writeln!(out, "Error: {e}")?;
            return Ok(());
        }
        Err(e) => {
            writeln!(out, "An error occurred while reading the PDF: {e}")?;
            return Ok(());
        }
    };

    let job_description_text = match tokio::fs::read_to_string(&cli.job_description).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            writeln!(
                out,
                "Error: The file '{}' was not found.",
                cli.job_description.display()
            )?;
            return Ok(());
        }
        Err(e) => {
            writeln!(
                out,
                "An error occurred while reading the job description: {e}"
            )?;
            return Ok(());
        }
    };

    let request = AnalysisRequest {
        resume_text,
        job_description_text,
    };

    match analyze(model, &request).await {
        Ok(result) => {
            writeln!(out, "\n--- Analysis Result ---")?;
            writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        }
        Err(e) => {
            writeln!(out, "\nAn error occurred while calling the Gemini API: {e}")?;
        }
    }

    Ok(())
}
