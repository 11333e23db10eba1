//! PDF text extraction. A thin layer over `pdf-extract`'s per-page API.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("The file '{}' was not found.", .0.display())]
    NotFound(PathBuf),

    #[error("not a readable PDF: {0}")]
    Unreadable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extracts the text of an in-memory PDF.
///
/// Pages are concatenated in document order with no separator. A page that
/// yields no text contributes an empty string.
pub fn extract_text_from_pdf_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Unreadable(e.to_string()))?;
    debug!("Extracted text from {} PDF page(s)", pages.len());
    Ok(join_pages(pages))
}

/// Same as [`extract_text_from_pdf_bytes`], run on the blocking pool.
///
/// `pdf-extract` panics on some malformed inputs; the panic surfaces as a
/// join error and is reported as `Unreadable`.
pub async fn extract_text_from_pdf_upload(bytes: bytes::Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text_from_pdf_bytes(&bytes))
        .await
        .unwrap_or_else(|join_err| {
            warn!("PDF extraction aborted: {join_err}");
            Err(ExtractError::Unreadable(
                "PDF parser aborted while reading the document".to_string(),
            ))
        })
}

/// Reads a PDF from disk and extracts its text.
pub async fn extract_text_from_pdf_path(path: &Path) -> Result<String, ExtractError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExtractError::NotFound(path.to_path_buf()))
        }
        Err(e) => return Err(ExtractError::Io(e)),
    };
    extract_text_from_pdf_upload(bytes.into()).await
}

fn join_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = String>,
{
    pages.into_iter().collect()
}
