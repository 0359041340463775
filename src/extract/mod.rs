//! Text extraction from uploaded documents.
//!
//! Pure Rust extraction: PDF via pdf-extract, DOCX via docx-rs. No system
//! libraries required. Extraction either returns the full plain text of the
//! document or fails; no partial state survives a failure.

mod docx;
mod pdf;

use crate::document::{Document, DocumentKind};
use crate::error::{Error, Result};

/// Extract plain text from a document.
///
/// Text shorter than `min_len` is treated as a failed extraction: it is too
/// short to summarize meaningfully, which usually means a scanned or
/// image-only document.
pub fn extract(document: &Document, min_len: usize) -> Result<String> {
    let text = match document.kind() {
        DocumentKind::Pdf => pdf::extract_text(document.data())?,
        DocumentKind::Docx => docx::extract_text(document.data())?,
    };

    if text.len() < min_len {
        tracing::warn!(
            "[Extract] text too short ({} chars < {}) from {}",
            text.len(),
            min_len,
            document.name()
        );
        return Err(Error::ExtractionFailure(format!(
            "extracted text too short ({} chars), likely a scanned or empty document",
            text.len()
        )));
    }

    tracing::info!(
        "[Extract] {} chars, {} words from {}",
        text.len(),
        text.split_whitespace().count(),
        document.name()
    );

    Ok(text)
}
