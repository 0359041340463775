//! PDF text extraction via pdf-extract.

use crate::error::{Error, Result};

/// Extract text from a PDF payload: every page's text, joined by newlines
/// in page order, trimmed.
///
/// The pdf_extract crate (and its cff-parser dependency) can panic on
/// certain fonts/glyphs, so the decode runs under catch_unwind.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let pages = match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            tracing::warn!("[Extract] PDF decode failed: {}", e);
            return Err(Error::ExtractionFailure(format!("PDF decode failed: {}", e)));
        }
        Err(_panic) => {
            tracing::error!("[Extract] PDF decode panicked, likely malformed fonts");
            return Err(Error::ExtractionFailure(
                "PDF decode panicked, likely contains malformed fonts".to_string(),
            ));
        }
    };

    tracing::debug!("[Extract] PDF decoded, {} pages", pages.len());

    Ok(pages.join("\n").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_cleanly() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, Error::ExtractionFailure(_)));
    }
}
