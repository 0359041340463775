//! Accepted document payloads.
//!
//! A [`Document`] is validated on construction: exactly two media types are
//! accepted (PDF and DOCX) and the payload must fit under the configured
//! size ceiling. Everything downstream can rely on those invariants.

use std::path::Path;

use crate::error::{Error, Result};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// The two accepted document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolve a declared MIME type to a known format.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
        }
    }
}

/// A validated uploaded document: binary payload, declared media type, name.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    kind: DocumentKind,
    data: Vec<u8>,
}

impl Document {
    /// Validate and wrap an uploaded payload.
    pub fn new(name: &str, mime: &str, data: Vec<u8>, max_bytes: u64) -> Result<Self> {
        let kind = DocumentKind::from_mime(mime)
            .ok_or_else(|| Error::UnsupportedFormat(mime.to_string()))?;

        let size = data.len() as u64;
        if size > max_bytes {
            return Err(Error::DocumentTooLarge {
                size,
                limit: max_bytes,
            });
        }

        Ok(Self {
            name: name.to_string(),
            kind,
            data,
        })
    }

    /// Read a document from disk, inferring the media type from the file name.
    pub fn from_path(path: &Path, max_bytes: u64) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());

        let mime = mime_guess::from_path(path)
            .first_raw()
            .ok_or_else(|| Error::UnsupportedFormat(name.clone()))?;

        let data = std::fs::read(path)?;
        Self::new(&name, mime, data, max_bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    /// Base name used for export artifacts: everything before the first dot.
    pub fn base_name(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exactly_pdf_and_docx() {
        assert_eq!(DocumentKind::from_mime(PDF_MIME), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_mime(DOCX_MIME), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_mime("text/plain"), None);
        assert_eq!(DocumentKind::from_mime("application/msword"), None);
    }

    #[test]
    fn rejects_unknown_media_type() {
        let err = Document::new("notes.txt", "text/plain", vec![0u8; 8], 1024).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_oversized_payload() {
        let err = Document::new("big.pdf", PDF_MIME, vec![0u8; 32], 16).unwrap_err();
        match err {
            Error::DocumentTooLarge { size, limit } => {
                assert_eq!(size, 32);
                assert_eq!(limit, 16);
            }
            other => panic!("expected DocumentTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn base_name_stops_at_first_dot() {
        let doc = Document::new("report.v2.pdf", PDF_MIME, vec![0u8; 4], 1024).unwrap();
        assert_eq!(doc.base_name(), "report");
    }
}
