//! Error taxonomy for the summarization pipeline.
//!
//! Every failure aborts the current run and leaves the session ready for a
//! new attempt; nothing here is fatal to the process. Absent or malformed
//! *sections* inside an otherwise usable reply are not errors; they degrade
//! to placeholders at render time.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The document's media type is not one of the accepted formats.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The document exceeds the configured size ceiling.
    #[error("document too large: {size} bytes (limit {limit})")]
    DocumentTooLarge { size: u64, limit: u64 },

    /// The decoder failed, or produced text too short to summarize.
    #[error("text extraction failed: {0}")]
    ExtractionFailure(String),

    /// The provider rejected the request's credentials.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The provider returned a non-success status.
    #[error("provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider replied successfully but carried no usable text.
    #[error("provider returned an empty response")]
    EmptyResponse,

    /// Segmentation and bucketization produced nothing usable.
    #[error("reply contained no recognizable report content")]
    MalformedReport,

    /// The run was cancelled, or superseded by a newer run before it
    /// could publish its result.
    #[error("run cancelled")]
    Cancelled,

    /// Transport-level failure talking to the provider.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Filesystem failure reading a document or writing artifacts.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Report serialization failure.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
