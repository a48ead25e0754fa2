//! Error types for the analysis lifecycle.

use thiserror::Error;

/// Why an inference call did not produce a result.
///
/// None of these reach the user verbatim; they collapse into the generic
/// [`FailureResult`](crate::FailureResult) after being logged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The request could not be built or sent, or the body could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    /// The body was not `{ class, confidence }`
    #[error("malformed response: {0}")]
    Parse(String),
}

/// Errors raised while assembling the PDF report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no exportable result is showing")]
    NotExportable,

    #[error("failed to read image: {0}")]
    ImageRead(String),

    #[error("invalid data URL: {0}")]
    DataUrl(String),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    #[error("failed to re-encode image: {0}")]
    ImageEncode(#[source] image::ImageError),

    #[error("failed to write PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading the property catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
