//! Headless runner for the upload-analyze lifecycle.

pub mod client;
pub mod error;
pub mod terminal;
pub mod upload;

pub use client::ReqwestClassifier;
pub use error::CliError;
pub use upload::Upload;

use shared::{
    Classifier, ExportError, FailureResult, PropertyCatalog, ReportImage, ReportSnapshot, Session,
    analyze, render_pdf,
};

/// A CLI session has no on-screen preview to hold.
pub type CliSession = Session<Upload, ()>;

/// Selects `upload`, runs one classification and applies the outcome.
pub async fn run_analysis<C>(
    classifier: &C,
    catalog: &PropertyCatalog,
    upload: Upload,
) -> CliSession
where
    C: Classifier<Upload>,
{
    let mut session = Session::new();
    let generation = session.select_file(upload, |_| ());

    let outcome = match session.file() {
        Some(upload) => analyze(classifier, upload).await,
        None => Err(FailureResult::analysis_failed()),
    };
    session.complete(generation, outcome, catalog);
    session
}

/// Builds the PDF for a fully resolved session.
pub fn export_report(
    session: &CliSession,
    catalog: &PropertyCatalog,
) -> Result<Vec<u8>, ExportError> {
    let snapshot = ReportSnapshot::capture(session, catalog)?;
    let upload = session.file().ok_or(ExportError::NotExportable)?;
    let image = ReportImage::from_bytes(&upload.bytes)?;
    render_pdf(&snapshot.with_image(image))
}
