pub mod catalog;
pub mod classify;
pub mod confidence;
pub mod encoding;
pub mod error;
pub mod model;
pub mod report;
pub mod session;
pub mod view;

pub use catalog::{NameContext, PropertyCatalog};
pub use classify::{Classifier, ClassifierConfig, analyze, parse_response};
pub use confidence::FormattedConfidence;
pub use error::{CatalogError, ClassifyError, ExportError};
pub use model::{ANALYSIS_FAILED_MESSAGE, FailureResult, InferenceResult};
pub use report::{REPORT_FILENAME, ReportImage, ReportSnapshot, render_pdf, report_layout};
pub use session::{Completion, Generation, Resolution, Session, SessionStatus};
pub use view::{ResolvedDetails, ResultStage, ResultView, result_view};
