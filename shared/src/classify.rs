use crate::error::ClassifyError;
use crate::model::{FailureResult, InferenceResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT_URL: &str = "http://localhost:8001/predict";
pub const DEFAULT_FIELD_NAME: &str = "file";

/// Where and how uploads are sent for classification.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ClassifierConfig {
    pub endpoint_url: String,
    pub field_name: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            ..Self::default()
        }
    }

    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }
}

/// One remote classification of an uploaded file.
///
/// Implementations send exactly one request and never retry.
#[allow(async_fn_in_trait)]
pub trait Classifier<F: ?Sized> {
    async fn classify(&self, file: &F) -> Result<InferenceResult, ClassifyError>;
}

/// Validates an endpoint reply: 2xx status and a `{ class, confidence }` body.
pub fn parse_response(status: u16, body: &str) -> Result<InferenceResult, ClassifyError> {
    if !(200..300).contains(&status) {
        return Err(ClassifyError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ClassifyError::Parse(e.to_string()))
}

/// Runs one classification and collapses every failure into the generic
/// user-facing message.
pub async fn analyze<F, C>(classifier: &C, file: &F) -> Result<InferenceResult, FailureResult>
where
    F: ?Sized,
    C: Classifier<F>,
{
    match classifier.classify(file).await {
        Ok(result) => {
            log::info!(
                "Classified as {} ({:.4})",
                result.class_label,
                result.confidence
            );
            Ok(result)
        }
        Err(e) => {
            log::warn!("Inference call failed: {}", e);
            Err(FailureResult::analysis_failed())
        }
    }
}
