use serde::{Deserialize, Serialize};

/// The only message a user ever sees for a failed analysis.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// Body returned by the classification endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InferenceResult {
    #[serde(rename = "class")]
    pub class_label: String,
    pub confidence: f64,
}

impl InferenceResult {
    pub fn new(class_label: impl Into<String>, confidence: f64) -> Self {
        Self {
            class_label: class_label.into(),
            confidence,
        }
    }
}

/// Locally synthesized outcome of a failed inference call.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FailureResult {
    pub message: String,
}

impl FailureResult {
    pub fn analysis_failed() -> Self {
        Self {
            message: ANALYSIS_FAILED_MESSAGE.to_string(),
        }
    }
}

impl Default for FailureResult {
    fn default() -> Self {
        Self::analysis_failed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_result_reads_the_class_field() {
        let parsed: InferenceResult =
            serde_json::from_str(r#"{"class":"Neem","confidence":0.91,"extra":true}"#).unwrap();
        assert_eq!(parsed, InferenceResult::new("Neem", 0.91));
    }

    #[test]
    fn inference_result_requires_both_fields() {
        assert!(serde_json::from_str::<InferenceResult>(r#"{"class":"Neem"}"#).is_err());
        assert!(serde_json::from_str::<InferenceResult>(r#"{"confidence":0.5}"#).is_err());
        assert!(
            serde_json::from_str::<InferenceResult>(r#"{"class":null,"confidence":0.5}"#).is_err()
        );
    }

    #[test]
    fn failure_result_carries_generic_message() {
        assert_eq!(FailureResult::default().message, ANALYSIS_FAILED_MESSAGE);
    }
}
