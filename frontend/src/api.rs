use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::{Classifier, ClassifierConfig, ClassifyError, InferenceResult, parse_response};
use web_sys::FormData;

/// Sends the selected file to the inference endpoint from the browser.
pub struct HttpClassifier {
    config: ClassifierConfig,
}

impl HttpClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }
}

impl Classifier<GlooFile> for HttpClassifier {
    async fn classify(&self, file: &GlooFile) -> Result<InferenceResult, ClassifyError> {
        let form_data =
            FormData::new().map_err(|e| ClassifyError::Transport(format!("{:?}", e)))?;
        form_data
            .append_with_blob(&self.config.field_name, file.as_ref())
            .map_err(|e| ClassifyError::Transport(format!("{:?}", e)))?;

        let request = Request::post(&self.config.endpoint_url)
            .body(form_data)
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        parse_response(status, &body)
    }
}
