use crate::upload::Upload;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use shared::{Classifier, ClassifierConfig, ClassifyError, InferenceResult, parse_response};

/// Posts uploads to the inference endpoint as `multipart/form-data`.
#[derive(Clone)]
pub struct ReqwestClassifier {
    client: Client,
    config: ClassifierConfig,
}

impl ReqwestClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClassifierConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

impl Classifier<Upload> for ReqwestClassifier {
    async fn classify(&self, upload: &Upload) -> Result<InferenceResult, ClassifyError> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.name.clone())
            .mime_str(&upload.mime)
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;
        let form = Form::new().part(self.config.field_name.clone(), part);

        log::debug!("POST {} ({})", self.config.endpoint_url, upload.name);
        let response = self
            .client
            .post(&self.config.endpoint_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        parse_response(status, &body)
    }
}
