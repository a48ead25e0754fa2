use shared::ClassifierConfig;

/// Endpoint settings baked in at build time, e.g.
/// `LEAFMD_ENDPOINT_URL=https://leaf.example/predict trunk build`.
pub fn classifier_config() -> ClassifierConfig {
    let mut config = ClassifierConfig::default();
    if let Some(url) = option_env!("LEAFMD_ENDPOINT_URL") {
        config.endpoint_url = url.to_string();
    }
    if let Some(field) = option_env!("LEAFMD_FIELD_NAME") {
        config.field_name = field.to_string();
    }
    config
}
