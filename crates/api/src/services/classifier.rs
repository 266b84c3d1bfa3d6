//! HTTP client for the external image classifier.

use std::sync::Arc;

use async_trait::async_trait;
use domain::services::{ClassifierError, PlantClassifier};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use crate::config::RecognitionConfig;

#[derive(Debug, Deserialize)]
struct PredictionBody {
    probabilities: Vec<f64>,
}

/// Classifier served by a model-serving endpoint.
///
/// The image is posted as raw bytes; the endpoint answers with
/// `{"probabilities": [...]}` in label order.
#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    client: reqwest::Client,
    url: String,
}

impl RemoteClassifier {
    pub fn new(config: &RecognitionConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            url: config.url.trim().to_string(),
        })
    }
}

#[async_trait]
impl PlantClassifier for RemoteClassifier {
    async fn classify(&self, image: Vec<u8>) -> Result<Vec<f64>, ClassifierError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await
            .map_err(|e| ClassifierError::Inference(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Inference(format!(
                "classifier responded with {}",
                status
            )));
        }

        let body: PredictionBody = response
            .json()
            .await
            .map_err(|e| ClassifierError::Inference(format!("invalid response: {}", e)))?;

        Ok(body.probabilities)
    }
}

/// Builds the classifier when a model-serving URL is configured.
pub fn build_classifier(
    config: &RecognitionConfig,
) -> Result<Option<Arc<dyn PlantClassifier>>, reqwest::Error> {
    if !config.is_enabled() {
        tracing::info!("Recognition endpoint not configured, /recognition will answer 503");
        return Ok(None);
    }

    let classifier = RemoteClassifier::new(config)?;
    tracing::info!(url = %classifier.url, "Recognition endpoint configured");
    Ok(Some(Arc::new(classifier)))
}
