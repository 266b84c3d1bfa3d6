//! Plant image recognition.
//!
//! The image classifier is an external model; this module owns the label set
//! and turns its probability vector into the response shape.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::recognition::RecognitionResponse;
use crate::services::irrigation::round2;

/// Labels in the order of the classifier's output vector.
pub const CLASS_NAMES: [&str; 8] = [
    "ajo",
    "geranio",
    "hierbabuena",
    "menta",
    "oregano",
    "orquidea",
    "rosachina",
    "tomatecherry",
];

/// Error type for image classification.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Classifier is not available: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Inference(String),
}

/// An image classifier producing one probability per entry of [`CLASS_NAMES`].
#[async_trait]
pub trait PlantClassifier: Send + Sync {
    async fn classify(&self, image: Vec<u8>) -> Result<Vec<f64>, ClassifierError>;
}

/// Builds the recognition response from a probability vector.
///
/// Ties resolve to the first label with the maximal probability.
pub fn summarize(probabilities: &[f64]) -> Result<RecognitionResponse, ClassifierError> {
    if probabilities.len() != CLASS_NAMES.len() {
        return Err(ClassifierError::Inference(format!(
            "expected {} probabilities, got {}",
            CLASS_NAMES.len(),
            probabilities.len()
        )));
    }
    if probabilities.iter().any(|p| !p.is_finite()) {
        return Err(ClassifierError::Inference(
            "classifier returned a non-finite probability".into(),
        ));
    }

    let mut best = 0;
    for (i, p) in probabilities.iter().enumerate() {
        if *p > probabilities[best] {
            best = i;
        }
    }

    let all_probabilities: BTreeMap<String, f64> = CLASS_NAMES
        .iter()
        .zip(probabilities)
        .map(|(name, p)| (name.to_string(), round2(p * 100.0)))
        .collect();

    Ok(RecognitionResponse {
        plant_type: CLASS_NAMES[best].to_string(),
        confidence: round2(probabilities[best] * 100.0),
        all_probabilities,
    })
}

/// Classifier returning a fixed probability vector, for development and tests.
#[derive(Debug, Clone)]
pub struct MockPlantClassifier {
    pub probabilities: Vec<f64>,
}

impl MockPlantClassifier {
    /// A classifier that is certain about the label at `index`.
    pub fn certain(index: usize) -> Self {
        let mut probabilities = vec![0.0; CLASS_NAMES.len()];
        if let Some(p) = probabilities.get_mut(index) {
            *p = 1.0;
        }
        Self { probabilities }
    }
}

#[async_trait]
impl PlantClassifier for MockPlantClassifier {
    async fn classify(&self, image: Vec<u8>) -> Result<Vec<f64>, ClassifierError> {
        if image.is_empty() {
            return Err(ClassifierError::Inference("empty image".into()));
        }
        Ok(self.probabilities.clone())
    }
}
