//! Plant image recognition models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Classification result for an uploaded plant image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResponse {
    pub plant_type: String,
    /// Top-class probability as a percentage, two decimals.
    pub confidence: f64,
    /// Per-label percentages, two decimals.
    pub all_probabilities: BTreeMap<String, f64>,
}
