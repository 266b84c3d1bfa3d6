//! Irrigation prediction domain models.

use serde::{Deserialize, Serialize};

/// Model input: species, soil moisture and air temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrigationInput {
    pub species_id: i64,
    pub moisture: f64,
    pub temperature: f64,
}

impl IrrigationInput {
    /// Feature vector in the order the regressor was trained on.
    pub fn features(&self) -> [f64; 3] {
        [self.species_id as f64, self.moisture, self.temperature]
    }
}

/// Outcome of the irrigation decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrigationDecision {
    pub needs_watering: bool,
    pub water_amount_ml: f64,
    /// Model output after policy adjustments; `None` when no prediction ran.
    pub predicted_ml: Option<f64>,
}

impl IrrigationDecision {
    /// Decision used when the model cannot be consulted.
    pub fn skipped() -> Self {
        Self {
            needs_watering: false,
            water_amount_ml: 0.0,
            predicted_ml: None,
        }
    }
}

/// Request payload for a standalone irrigation prediction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictIrrigationRequest {
    #[serde(default)]
    pub species_id: Option<i64>,
    #[serde(default)]
    pub moisture: Option<f64>,
    #[serde(default)]
    pub temperature: Option<f64>,
}

impl PredictIrrigationRequest {
    /// Converts to a model input or returns the missing field names.
    pub fn into_input(self) -> Result<IrrigationInput, Vec<&'static str>> {
        match (self.species_id, self.moisture, self.temperature) {
            (Some(species_id), Some(moisture), Some(temperature)) => Ok(IrrigationInput {
                species_id,
                moisture,
                temperature,
            }),
            (species_id, moisture, temperature) => {
                let mut missing = Vec::new();
                if species_id.is_none() {
                    missing.push("species_id");
                }
                if moisture.is_none() {
                    missing.push("moisture");
                }
                if temperature.is_none() {
                    missing.push("temperature");
                }
                Err(missing)
            }
        }
    }
}
