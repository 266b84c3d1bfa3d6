//! Watering event domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A watering event, attached to the reading that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WateringEvent {
    pub id: i64,
    pub ambiental_conditions_id: i64,
    pub amount_ml: f64,
    pub watered_at: DateTime<Utc>,
}

/// Watering history row: the event plus the conditions it was recorded with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WateringHistoryEntry {
    pub id: i64,
    pub watered_at: DateTime<Utc>,
    pub amount_ml: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub moisture_percent: f64,
    pub light_lux: f64,
}

/// Request payload for a manual watering.
#[derive(Debug, Clone, Deserialize)]
pub struct ManualWateringRequest {
    pub condition_id: i64,
    pub amount_ml: f64,
}

impl ManualWateringRequest {
    /// The amount must be a positive, finite number of millilitres.
    pub fn validate_amount(&self) -> Result<(), &'static str> {
        if self.amount_ml.is_finite() && self.amount_ml > 0.0 {
            Ok(())
        } else {
            Err("amount_ml must be greater than 0")
        }
    }
}
