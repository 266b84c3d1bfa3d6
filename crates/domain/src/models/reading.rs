//! Environmental reading domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored sensor reading for a plant. Rows are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    pub id: i64,
    pub plant_id: i64,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub moisture_percent: f64,
    pub light_lux: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Sensor values for a reading about to be stored.
///
/// Values are kept exactly as reported; out-of-range values are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewReading {
    pub temperature: f64,
    pub humidity: f64,
    pub moisture: f64,
    pub light: f64,
}

/// Sensor payload posted by a device.
///
/// Every field is optional at the wire level so that absent fields can be
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorDataRequest {
    #[serde(default, alias = "deviceLabel")]
    pub pot_label: Option<String>,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub moisture: Option<f64>,
    #[serde(default)]
    pub light: Option<f64>,
}

impl SensorDataRequest {
    /// Names of required fields that are absent.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.pot_label.is_none() {
            missing.push("pot_label");
        }
        if self.temperature.is_none() {
            missing.push("temperature");
        }
        if self.humidity.is_none() {
            missing.push("humidity");
        }
        if self.moisture.is_none() {
            missing.push("moisture");
        }
        if self.light.is_none() {
            missing.push("light");
        }
        missing
    }

    /// Splits the payload into the device label and the reading values.
    ///
    /// Returns the missing field names when the payload is incomplete.
    pub fn into_parts(self) -> Result<(String, NewReading), Vec<&'static str>> {
        match (
            self.pot_label,
            self.temperature,
            self.humidity,
            self.moisture,
            self.light,
        ) {
            (Some(label), Some(temperature), Some(humidity), Some(moisture), Some(light)) => Ok((
                label,
                NewReading {
                    temperature,
                    humidity,
                    moisture,
                    light,
                },
            )),
            (label, temperature, humidity, moisture, light) => Err(SensorDataRequest {
                pot_label: label,
                temperature,
                humidity,
                moisture,
                light,
            }
            .missing_fields()),
        }
    }
}

/// Irrigation block of the ingest response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationSummary {
    pub needs_watering: bool,
    pub water_amount_ml: f64,
    pub species_name: String,
    pub predicted_ml: Option<f64>,
    pub watering_log_id: Option<i64>,
}

/// Response for an accepted sensor reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorDataResponse {
    pub status: String,
    pub message: String,
    pub condition_id: i64,
    pub plant_id: i64,
    pub irrigation: IrrigationSummary,
}

/// Latest known conditions of a plant; all fields are null without readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastConditions {
    pub temperature_celsius: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub moisture_percent: Option<f64>,
    pub light_lux: Option<f64>,
    pub recorded_at: Option<DateTime<Utc>>,
}

impl From<Option<EnvironmentalReading>> for LastConditions {
    fn from(reading: Option<EnvironmentalReading>) -> Self {
        match reading {
            Some(r) => Self {
                temperature_celsius: Some(r.temperature_celsius),
                humidity_percent: Some(r.humidity_percent),
                moisture_percent: Some(r.moisture_percent),
                light_lux: Some(r.light_lux),
                recorded_at: Some(r.recorded_at),
            },
            None => Self::default(),
        }
    }
}

/// Query parameters for listing recent readings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingsQuery {
    pub limit: Option<i64>,
}

/// Default number of readings returned by the readings listing.
pub const DEFAULT_READINGS_LIMIT: i64 = 100;

/// Upper bound on the readings listing.
pub const MAX_READINGS_LIMIT: i64 = 500;

impl ReadingsQuery {
    /// Effective limit, clamped into `1..=MAX_READINGS_LIMIT`.
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_READINGS_LIMIT)
            .clamp(1, MAX_READINGS_LIMIT)
    }
}
