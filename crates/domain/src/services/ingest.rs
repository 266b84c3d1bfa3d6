//! Sensor ingest flow.
//!
//! Resolves the device label to a plant, appends the reading, then asks the
//! irrigation model for a decision. Only the lookup and the reading write can
//! fail the request; the decision degrades to "no watering" when the model is
//! unavailable or the plant has no species.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::irrigation::{IrrigationDecision, IrrigationInput};
use crate::models::pot::DevicePlant;
use crate::models::reading::{IrrigationSummary, NewReading, SensorDataResponse};
use crate::models::species::UNKNOWN_SPECIES;
use crate::services::irrigation::{IrrigationPolicy, IrrigationPredictor};

/// Error raised by a storage backend.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Resolves device labels to the plant they monitor.
#[async_trait]
pub trait PlantRegistry: Send + Sync {
    /// Finds the plant whose pot carries `label`.
    ///
    /// When several users share a label the lowest plant id wins.
    async fn find_plant_by_device_label(
        &self,
        label: &str,
    ) -> Result<Option<DevicePlant>, StoreError>;
}

/// Append-only store for readings and watering events.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// Appends a reading and returns its id.
    async fn record_reading(&self, plant_id: i64, reading: &NewReading)
        -> Result<i64, StoreError>;

    /// Records a watering event against a reading and returns its id.
    async fn record_watering(&self, reading_id: i64, amount_ml: f64) -> Result<i64, StoreError>;
}

/// Error type for the ingest flow.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Pot with label '{0}' not found or no plant assigned")]
    DeviceNotFound(String),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Result of an accepted reading.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestOutcome {
    pub condition_id: i64,
    pub plant_id: i64,
    pub species_name: String,
    pub decision: IrrigationDecision,
    pub watering_log_id: Option<i64>,
}

impl From<IngestOutcome> for SensorDataResponse {
    fn from(outcome: IngestOutcome) -> Self {
        Self {
            status: "success".to_string(),
            message: "Sensor data recorded".to_string(),
            condition_id: outcome.condition_id,
            plant_id: outcome.plant_id,
            irrigation: IrrigationSummary {
                needs_watering: outcome.decision.needs_watering,
                water_amount_ml: outcome.decision.water_amount_ml,
                species_name: outcome.species_name,
                predicted_ml: outcome.decision.predicted_ml,
                watering_log_id: outcome.watering_log_id,
            },
        }
    }
}

/// Orchestrates one sensor submission.
pub struct IngestService<'a> {
    registry: &'a dyn PlantRegistry,
    store: &'a dyn ReadingStore,
    predictor: &'a dyn IrrigationPredictor,
    policy: IrrigationPolicy,
}

impl<'a> IngestService<'a> {
    pub fn new(
        registry: &'a dyn PlantRegistry,
        store: &'a dyn ReadingStore,
        predictor: &'a dyn IrrigationPredictor,
        policy: IrrigationPolicy,
    ) -> Self {
        Self {
            registry,
            store,
            predictor,
            policy,
        }
    }

    /// Records a reading for the device `label` and decides on watering.
    pub async fn ingest(
        &self,
        label: &str,
        reading: NewReading,
    ) -> Result<IngestOutcome, IngestError> {
        let plant = self
            .registry
            .find_plant_by_device_label(label)
            .await?
            .ok_or_else(|| IngestError::DeviceNotFound(label.to_string()))?;

        let condition_id = self.store.record_reading(plant.plant_id, &reading).await?;

        let decision = self.decide(&plant, &reading);

        let mut watering_log_id = None;
        if decision.needs_watering {
            match self
                .store
                .record_watering(condition_id, decision.water_amount_ml)
                .await
            {
                Ok(id) => watering_log_id = Some(id),
                Err(e) => tracing::warn!(
                    plant_id = plant.plant_id,
                    condition_id,
                    error = %e,
                    "Failed to record watering event"
                ),
            }
        }

        Ok(IngestOutcome {
            condition_id,
            plant_id: plant.plant_id,
            species_name: plant
                .species_name
                .unwrap_or_else(|| UNKNOWN_SPECIES.to_string()),
            decision,
            watering_log_id,
        })
    }

    fn decide(&self, plant: &DevicePlant, reading: &NewReading) -> IrrigationDecision {
        let Some(species_id) = plant.species_id else {
            tracing::debug!(plant_id = plant.plant_id, "Plant has no species, skipping prediction");
            return IrrigationDecision::skipped();
        };

        let input = IrrigationInput {
            species_id,
            moisture: reading.moisture,
            temperature: reading.temperature,
        };

        match self.policy.decide(self.predictor, &input) {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!(
                    plant_id = plant.plant_id,
                    species_id,
                    error = %e,
                    "Irrigation prediction failed"
                );
                IrrigationDecision::skipped()
            }
        }
    }
}
