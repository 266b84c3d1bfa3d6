//! Irrigation decision.
//!
//! The regression model is an injected dependency behind
//! [`IrrigationPredictor`]; the watering rule itself lives in
//! [`IrrigationPolicy`] and is independent of how the model is evaluated.

use thiserror::Error;

use crate::models::irrigation::{IrrigationDecision, IrrigationInput};

/// Default minimum predicted volume that triggers watering, in millilitres.
pub const DEFAULT_THRESHOLD_ML: f64 = 50.0;

/// Error type for irrigation predictions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("Irrigation model is not available")]
    ModelUnavailable,

    #[error("Irrigation inference failed: {0}")]
    Inference(String),
}

/// A loaded irrigation model.
///
/// Implementations are immutable after construction and shared across
/// requests, so `predict` must be a pure function of its input.
pub trait IrrigationPredictor: Send + Sync {
    /// Predicted watering volume in millilitres.
    fn predict(&self, input: &IrrigationInput) -> Result<f64, PredictionError>;

    /// Whether a model artifact is actually loaded.
    fn is_loaded(&self) -> bool {
        true
    }
}

/// Predictor used when no model artifact could be loaded.
///
/// Every prediction fails with [`PredictionError::ModelUnavailable`].
#[derive(Debug, Clone, Default)]
pub struct UnloadedModel {
    pub reason: String,
}

impl UnloadedModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl IrrigationPredictor for UnloadedModel {
    fn predict(&self, _input: &IrrigationInput) -> Result<f64, PredictionError> {
        Err(PredictionError::ModelUnavailable)
    }

    fn is_loaded(&self) -> bool {
        false
    }
}

/// Rule turning a predicted volume into a watering decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrigationPolicy {
    /// Minimum predicted volume (inclusive) that triggers watering.
    pub threshold_ml: f64,
    /// Report negative predictions as zero.
    pub clamp_negative: bool,
}

impl Default for IrrigationPolicy {
    fn default() -> Self {
        Self {
            threshold_ml: DEFAULT_THRESHOLD_ML,
            clamp_negative: false,
        }
    }
}

impl IrrigationPolicy {
    pub fn new(threshold_ml: f64, clamp_negative: bool) -> Self {
        Self {
            threshold_ml,
            clamp_negative,
        }
    }

    /// Applies the watering rule to a raw model output.
    pub fn apply(&self, raw_ml: f64) -> IrrigationDecision {
        let predicted = if self.clamp_negative {
            raw_ml.max(0.0)
        } else {
            raw_ml
        };
        let needs_watering = predicted >= self.threshold_ml;

        IrrigationDecision {
            needs_watering,
            water_amount_ml: if needs_watering {
                round2(predicted)
            } else {
                0.0
            },
            predicted_ml: Some(predicted),
        }
    }

    /// Runs the model and applies the watering rule.
    pub fn decide(
        &self,
        predictor: &dyn IrrigationPredictor,
        input: &IrrigationInput,
    ) -> Result<IrrigationDecision, PredictionError> {
        let raw = predictor.predict(input)?;
        if !raw.is_finite() {
            return Err(PredictionError::Inference(format!(
                "model returned a non-finite value ({raw})"
            )));
        }
        Ok(self.apply(raw))
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
