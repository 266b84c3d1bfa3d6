//! Domain services for Potia.
//!
//! Services contain business logic that operates on domain models.

pub mod forest;
pub mod ingest;
pub mod irrigation;
pub mod recognition;
pub mod session;

pub use forest::{ForestRegressor, ModelError};
pub use ingest::{
    IngestError, IngestOutcome, IngestService, PlantRegistry, ReadingStore, StoreError,
};
pub use irrigation::{IrrigationPolicy, IrrigationPredictor, PredictionError, UnloadedModel};
pub use recognition::{ClassifierError, MockPlantClassifier, PlantClassifier, CLASS_NAMES};
pub use session::{check_session, session_expiry, AuthRejection, SESSION_LIFETIME_SECS};
