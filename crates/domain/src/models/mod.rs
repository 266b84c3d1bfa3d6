//! Domain models for Potia.

pub mod irrigation;
pub mod plant;
pub mod pot;
pub mod reading;
pub mod recognition;
pub mod session;
pub mod species;
pub mod user;
pub mod watering;

pub use irrigation::{IrrigationDecision, IrrigationInput};
pub use plant::Plant;
pub use pot::{DevicePlant, Pot};
pub use reading::{EnvironmentalReading, NewReading};
pub use session::{Session, SessionInfo};
pub use species::Species;
pub use user::User;
pub use watering::WateringEvent;
