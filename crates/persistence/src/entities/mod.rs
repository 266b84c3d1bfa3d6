//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod plant;
pub mod pot;
pub mod reading;
pub mod species;
pub mod user;
pub mod watering;

pub use plant::{PlantEntity, PlantWithLastReadingEntity};
pub use pot::{DevicePlantEntity, PotEntity};
pub use reading::ReadingEntity;
pub use species::SpeciesEntity;
pub use user::{SessionEntity, UserEntity};
pub use watering::{WateringEntity, WateringHistoryEntity};
