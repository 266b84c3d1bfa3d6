//! Repository implementations for database operations.

pub mod plant;
pub mod pot;
pub mod reading;
pub mod session;
pub mod species;
pub mod user;
pub mod watering;

pub use plant::PlantRepository;
pub use pot::PotRepository;
pub use reading::ReadingRepository;
pub use session::SessionRepository;
pub use species::SpeciesRepository;
pub use user::UserRepository;
pub use watering::WateringRepository;
