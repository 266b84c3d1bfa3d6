//! Application services wiring the domain to infrastructure.

pub mod auth;
pub mod classifier;
pub mod media;
pub mod model;

pub use auth::{AuthError, AuthService};
pub use classifier::{build_classifier, RemoteClassifier};
pub use model::load_predictor;
