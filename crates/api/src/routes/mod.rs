//! HTTP route handlers.

pub mod auth;
pub mod health;
pub mod iot;
pub mod plants;
pub mod pots;
pub mod predict;
pub mod recognition;
pub mod species;
