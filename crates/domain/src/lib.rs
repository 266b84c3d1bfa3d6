//! Domain layer for the Potia backend.
//!
//! This crate contains:
//! - Domain models (User, Pot, Plant, EnvironmentalReading, WateringEvent)
//! - Business logic services (irrigation decision, ingest flow, session gate,
//!   recognition post-processing)

pub mod models;
pub mod services;
