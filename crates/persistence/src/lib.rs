//! Persistence layer for the Potia backend.
//!
//! This crate contains:
//! - Database connection management and migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations, including the storage traits of the
//!   ingest flow
//! - Query metrics

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
