//! Pot (sensor device) domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pot carrying a sensor board, identified by its label.
///
/// Labels are unique per user, not globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pot {
    pub id: i64,
    pub user_id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

/// Result of resolving a device label to the plant it monitors.
#[derive(Debug, Clone, PartialEq)]
pub struct DevicePlant {
    pub plant_id: i64,
    pub user_id: i64,
    pub species_id: Option<i64>,
    pub species_name: Option<String>,
}
