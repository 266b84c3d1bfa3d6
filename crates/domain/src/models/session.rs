//! Login session domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-side login session.
///
/// Only the SHA-256 digest of the opaque session token is kept; the raw
/// token is handed to the client once, at login.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A live session as shown to its owner. The token itself is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// True for the session that made the request.
    pub current: bool,
}

impl SessionInfo {
    pub fn new(session: &Session, current_session_id: Option<i64>) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
            expires_at: session.expires_at,
            current: current_session_id == Some(session.id),
        }
    }
}

/// Response body listing a user's live sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionInfo>,
}
