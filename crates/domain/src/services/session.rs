//! Session gate for user-facing routes.
//!
//! A request passes only with a valid bearer token *and* a live server-side
//! session for the same user. This module holds the session half of that
//! check as a pure function so the expiry rule can be tested without a
//! database or a clock.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::models::session::Session;

/// Fixed session lifetime. Sessions are not extended on use.
pub const SESSION_LIFETIME_SECS: i64 = 2 * 60 * 60;

/// Session lifetime as a duration.
pub fn session_lifetime() -> Duration {
    Duration::seconds(SESSION_LIFETIME_SECS)
}

/// Expiry for a session created at `now`.
pub fn session_expiry(now: DateTime<Utc>) -> DateTime<Utc> {
    now + session_lifetime()
}

/// Why a request was turned away by the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthRejection {
    #[error("Invalid or expired token")]
    TokenInvalid,

    #[error("Session token is missing")]
    SessionTokenMissing,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Session has expired")]
    SessionExpired,
}

impl AuthRejection {
    /// Machine-readable reason code returned to clients.
    pub fn code(&self) -> &'static str {
        match self {
            AuthRejection::TokenInvalid => "token_invalid",
            AuthRejection::SessionTokenMissing => "session_token_missing",
            AuthRejection::SessionNotFound => "session_not_found",
            AuthRejection::SessionExpired => "session_expired",
        }
    }
}

/// Checks a looked-up session for `user_id` at time `now`.
///
/// `session` is the row matching `(user_id, token hash)`, if any. A session
/// is live while `now < expires_at`.
pub fn check_session(
    session: Option<&Session>,
    user_id: i64,
    now: DateTime<Utc>,
) -> Result<(), AuthRejection> {
    let session = session.ok_or(AuthRejection::SessionNotFound)?;

    if session.user_id != user_id {
        return Err(AuthRejection::SessionNotFound);
    }
    if now >= session.expires_at {
        return Err(AuthRejection::SessionExpired);
    }

    Ok(())
}
