//! User account and authentication domain models.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    /// Usernames: letters, digits, dot, dash and underscore.
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap();
}

/// Represents a user account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Request payload for account registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(
        min = 3,
        max = 50,
        message = "Username must be between 3 and 50 characters"
    ))]
    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "Username may only contain letters, digits, '.', '-' and '_'"
    ))]
    pub username: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(
        min = 6,
        max = 128,
        message = "Password must be between 6 and 128 characters"
    ))]
    pub password: String,
}

/// Request payload for login.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// Response payload for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub session_token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: i64,
    pub username: String,
    pub email: String,
}

/// Request payload for logout.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LogoutRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "session_token is required"))]
    pub session_token: String,
}

/// Request payload for a password change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Current password and new password are required"))]
    pub current_password: String,

    #[serde(default)]
    #[validate(length(
        min = 8,
        max = 128,
        message = "New password must be between 8 and 128 characters"
    ))]
    pub new_password: String,
}

/// Profile of the authenticated user.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user: User,
}

/// Acknowledgement of a logout from every device.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutAllResponse {
    pub msg: String,
    pub revoked: u64,
}

/// Generic `{msg}` acknowledgement used by the auth routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Response for the bearer-only identity check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectedResponse {
    pub logged_in_as: i64,
}
