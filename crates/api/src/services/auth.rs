//! Authentication service: accounts, login and session management.

use chrono::Utc;
use domain::models::user::LoginResponse;
use domain::models::{Session, SessionInfo, User};
use domain::services::session_expiry;
use persistence::repositories::{SessionRepository, UserRepository};
use shared::crypto::{generate_session_token, sha256_hex};
use shared::jwt::{JwtConfig, JwtError};
use shared::password::{burn_verification_time, hash_password, verify_password, PasswordError};
use sqlx::PgPool;
use thiserror::Error;

use crate::error::ApiError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameTaken => ApiError::Validation(err.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::UserNotFound | AuthError::SessionNotFound => {
                ApiError::NotFound(err.to_string())
            }
            AuthError::DatabaseError(e) => ApiError::from(e),
            AuthError::PasswordError(e) => ApiError::Internal(e.to_string()),
            AuthError::TokenError(e) => ApiError::Internal(e.to_string()),
        }
    }
}

/// Authentication service.
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool),
            jwt,
        }
    }

    /// Creates an account. Usernames are unique.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.users.username_exists(username).await? {
            return Err(AuthError::UsernameTaken);
        }

        let password_hash = hash_password(password)?;

        // A concurrent registration can still win between the check and the
        // insert; the unique index turns that into the same error.
        let user = self
            .users
            .create(username, email, &password_hash)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23505") => {
                    AuthError::UsernameTaken
                }
                other => AuthError::DatabaseError(other),
            })?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user.into())
    }

    /// Verifies credentials and opens a session.
    ///
    /// Returns a fresh access token and the raw session token. Only the
    /// token's hash is stored.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AuthError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            burn_verification_time(password);
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let (access_token, _jti) = self.jwt.generate_access_token(user.id)?;
        let session_token = generate_session_token();
        let expires_at = session_expiry(Utc::now());

        self.sessions
            .create(user.id, &sha256_hex(&session_token), expires_at)
            .await?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(LoginResponse {
            access_token,
            session_token,
            expires_at,
            user_id: user.id,
            username: user.username,
            email: user.email,
        })
    }

    /// Loads the account of an authenticated user.
    pub async fn current_user(&self, user_id: i64) -> Result<User, AuthError> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(Into::into)
            .ok_or(AuthError::UserNotFound)
    }

    /// Live sessions of a user, newest first, flagging `current_session_id`.
    pub async fn sessions(
        &self,
        user_id: i64,
        current_session_id: Option<i64>,
    ) -> Result<Vec<SessionInfo>, AuthError> {
        let sessions = self
            .sessions
            .list_active(user_id, Utc::now())
            .await?
            .into_iter()
            .map(|entity| SessionInfo::new(&Session::from(entity), current_session_id))
            .collect();
        Ok(sessions)
    }

    /// Revokes one of the user's sessions by its raw token.
    pub async fn revoke_session(&self, user_id: i64, session_token: &str) -> Result<(), AuthError> {
        let deleted = self
            .sessions
            .delete(user_id, &sha256_hex(session_token))
            .await?;
        if deleted == 0 {
            return Err(AuthError::SessionNotFound);
        }

        tracing::info!(user_id, "Session revoked");
        Ok(())
    }

    /// Ends every session of the user. Returns how many were removed.
    pub async fn logout_all(&self, user_id: i64) -> Result<u64, AuthError> {
        let revoked = self.sessions.delete_all(user_id).await?;
        tracing::info!(user_id, revoked, "All sessions logged out");
        Ok(revoked)
    }

    /// Replaces the password after checking the current one.
    ///
    /// Every session of the user is ended, including the caller's.
    pub async fn change_password(
        &self,
        user_id: i64,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(current_password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let password_hash = hash_password(new_password)?;
        if !self.users.update_password(user.id, &password_hash).await? {
            return Err(AuthError::UserNotFound);
        }
        let revoked = self.sessions.delete_all(user.id).await?;

        tracing::info!(user_id, revoked, "Password changed");
        Ok(())
    }

    /// Deletes the session `(user_id, token)`. Unknown tokens are ignored.
    pub async fn logout(&self, user_id: i64, session_token: &str) -> Result<bool, AuthError> {
        let deleted = self
            .sessions
            .delete(user_id, &sha256_hex(session_token))
            .await?;

        tracing::info!(user_id, deleted, "User logged out");
        Ok(deleted > 0)
    }
}
