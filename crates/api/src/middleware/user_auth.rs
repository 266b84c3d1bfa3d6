//! Authentication gates for user-facing routes.
//!
//! [`require_session`] enforces both factors: a valid bearer JWT *and* a live
//! server-side session identified by `X-Session-Token`. [`require_bearer`]
//! checks the JWT only and guards the routes a user needs to end a session.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use domain::models::Session;
use domain::services::{check_session, AuthRejection};
use persistence::repositories::SessionRepository;
use shared::crypto::sha256_hex;
use shared::jwt::{extract_user_id, JwtConfig};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::trace_id::get_request_id;

/// Header carrying the opaque session token issued at login.
pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

/// Authenticated user, stored in request extensions by the gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
    /// Session that passed [`require_session`]; `None` behind [`require_bearer`].
    pub session_id: Option<i64>,
}

impl CurrentUser {
    pub fn bearer(user_id: i64) -> Self {
        Self {
            user_id,
            session_id: None,
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Decodes the bearer token into the user it was issued to.
pub fn authenticate_bearer(jwt: &JwtConfig, headers: &HeaderMap) -> Result<i64, AuthRejection> {
    let token = bearer_token(headers).ok_or(AuthRejection::TokenInvalid)?;
    let claims = jwt.validate_token(token).map_err(|e| {
        tracing::debug!("JWT validation failed: {}", e);
        AuthRejection::TokenInvalid
    })?;
    extract_user_id(&claims).map_err(|_| AuthRejection::TokenInvalid)
}

async fn authenticate_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<CurrentUser, ApiError> {
    let user_id = authenticate_bearer(&state.jwt, headers)?;
    let token = session_token(headers).ok_or(AuthRejection::SessionTokenMissing)?;

    let session: Option<Session> = SessionRepository::new(state.pool.clone())
        .find(user_id, &sha256_hex(token))
        .await?
        .map(Into::into);

    check_session(session.as_ref(), user_id, Utc::now())?;
    Ok(CurrentUser {
        user_id,
        session_id: session.map(|s| s.id),
    })
}

fn rejected(req: &Request<Body>, error: ApiError) -> Response {
    if let ApiError::SessionRejected(reason) = &error {
        tracing::info!(
            request_id = %get_request_id(req.extensions()),
            reason = reason.code(),
            "Request rejected by authentication gate"
        );
    }
    error.into_response()
}

/// Middleware that requires a bearer JWT and a live session.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate_session(&state, req.headers()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(e) => rejected(&req, e),
    }
}

/// Middleware that requires a bearer JWT only.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate_bearer(&state.jwt, req.headers()) {
        Ok(user_id) => {
            req.extensions_mut().insert(CurrentUser::bearer(user_id));
            next.run(req).await
        }
        Err(reason) => rejected(&req, reason.into()),
    }
}
