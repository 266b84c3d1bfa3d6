//! Authentication routes: registration, login, logout and session management.

use axum::{extract::State, http::StatusCode, Json};
use domain::models::session::SessionListResponse;
use domain::models::user::{
    ChangePasswordRequest, LoginRequest, LoginResponse, LogoutAllResponse, LogoutRequest,
    MeResponse, MessageResponse, ProtectedResponse, RegisterRequest,
};
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{JsonBody, PathParam};
use crate::middleware::CurrentUser;
use crate::services::AuthService;

/// Register a new user.
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    request.validate()?;

    AuthService::new(state.pool.clone(), state.jwt.clone())
        .register(request.username.trim(), request.email.trim(), &request.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Log in with username and password.
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request.validate()?;

    let response = AuthService::new(state.pool.clone(), state.jwt.clone())
        .login(request.username.trim(), &request.password)
        .await?;

    Ok(Json(response))
}

/// End a session. Requires a valid bearer token only.
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
    JsonBody(request): JsonBody<LogoutRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    AuthService::new(state.pool.clone(), state.jwt.clone())
        .logout(user.user_id, request.session_token.trim())
        .await?;

    Ok(Json(MessageResponse::new("Logged out")))
}

/// End every session of the caller. Requires a valid bearer token only.
///
/// POST /auth/logout-all
pub async fn logout_all(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<LogoutAllResponse>, ApiError> {
    let revoked = AuthService::new(state.pool.clone(), state.jwt.clone())
        .logout_all(user.user_id)
        .await?;

    Ok(Json(LogoutAllResponse {
        msg: "All sessions logged out successfully".to_string(),
        revoked,
    }))
}

/// Profile of the caller.
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<MeResponse>, ApiError> {
    let user = AuthService::new(state.pool.clone(), state.jwt.clone())
        .current_user(user.user_id)
        .await?;

    Ok(Json(MeResponse { user }))
}

/// Live sessions of the caller, newest first.
///
/// GET /auth/sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<SessionListResponse>, ApiError> {
    let sessions = AuthService::new(state.pool.clone(), state.jwt.clone())
        .sessions(user.user_id, user.session_id)
        .await?;

    Ok(Json(SessionListResponse { sessions }))
}

/// Revoke one of the caller's sessions by its token.
///
/// DELETE /auth/sessions/:session_token
pub async fn revoke_session(
    State(state): State<AppState>,
    user: CurrentUser,
    PathParam(session_token): PathParam<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    AuthService::new(state.pool.clone(), state.jwt.clone())
        .revoke_session(user.user_id, session_token.trim())
        .await?;

    Ok(Json(MessageResponse::new("Session revoked successfully")))
}

/// Change the caller's password. All sessions end, the caller's included.
///
/// PUT /auth/change-password
pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    JsonBody(request): JsonBody<ChangePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    request.validate()?;

    AuthService::new(state.pool.clone(), state.jwt.clone())
        .change_password(user.user_id, &request.current_password, &request.new_password)
        .await?;

    Ok(Json(MessageResponse::new(
        "Password changed successfully. Please login again.",
    )))
}

/// Echoes the user a bearer token was issued to.
///
/// GET /auth/protected
pub async fn protected(user: CurrentUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        logged_in_as: user.user_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_protected_echoes_user() {
        let Json(body) = protected(CurrentUser::bearer(12)).await;
        assert_eq!(body.logged_in_as, 12);
    }
}
