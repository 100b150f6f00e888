use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};
use tracing::info;

use crate::api::AppState;
use crate::api::error::ApiError;
use crate::api::validation::{require_non_empty, validate_password, validate_username};

const SESSION_USER_KEY: &str = "user";

/// What the session remembers about a logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i32,
    pub username: String,
    pub is_admin: bool,
}

/// Inserted as a request extension by [`require_admin`], so admin handlers
/// can see who is acting without touching the session again.
#[derive(Debug, Clone)]
pub struct AuthorizedContext {
    pub user_id: i32,
    pub username: String,
}

/// Route-layer guard for the admin surface. Anything short of an active
/// admin session gets a 403; there is no separate 401 for this surface.
pub async fn require_admin(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user: Option<SessionUser> = session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?;

    match user {
        Some(user) if user.is_admin => {
            request.extensions_mut().insert(AuthorizedContext {
                user_id: user.user_id,
                username: user.username,
            });
            Ok(next.run(request).await)
        }
        _ => Err(ApiError::Forbidden("Admin access required".to_string())),
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i32,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    validate_username(&payload.username)?;
    validate_password(&payload.password)?;

    let user_id = state
        .store()
        .create_user(payload.username.trim(), &payload.password)
        .await
        .map_err(|err| ApiError::from_store(err, "Username already exists"))?;

    info!(user_id, "Registered new user");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub username: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    require_non_empty(&payload.username, "Username")?;
    require_non_empty(&payload.password, "Password")?;

    let user = state
        .store()
        .verify_user_credentials(&payload.username, &payload.password)
        .await
        .map_err(|err| ApiError::DatabaseError(err.to_string()))?
        .ok_or_else(|| ApiError::Unauthorized("Invalid credentials".to_string()))?;

    session
        .insert(
            SESSION_USER_KEY,
            SessionUser {
                user_id: user.id,
                username: user.username.clone(),
                is_admin: user.is_admin,
            },
        )
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?;

    // The lifetime is absolute, fixed at login; activity never extends it.
    let ttl = Duration::hours(state.config().session.ttl_hours);
    session.set_expiry(Some(Expiry::AtDateTime(OffsetDateTime::now_utc() + ttl)));

    // Force the record out so the session id is final before we report it.
    session
        .save()
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?;

    let token = session
        .id()
        .ok_or_else(|| ApiError::internal("Session id missing after save"))?
        .to_string();

    info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token,
        username: user.username,
        is_admin: user.is_admin,
    }))
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

pub async fn logout(session: Session) -> Result<Json<LogoutResponse>, ApiError> {
    session
        .flush()
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "isAdmin", skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Report whether the caller holds a live session. Never fails; an absent
/// or expired session is simply `authenticated: false`.
pub async fn auth_status(session: Session) -> Result<Json<AuthStatusResponse>, ApiError> {
    let user: Option<SessionUser> = session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?;

    let response = match user {
        Some(user) => AuthStatusResponse {
            authenticated: true,
            username: Some(user.username),
            is_admin: Some(user.is_admin),
        },
        None => AuthStatusResponse {
            authenticated: false,
            username: None,
            is_admin: None,
        },
    };

    Ok(Json(response))
}
