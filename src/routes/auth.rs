use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::auth::{password, roles};
use crate::db;
use crate::error::{is_unique_violation, AppError};
use crate::extract::JsonBody;
use crate::models::{ProfileExtras, User};
use crate::state::SharedState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    /// Any JSON value; only non-empty strings are kept as the role.
    pub role: Option<Value>,
    #[serde(flatten)]
    pub profile: ProfileExtras,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

pub async fn register(
    State(state): State<SharedState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    if req.email.is_empty() || req.password.is_empty() || req.name.is_empty() {
        return Err(AppError::BadRequest(
            "Email, password and name are required".to_string(),
        ));
    }

    if db::users::find_by_email(&state.pool, &req.email)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Email is already registered".to_string()));
    }

    let role = roles::for_registration(req.role.as_ref());
    let pw_hash = password::hash_blocking(req.password)
        .await
        .map_err(AppError::Internal)?;

    let user = db::users::create(
        &state.pool,
        db::users::NewUser {
            id: Uuid::now_v7(),
            email: &req.email,
            password_hash: &pw_hash,
            name: &req.name,
            role: &role,
            profile: &req.profile,
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict("Email is already registered".to_string())
        } else {
            AppError::Database(e)
        }
    })?;

    let token = state
        .tokens
        .issue(user.id, &user.email, &user.role)
        .map_err(AppError::Internal)?;

    tracing::info!(user_id = %user.id, role = %user.role, "user registered");

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

pub async fn login(
    State(state): State<SharedState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    // Unknown email and wrong password must be indistinguishable to the client.
    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if user.password_hash.is_empty() {
        tracing::warn!(user_id = %user.id, "user has no stored password hash");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let valid = password::verify_blocking(req.password, user.password_hash.clone())
        .await
        .map_err(AppError::Internal)?;

    if !valid {
        tracing::debug!(user_id = %user.id, "login rejected: wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = state
        .tokens
        .issue(user.id, &user.email, &user.role)
        .map_err(AppError::Internal)?;

    tracing::info!(user_id = %user.id, "user logged in");

    Ok(Json(AuthResponse { token, user }))
}

/// Current profile, re-read from the store rather than taken from the token.
pub async fn me(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<User>, AppError> {
    let user = db::users::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}
