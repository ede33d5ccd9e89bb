//! Registration and login API handlers
//!
//! Implements:
//! - POST /api/auth/register — Create a new user account
//! - POST /api/auth/login — Verify credentials and issue an identity token

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use jobstack_auth::{hash_password, issue_token, verify_password, Role};
use jobstack_common::{Error, Result, ValidatedJson};

use crate::api::middleware::AccountsState;
use crate::domain::entities::User;

fn default_role() -> Role {
    Role::JobSeeker
}

/// Request for registering a new user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,

    #[serde(default = "default_role")]
    pub role: Role,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Response for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/auth/register — Create a new user account
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let password_hash = hash_password(&req.password)
        .map_err(|_| Error::internal("Failed to hash password"))?;

    let user = User::new(req.name, req.email, password_hash, req.role)?;
    state.repos.users.create(&user).await?;

    tracing::info!(user_id = %user.id, role = %user.role, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    ))
}

/// POST /api/auth/login — Verify credentials and issue an identity token
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .repos
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| Error::not_found("User not found"))?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(Error::Authentication("Incorrect password".to_string()));
    }

    let token = issue_token(user.id, &user.name, user.role, state.auth.config())
        .map_err(|_| Error::internal("Failed to issue token"))?;

    Ok(Json(LoginResponse { token }))
}
