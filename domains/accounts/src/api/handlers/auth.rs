//! Registration and login API handlers
//!
//! Implements:
//! - POST /api/auth/register - Create an account
//! - POST /api/auth/login - Exchange credentials for a bearer token

use std::sync::OnceLock;

use axum::{extract::State, http::StatusCode, Json};
use jobboard_common::validation::not_blank;
use jobboard_common::{hash_password, verify_password, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::handlers::users::UserResponse;
use crate::api::middleware::AccountsState;
use crate::normalize_email;

const REGISTRATION_FAILED: &str = "Registration failed";
const LOGIN_FAILED: &str = "Login failed";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Request for registering a new account
///
/// Missing fields default to empty so they are reported as rule violations.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
}

/// Request for logging in
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password required"))]
    pub password: String,
}

/// Successful login payload
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Hash verified against when the email is unknown, so both failure paths
/// spend the same time in the hasher.
fn dummy_password_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash_password("jobboard-timing-equalizer").ok())
        .as_deref()
}

async fn hash_password_blocking(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| Error::Unexpected(e.into()))?
}

/// Verify on the blocking pool. With no stored hash the dummy hash is
/// checked instead and the result is always `false`.
async fn verify_password_blocking(password: String, stored_hash: Option<String>) -> Result<bool> {
    tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            if let Some(dummy) = dummy_password_hash() {
                let _ = verify_password(&password, dummy);
            }
            false
        }
    })
    .await
    .map_err(|e| Error::Unexpected(e.into()))
}

/// POST /api/auth/register - Create an account
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let email = normalize_email(&request.email);

    let password_hash = hash_password_blocking(request.password)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password during registration");
            Error::Internal(REGISTRATION_FAILED.to_string())
        })?;

    let user = state
        .repos
        .users
        .create(&email, &password_hash, request.name.trim())
        .await
        .map_err(|e| match e {
            Error::Conflict(_) => {
                tracing::info!(email = %email, "Registration rejected: email already taken");
                Error::Conflict("Email already taken".to_string())
            }
            other => {
                tracing::error!(error = %other, "Failed to register user");
                Error::Internal(REGISTRATION_FAILED.to_string())
            }
        })?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/auth/login - Exchange credentials for a bearer token
///
/// Unknown email and wrong password produce the same 401 response.
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = normalize_email(&request.email);

    let user = state
        .repos
        .users
        .find_by_email(&email)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to look up user for login");
            Error::Internal(LOGIN_FAILED.to_string())
        })?;

    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let password_matches = verify_password_blocking(request.password, stored_hash)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            Error::Internal(LOGIN_FAILED.to_string())
        })?;

    let user = match user {
        Some(user) if password_matches => user,
        _ => {
            tracing::debug!("Login rejected: invalid credentials");
            return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
        }
    };

    let token = state.auth.issue_token(user.id, &user.email).map_err(|e| {
        tracing::error!(error = ?e, user_id = %user.id, "Failed to issue token");
        Error::Internal(LOGIN_FAILED.to_string())
    })?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(user),
    }))
}
