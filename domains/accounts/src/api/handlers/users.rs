//! User profile API handlers
//!
//! Implements:
//! - GET /api/auth/me - Profile of the authenticated caller

use axum::{extract::State, Json};
use jobboard_common::{Error, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::{AccountsState, AuthUser};
use crate::User;

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// GET /api/auth/me - Profile of the authenticated caller
pub async fn me(
    AuthUser(auth_context): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<UserResponse>> {
    let user = state
        .repos
        .users
        .get_by_id(auth_context.user_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}
