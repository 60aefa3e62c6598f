//! Bearer token claims

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by every issued bearer token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user ID
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    /// Email the user authenticated with
    pub email: String,
    /// Issued at (seconds since epoch)
    pub iat: u64,
    /// Expires at (seconds since epoch)
    pub exp: u64,
}
