//! Authorization context for authenticated users

use uuid::Uuid;

use crate::claims::Claims;

/// Identity attached to a request after its bearer token was verified
#[derive(Debug, Clone, PartialEq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
}

impl AuthContext {
    pub fn new(user_id: Uuid, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
        }
    }

    /// Ownership is the only authorization rule: the caller owns a resource
    /// iff its owner id equals the authenticated user id.
    pub fn owns(&self, owner_id: Uuid) -> bool {
        self.user_id == owner_id
    }
}

impl From<Claims> for AuthContext {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
        }
    }
}
