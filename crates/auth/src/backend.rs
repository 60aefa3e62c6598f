//! Concrete authentication backend
//!
//! Wraps `AuthConfig` and owns token issuing and verification. Verification
//! is stateless: a valid signature and unexpired `exp` are sufficient, no
//! database round-trip is made.

use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Issue a signed bearer token embedding `{userId, email}`
    pub fn issue_token(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        crate::jwt::issue_jwt_token(user_id, email, &self.config)
    }

    /// Verify a bearer token and decode the identity it carries
    pub fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_jwt_token(token, &self.config)?;
        Ok(AuthContext::from(claims))
    }
}
