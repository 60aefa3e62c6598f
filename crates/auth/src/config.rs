//! Authentication configuration

/// Default bearer token lifetime
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 12;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

impl AuthConfig {
    /// Config with the default 12 hour token lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}
