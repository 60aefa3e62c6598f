//! Authentication for the Jobboard API
//!
//! Provides bearer token issuing and validation, and axum extractors
//! that work with any domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use config::{AuthConfig, DEFAULT_TOKEN_TTL_HOURS};
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
