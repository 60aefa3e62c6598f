//! Token issuing, validation and header extraction helpers

use axum::http::HeaderValue;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign a token for `user_id` that expires after the configured lifetime
pub(crate) fn issue_jwt_token(
    user_id: Uuid,
    email: &str,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let expires = now + Duration::hours(config.token_ttl_hours);

    let claims = Claims {
        user_id,
        email: email.to_string(),
        iat: now.timestamp() as u64,
        exp: expires.timestamp() as u64,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to sign token");
        AuthError::TokenIssueFailed
    })
}

/// Validate signature and expiry of a token signed with the shared secret
pub(crate) fn validate_jwt_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    if header_str.trim() == "Bearer" {
        return Err(AuthError::MissingAuthorization);
    }

    match header_str.strip_prefix("Bearer ") {
        Some(token) if token.trim().is_empty() => Err(AuthError::MissingAuthorization),
        Some(token) => Ok(token.trim().to_string()),
        None => Err(AuthError::InvalidToken),
    }
}
