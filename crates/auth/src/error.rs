//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobboard_common::Error;
use serde_json::json;

/// Authentication error
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    /// No Authorization header, or a `Bearer` scheme with no token
    MissingAuthorization,
    /// Bad signature, malformed or expired token, or a non-`Bearer` scheme
    InvalidToken,
    TokenIssueFailed,
}

impl AuthError {
    fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            AuthError::MissingAuthorization => (
                StatusCode::UNAUTHORIZED,
                "MISSING_AUTHORIZATION",
                "Access denied, token missing",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid or expired token",
            ),
            AuthError::TokenIssueFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_ISSUE_FAILED",
                "Failed to issue token",
            ),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        let (status, _, message) = err.parts();
        if status == StatusCode::UNAUTHORIZED {
            Error::Authentication(message.to_string())
        } else {
            Error::Internal(message.to_string())
        }
    }
}
