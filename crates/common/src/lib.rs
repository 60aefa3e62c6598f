//! Shared utilities, configuration, and error handling for Jobboard
//!
//! This crate provides common functionality used across the Jobboard application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Validated JSON and pagination extractors
//! - Password hashing
//! - Shared field validators

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;
pub mod validation;

pub use config::{Config, LogFormat};
pub use crypto::{hash_password, verify_password};
pub use db::{is_unique_violation, RepositoryError};
pub use error::{Error, Result};
pub use extractors::{validation_message, Pagination, ValidatedJson};
