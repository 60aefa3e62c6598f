//! Job domain entities for Jobboard
//!
//! `Job` is the stored listing; `JobInput` is the request schema shared by
//! create and full-replacement update.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use jobboard_common::validation::not_blank;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Job listing entity
///
/// Salaries serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_min: Decimal,
    pub salary_max: Decimal,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or replacing a job
///
/// Missing text fields default to empty so they are reported as rule
/// violations; the salary range rule runs even when field rules fail.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_salary_range", skip_on_field_errors = false))]
pub struct JobInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Location is required"))]
    pub location: String,

    #[validate(
        required(message = "Minimum salary is required"),
        custom(function = "non_negative", message = "Minimum salary must be 0 or greater")
    )]
    pub salary_min: Option<Decimal>,

    #[validate(
        required(message = "Maximum salary is required"),
        custom(function = "non_negative", message = "Maximum salary must be 0 or greater")
    )]
    pub salary_max: Option<Decimal>,
}

/// Field values of a validated `JobInput`, trimmed and ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct JobFields {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary_min: Decimal,
    pub salary_max: Decimal,
}

impl JobInput {
    /// Convert into persistable fields.
    ///
    /// Returns `None` when a salary is missing; callers validate first.
    pub fn into_fields(self) -> Option<JobFields> {
        Some(JobFields {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            salary_min: self.salary_min?,
            salary_max: self.salary_max?,
        })
    }
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative"));
    }
    Ok(())
}

fn validate_salary_range(input: &JobInput) -> Result<(), ValidationError> {
    match (input.salary_min, input.salary_max) {
        (Some(min), Some(max)) if max < min => Err(ValidationError::new("salary_range")
            .with_message(Cow::Borrowed(
                "Maximum salary must be greater than or equal to minimum salary",
            ))),
        _ => Ok(()),
    }
}
