//! Job repository

use crate::domain::entities::{Job, JobFields};
use jobboard_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

const JOB_COLUMNS: &str = "id, title, description, location, salary_min, salary_max, \
                           user_id, created_at, updated_at";

/// Escape `\`, `%` and `_` so a search term matches literally under
/// `ILIKE ... ESCAPE '\'`.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build the ILIKE pattern for a search term; empty terms mean no filter.
pub fn search_pattern(search: Option<&str>) -> Option<String> {
    search
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{}%", escape_like(s)))
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find job by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// List jobs newest first, optionally filtered by a case-insensitive
    /// substring of title or description
    pub async fn list(&self, search: Option<&str>, limit: i64, offset: i64) -> Result<Vec<Job>> {
        // Stored text never contains NUL, and Postgres rejects it as a parameter
        if search.is_some_and(|s| s.contains('\0')) {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, Job>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE $1::text IS NULL
               OR title ILIKE $1 ESCAPE '\'
               OR description ILIKE $1 ESCAPE '\'
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(search_pattern(search))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a new job owned by `user_id`
    pub async fn create(&self, user_id: Uuid, fields: &JobFields) -> Result<Job> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (title, description, location, salary_min, salary_max, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.location)
        .bind(fields.salary_min)
        .bind(fields.salary_max)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace every field of a job owned by `user_id`.
    ///
    /// Returns `None` when no job with that id belongs to `user_id`.
    pub async fn update_owned(
        &self,
        id: Uuid,
        user_id: Uuid,
        fields: &JobFields,
    ) -> Result<Option<Job>> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs
            SET title = $3, description = $4, location = $5,
                salary_min = $6, salary_max = $7, updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(&fields.location)
        .bind(fields.salary_min)
        .bind(fields.salary_max)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete a job owned by `user_id`. Returns whether a row was removed.
    pub async fn delete_owned(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
