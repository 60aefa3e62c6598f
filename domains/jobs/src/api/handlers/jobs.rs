//! Job listing API handlers
//!
//! Implements:
//! - GET /api/jobs - List and search jobs (public)
//! - GET /api/jobs/{id} - Retrieve a job (public)
//! - POST /api/jobs - Create a job owned by the caller
//! - PUT /api/jobs/{id} - Replace a job (owner only)
//! - DELETE /api/jobs/{id} - Delete a job (owner only)

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use jobboard_auth::AuthContext;
use jobboard_common::{validation_message, Error, Pagination, Result, ValidatedJson};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::api::middleware::{AuthUser, JobsState};
use crate::domain::entities::{Job, JobFields, JobInput};

const JOB_NOT_FOUND: &str = "Job not found";
const NOT_OWNER: &str = "You do not own this job";

/// Search filter for listing jobs; paging comes from `Pagination`
#[derive(Debug, Default, Deserialize)]
pub struct JobSearchParams {
    pub search: Option<String>,
}

/// Path ids that are not UUIDs cannot name a job.
fn parse_job_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound(JOB_NOT_FOUND.to_string()))
}

fn into_fields(input: JobInput) -> Result<JobFields> {
    input
        .into_fields()
        .ok_or_else(|| Error::Validation("Invalid input".to_string()))
}

/// Load a job and require that `ctx` owns it: 404 first, then 403.
async fn find_owned_job(state: &JobsState, ctx: &AuthContext, id: Uuid) -> Result<Job> {
    let job = state
        .repos
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(JOB_NOT_FOUND.to_string()))?;

    if !ctx.owns(job.user_id) {
        tracing::warn!(job_id = %id, user_id = %ctx.user_id, "Rejected mutation by non-owner");
        return Err(Error::Authorization(NOT_OWNER.to_string()));
    }

    Ok(job)
}

/// GET /api/jobs - List jobs newest first
pub async fn list_jobs(
    State(state): State<JobsState>,
    Query(params): Query<JobSearchParams>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Job>>> {
    let jobs = state
        .repos
        .jobs
        .list(
            params.search.as_deref(),
            pagination.limit(),
            pagination.offset(),
        )
        .await?;

    Ok(Json(jobs))
}

/// GET /api/jobs/{id} - Retrieve a single job
pub async fn get_job(
    State(state): State<JobsState>,
    Path(id): Path<String>,
) -> Result<Json<Job>> {
    let id = parse_job_id(&id)?;

    let job = state
        .repos
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound(JOB_NOT_FOUND.to_string()))?;

    Ok(Json(job))
}

/// POST /api/jobs - Create a job owned by the caller
pub async fn create_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    ValidatedJson(input): ValidatedJson<JobInput>,
) -> Result<(StatusCode, Json<Job>)> {
    let fields = into_fields(input)?;

    let job = state.repos.jobs.create(ctx.user_id, &fields).await?;

    tracing::info!(job_id = %job.id, user_id = %ctx.user_id, "Job created");

    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/{id} - Replace every field of a job
///
/// The body is validated after the ownership check so that 404 and 403
/// take precedence over validation failures.
pub async fn update_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<JobInput>, JsonRejection>,
) -> Result<Json<Job>> {
    let Json(input) = payload.map_err(|e| Error::Validation(e.body_text()))?;
    let id = parse_job_id(&id)?;

    find_owned_job(&state, &ctx, id).await?;

    input
        .validate()
        .map_err(|e| Error::Validation(validation_message(&e)))?;
    let fields = into_fields(input)?;

    // The guarded update returns nothing if the job vanished or changed
    // hands since the lookup.
    let job = state
        .repos
        .jobs
        .update_owned(id, ctx.user_id, &fields)
        .await?
        .ok_or_else(|| Error::NotFound(JOB_NOT_FOUND.to_string()))?;

    tracing::info!(job_id = %id, user_id = %ctx.user_id, "Job updated");

    Ok(Json(job))
}

/// DELETE /api/jobs/{id} - Delete a job
pub async fn delete_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_job_id(&id)?;

    find_owned_job(&state, &ctx, id).await?;

    if !state.repos.jobs.delete_owned(id, ctx.user_id).await? {
        return Err(Error::NotFound(JOB_NOT_FOUND.to_string()));
    }

    tracing::info!(job_id = %id, user_id = %ctx.user_id, "Job deleted");

    Ok(StatusCode::NO_CONTENT)
}
