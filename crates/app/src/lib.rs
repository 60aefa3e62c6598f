//! Jobboard application composition root
//!
//! Composes all domain routers into a single application.

use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use jobboard_accounts::{AccountsRepositories, AccountsState};
use jobboard_auth::{AuthBackend, AuthConfig};
use jobboard_common::Config;
use jobboard_jobs::{JobsRepositories, JobsState};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth = AuthBackend::new(AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        token_ttl_hours: config.jwt_expiry_hours,
    });

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth,
    };

    Router::new()
        .route("/api/health", get(health_check))
        .merge(jobboard_accounts::routes().with_state(accounts_state))
        .merge(jobboard_jobs::routes().with_state(jobs_state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(timeout_layer(Duration::from_secs(
                    config.request_timeout_secs,
                )))
                .into_inner(),
        )
}

/// Requests running past `timeout` are answered with 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Health check endpoint
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "Server is running" }))
}
