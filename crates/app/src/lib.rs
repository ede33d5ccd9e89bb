//! JobStack application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use jobstack_accounts::{AccountsRepositories, AccountsState};
use jobstack_auth::{AuthBackend, AuthConfig};
use jobstack_common::Config;
use jobstack_jobs::{JobsRepositories, JobsState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth = AuthBackend::new(AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        expiry_seconds: config.jwt_expiry_seconds,
    });

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth,
    };

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "JobStack API is running" }),
        )
        .merge(jobstack_accounts::routes().with_state(accounts_state))
        .merge(jobstack_jobs::routes().with_state(jobs_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
