//! Route definitions for the jobs domain API

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{admin, applications, employer, jobs};
use super::middleware::JobsState;

/// Public job search routes
fn public_routes() -> Router<JobsState> {
    Router::new()
        .route("/api/jobs", get(jobs::search_jobs))
        .route("/api/jobs/search", get(jobs::search_jobs))
}

/// Job-seeker routes
fn seeker_routes() -> Router<JobsState> {
    Router::new()
        .route("/api/jobs/apply", post(applications::apply))
        .route("/api/applications", get(applications::my_applications))
}

/// Employer routes (role-gated; ownership checked per job)
fn employer_routes() -> Router<JobsState> {
    Router::new()
        .route("/api/employer/jobs/create", post(employer::create_job))
        .route("/api/employer/jobs", get(employer::list_jobs))
        .route(
            "/api/employer/jobs/{id}",
            patch(employer::update_job).delete(employer::delete_job),
        )
        .route("/api/employer/jobs/{id}/close", patch(employer::close_job))
        .route("/api/employer/jobs/{id}/reopen", patch(employer::reopen_job))
        .route(
            "/api/employer/jobs/{id}/applications",
            get(employer::job_applications),
        )
}

/// Admin moderation routes (ownership bypassed)
fn admin_routes() -> Router<JobsState> {
    Router::new()
        .route("/api/admin/jobs", get(admin::list_jobs))
        .route("/api/admin/applications", get(admin::list_applications))
        .route("/api/admin/jobs/{id}/close", post(admin::close_job))
        .route("/api/admin/jobs/{id}/reopen", post(admin::reopen_job))
        .route("/api/admin/jobs/{id}", delete(admin::delete_job))
}

/// Create all jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .merge(public_routes())
        .merge(seeker_routes())
        .merge(employer_routes())
        .merge(admin_routes())
}
