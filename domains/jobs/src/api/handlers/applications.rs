//! Application ledger API handlers
//!
//! Implements:
//! - POST /api/jobs/apply — apply to a job (job seekers only)
//! - GET /api/applications — caller's applications, newest first

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use jobstack_auth::JobSeekerUser;
use jobstack_common::{Error, Pagination, RepositoryError, Result, ValidatedJson};

use crate::api::middleware::JobsState;
use crate::domain::entities::Application;
use crate::repository::applications::ApplicationWithJob;
use crate::repository::{
    application_exists_tx, create_application_tx, find_job_for_update_tx,
    increment_applications_tx,
};

/// Request for applying to a job
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyRequest {
    pub job_id: Uuid,
}

/// Paginated application list response
#[derive(Debug, Serialize)]
pub struct ApplicationListResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub applications: Vec<ApplicationWithJob>,
}

/// POST /api/jobs/apply — record an application.
///
/// The existence/closed/duplicate checks, the insert, and the counter
/// increment run as one transaction over a `FOR UPDATE` lock on the job
/// row; the `(user_id, job_id)` UNIQUE constraint closes the remaining
/// race window for concurrent duplicates.
pub async fn apply(
    JobSeekerUser(ctx): JobSeekerUser,
    State(state): State<JobsState>,
    ValidatedJson(req): ValidatedJson<ApplyRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let mut tx = state.repos.begin().await?;

    let job = find_job_for_update_tx(&mut tx, req.job_id)
        .await?
        .ok_or_else(|| Error::not_found("Job not found"))?;

    if job.is_closed {
        return Err(Error::conflict(
            "This job is closed and no longer accepts applications",
        ));
    }

    if application_exists_tx(&mut tx, ctx.user_id, req.job_id).await? {
        return Err(Error::conflict("You have already applied to this job"));
    }

    let application = Application::new(ctx.user_id, req.job_id);
    create_application_tx(&mut tx, &application)
        .await
        .map_err(|e| {
            // A racing duplicate insert trips the unique constraint; report
            // it the same way as the pre-check.
            if RepositoryError::is_unique_violation(&e) {
                Error::conflict("You have already applied to this job")
            } else {
                Error::Database(e)
            }
        })?;
    increment_applications_tx(&mut tx, req.job_id).await?;

    tx.commit().await?;

    tracing::info!(user_id = %ctx.user_id, job_id = %req.job_id, "Application recorded");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Application submitted successfully" })),
    ))
}

/// GET /api/applications — caller's applications, `applied_at` descending
pub async fn my_applications(
    JobSeekerUser(ctx): JobSeekerUser,
    State(state): State<JobsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<ApplicationListResponse>> {
    let (applications, total) = state
        .repos
        .applications
        .list_for_user(ctx.user_id, pagination.per_page(), pagination.offset())
        .await?;

    Ok(Json(ApplicationListResponse {
        total,
        page: pagination.page(),
        per_page: pagination.per_page(),
        total_pages: pagination.total_pages(total),
        applications,
    }))
}
