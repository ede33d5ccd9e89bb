//! Employer job management API handlers
//!
//! Role gating happens at the extractor (`EmployerUser`); ownership is
//! checked against the stored `posted_by` before any mutation executes.
//! Admins use the `/api/admin` route group instead of these.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use jobstack_auth::{AccessRequirement, EmployerUser};
use jobstack_common::{Error, Pagination, Result, ValidatedJson};

use super::jobs::{JobListResponse, JobResponse, SearchParams};
use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, JobUpdate};
use crate::repository::applications::ApplicantRow;
use crate::repository::SetClosedOutcome;

/// Request for creating a job posting
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(min = 1, max = 200))]
    pub company: String,

    #[validate(length(min = 1))]
    pub description: String,

    #[validate(length(min = 1, max = 200))]
    pub location: String,

    #[validate(length(min = 1, max = 50))]
    pub work_mode: String,

    #[validate(length(min = 1, max = 50))]
    pub yoe: String,

    #[validate(length(min = 1, max = 100))]
    pub salary: String,

    #[serde(default)]
    pub skills: Vec<String>,
}

/// Paginated applicant list response
#[derive(Debug, serde::Serialize)]
pub struct ApplicantListResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub applications: Vec<ApplicantRow>,
}

/// POST /api/employer/jobs/create — create a new job posting
pub async fn create_job(
    EmployerUser(ctx): EmployerUser,
    State(state): State<JobsState>,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let job = Job::new(
        req.title,
        req.company,
        req.description,
        req.location,
        req.work_mode,
        req.yoe,
        req.salary,
        &req.skills,
        ctx.user_id,
    )?;
    let created = state.repos.jobs.create(&job).await?;

    tracing::info!(job_id = %created.id, posted_by = %ctx.user_id, "Job created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Job created successfully",
            "job": JobResponse::from(created),
        })),
    ))
}

/// GET /api/employer/jobs — jobs posted by the caller
pub async fn list_jobs(
    EmployerUser(ctx): EmployerUser,
    State(state): State<JobsState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<JobListResponse>> {
    let mut filter = params.filter();
    filter.owner_id = Some(ctx.user_id);
    let pagination = params.pagination();

    let (jobs, total) = state
        .repos
        .jobs
        .search(&filter, pagination.per_page(), pagination.offset())
        .await?;

    Ok(Json(JobListResponse::new(jobs, total, &pagination)))
}

/// PATCH /api/employer/jobs/{id} — partial update of an owned job
pub async fn update_job(
    EmployerUser(ctx): EmployerUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    ValidatedJson(update): ValidatedJson<JobUpdate>,
) -> Result<Json<serde_json::Value>> {
    if update.is_empty() {
        return Err(Error::validation("No valid fields to update"));
    }

    let job = state
        .repos
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found("Job not found"))?;
    ctx.authorize(AccessRequirement::OwnsResource(job.posted_by))?;

    state.repos.jobs.update(id, &update).await?;

    Ok(Json(json!({ "message": "Job updated successfully" })))
}

/// DELETE /api/employer/jobs/{id} — delete an owned job and its applications
pub async fn delete_job(
    EmployerUser(ctx): EmployerUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let job = state
        .repos
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found("Job not found"))?;
    ctx.authorize(AccessRequirement::OwnsResource(job.posted_by))?;

    state.repos.jobs.delete(id).await?;

    tracing::info!(job_id = %id, "Job deleted by owner");

    Ok(Json(json!({ "message": "Job deleted successfully" })))
}

/// PATCH /api/employer/jobs/{id}/close — close an owned job
pub async fn close_job(
    EmployerUser(ctx): EmployerUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    set_closed_for_owner(&ctx, &state, id, true).await
}

/// PATCH /api/employer/jobs/{id}/reopen — reopen an owned job
pub async fn reopen_job(
    EmployerUser(ctx): EmployerUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    set_closed_for_owner(&ctx, &state, id, false).await
}

/// GET /api/employer/jobs/{id}/applications — applicants for an owned job
pub async fn job_applications(
    EmployerUser(ctx): EmployerUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<ApplicantListResponse>> {
    let job = state
        .repos
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found("Job not found"))?;
    ctx.authorize(AccessRequirement::OwnsResource(job.posted_by))?;

    let (applications, total) = state
        .repos
        .applications
        .list_for_job(id, pagination.per_page(), pagination.offset())
        .await?;

    Ok(Json(ApplicantListResponse {
        total,
        page: pagination.page(),
        per_page: pagination.per_page(),
        total_pages: pagination.total_pages(total),
        applications,
    }))
}

/// Ownership check followed by the compare-and-set close/reopen.
async fn set_closed_for_owner(
    ctx: &jobstack_auth::AuthContext,
    state: &JobsState,
    id: Uuid,
    closed: bool,
) -> Result<Json<serde_json::Value>> {
    let job = state
        .repos
        .jobs
        .find(id)
        .await?
        .ok_or_else(|| Error::not_found("Job not found"))?;
    ctx.authorize(AccessRequirement::OwnsResource(job.posted_by))?;

    match state.repos.jobs.set_closed(id, closed).await? {
        SetClosedOutcome::Updated => {
            let message = if closed {
                "Job marked as closed"
            } else {
                "Job reopened successfully"
            };
            Ok(Json(json!({ "message": message })))
        }
        SetClosedOutcome::Unchanged => Err(Error::conflict(if closed {
            "Job is already closed"
        } else {
            "Job is already open"
        })),
        SetClosedOutcome::NotFound => Err(Error::not_found("Job not found")),
    }
}
