//! Admin moderation API handlers
//!
//! Same operations as the employer group but gated on `AdminUser`, with
//! the ownership check bypassed.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use jobstack_auth::AdminUser;
use jobstack_common::{Error, Pagination, Result};

use super::jobs::{JobListResponse, SearchParams};
use crate::api::middleware::JobsState;
use crate::repository::applications::ApplicationOverviewRow;
use crate::repository::SetClosedOutcome;

/// Paginated admin application overview response
#[derive(Debug, Serialize)]
pub struct ApplicationOverviewResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub applications: Vec<ApplicationOverviewRow>,
}

/// GET /api/admin/jobs — all jobs, paginated and filterable
pub async fn list_jobs(
    AdminUser(_ctx): AdminUser,
    State(state): State<JobsState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<JobListResponse>> {
    let filter = params.filter();
    let pagination = params.pagination();

    let (jobs, total) = state
        .repos
        .jobs
        .search(&filter, pagination.per_page(), pagination.offset())
        .await?;

    Ok(Json(JobListResponse::new(jobs, total, &pagination)))
}

/// GET /api/admin/applications — all applications, newest first
pub async fn list_applications(
    AdminUser(_ctx): AdminUser,
    State(state): State<JobsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<ApplicationOverviewResponse>> {
    let (applications, total) = state
        .repos
        .applications
        .list_all(pagination.per_page(), pagination.offset())
        .await?;

    Ok(Json(ApplicationOverviewResponse {
        total,
        page: pagination.page(),
        per_page: pagination.per_page(),
        total_pages: pagination.total_pages(total),
        applications,
    }))
}

/// POST /api/admin/jobs/{id}/close — close any job
pub async fn close_job(
    AdminUser(_ctx): AdminUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    set_closed(&state, id, true).await
}

/// POST /api/admin/jobs/{id}/reopen — reopen any job
pub async fn reopen_job(
    AdminUser(_ctx): AdminUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    set_closed(&state, id, false).await
}

/// DELETE /api/admin/jobs/{id} — delete any job and its applications
pub async fn delete_job(
    AdminUser(_ctx): AdminUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.repos.jobs.delete(id).await?;
    if !deleted {
        return Err(Error::not_found("Job not found"));
    }

    tracing::info!(job_id = %id, "Job deleted by admin");

    Ok(Json(json!({ "message": "Job deleted by admin successfully" })))
}

async fn set_closed(state: &JobsState, id: Uuid, closed: bool) -> Result<Json<serde_json::Value>> {
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
