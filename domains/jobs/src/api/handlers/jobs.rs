//! Public job search API handlers
//!
//! Implements:
//! - GET /api/jobs, GET /api/jobs/search — filtered, paginated listings

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobstack_common::{Pagination, Result};

use crate::api::middleware::JobsState;
use crate::domain::entities::{Job, StatusFilter};
use crate::repository::JobFilter;

/// Job response DTO.
///
/// Skills surface as an ordered list; `is_closed` as a boolean;
/// timestamps as RFC 3339.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub work_mode: String,
    pub yoe: String,
    pub salary: String,
    pub skills: Vec<String>,
    pub posted_by: Uuid,
    pub posted_at: DateTime<Utc>,
    pub num_applications: i32,
    pub is_closed: bool,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        let skills = job.skills_list();
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            description: job.description,
            location: job.location,
            work_mode: job.work_mode,
            yoe: job.yoe,
            salary: job.salary,
            skills,
            posted_by: job.posted_by,
            posted_at: job.posted_at,
            num_applications: job.num_applications,
            is_closed: job.is_closed,
        }
    }
}

/// Paginated job list response
#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub jobs: Vec<JobResponse>,
}

impl JobListResponse {
    pub fn new(jobs: Vec<Job>, total: i64, pagination: &Pagination) -> Self {
        Self {
            total,
            page: pagination.page(),
            per_page: pagination.per_page(),
            total_pages: pagination.total_pages(total),
            jobs: jobs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Query parameters for the public job search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub skill: Option<String>,
    pub min_yoe: Option<i64>,
    pub max_yoe: Option<i64>,
    #[serde(default)]
    pub status: StatusFilter,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl SearchParams {
    pub fn filter(&self) -> JobFilter {
        JobFilter {
            owner_id: None,
            status: self.status,
            skill: self.skill.clone(),
            min_yoe: self.min_yoe,
            max_yoe: self.max_yoe,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// GET /api/jobs, GET /api/jobs/search — public filtered search
pub async fn search_jobs(
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
