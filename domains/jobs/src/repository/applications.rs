//! Application listings
//!
//! All listings order by `applied_at` descending and return the
//! pre-pagination total alongside the page.

use chrono::{DateTime, Utc};
use jobstack_common::Result;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

/// A job seeker's application joined with the job it targets
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ApplicationWithJob {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub applied_at: DateTime<Utc>,
}

/// An applicant row for an employer viewing a job's applications
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ApplicantRow {
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applied_at: DateTime<Utc>,
}

/// An application row for the admin-wide overview
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ApplicationOverviewRow {
    pub application_id: Uuid,
    pub applicant_name: String,
    pub job_title: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applications made by one user, newest first
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ApplicationWithJob>, i64)> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM applications WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, ApplicationWithJob>(
            r#"
            SELECT a.id, a.job_id, j.title AS job_title, j.company, a.applied_at
            FROM applications a
            JOIN jobs j ON a.job_id = j.id
            WHERE a.user_id = $1
            ORDER BY a.applied_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }

    /// Applicants for one job, joined with user details, newest first
    pub async fn list_for_job(
        &self,
        job_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ApplicantRow>, i64)> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications WHERE job_id = $1")
                .bind(job_id)
                .fetch_one(&self.pool)
                .await?;

        let rows = sqlx::query_as::<_, ApplicantRow>(
            r#"
            SELECT u.id AS applicant_id, u.name AS applicant_name,
                   u.email AS applicant_email, a.applied_at
            FROM applications a
            JOIN users u ON a.user_id = u.id
            WHERE a.job_id = $1
            ORDER BY a.applied_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(job_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }

    /// All applications across all jobs (admin overview), newest first
    pub async fn list_all(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<ApplicationOverviewRow>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, ApplicationOverviewRow>(
            r#"
            SELECT a.id AS application_id, u.name AS applicant_name,
                   j.title AS job_title, a.applied_at
            FROM applications a
            JOIN users u ON a.user_id = u.id
            JOIN jobs j ON a.job_id = j.id
            ORDER BY a.applied_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((rows, total))
    }
}
