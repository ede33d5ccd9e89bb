//! Transaction helpers for the jobs domain
//!
//! The apply sequence (existence/closed/duplicate checks, insert,
//! counter increment) runs inside one transaction composed from these
//! helpers, with the job row locked `FOR UPDATE` so two concurrent
//! applications cannot both pass the checks. The `(user_id, job_id)`
//! UNIQUE constraint backs the duplicate pre-check at the storage level.

use super::jobs::JOB_COLUMNS;
use crate::domain::entities::{Application, Job};
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Fetch a job row with a row-level lock, serializing concurrent
/// apply/close sequences against the same job.
pub async fn find_job_for_update_tx(
    tx: &mut Transaction<'_, Postgres>,
    job_id: Uuid,
) -> Result<Option<Job>, sqlx::Error> {
    let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 FOR UPDATE");
    let row = sqlx::query_as::<_, Job>(&query)
        .bind(job_id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(row)
}

/// Whether the user already applied to the job
pub async fn application_exists_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    job_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM applications WHERE user_id = $1 AND job_id = $2)",
    )
    .bind(user_id)
    .bind(job_id)
    .fetch_one(&mut **tx)
    .await?;
    Ok(exists)
}

/// Insert a new application within a transaction
pub async fn create_application_tx(
    tx: &mut Transaction<'_, Postgres>,
    application: &Application,
) -> Result<Application, sqlx::Error> {
    let row = sqlx::query_as::<_, Application>(
        r#"
        INSERT INTO applications (id, user_id, job_id, applied_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, job_id, applied_at
        "#,
    )
    .bind(application.id)
    .bind(application.user_id)
    .bind(application.job_id)
    .bind(application.applied_at)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row)
}

/// Increment the denormalized application counter by exactly one.
/// Nothing ever decrements it.
pub async fn increment_applications_tx(
    tx: &mut Transaction<'_, Postgres>,
    job_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE jobs SET num_applications = num_applications + 1 WHERE id = $1")
        .bind(job_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
