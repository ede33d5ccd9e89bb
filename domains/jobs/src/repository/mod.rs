//! Repository implementations for the jobs domain

pub mod applications;
pub mod jobs;
pub mod transactions;

use sqlx::{PgPool, Postgres, Transaction};

pub use applications::{
    ApplicantRow, ApplicationOverviewRow, ApplicationRepository, ApplicationWithJob,
};
pub use jobs::{JobFilter, JobRepository, SetClosedOutcome};
pub use transactions::{
    application_exists_tx, create_application_tx, find_job_for_update_tx,
    increment_applications_tx,
};

/// Combined repository access for the jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pool: PgPool,
    pub jobs: JobRepository,
    pub applications: ApplicationRepository,
}

impl JobsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jobs: JobRepository::new(pool.clone()),
            applications: ApplicationRepository::new(pool.clone()),
            pool,
        }
    }

    /// Begin a new database transaction.
    pub async fn begin(&self) -> std::result::Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }
}
