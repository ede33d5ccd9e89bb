//! Job repository and query builder

use crate::domain::entities::{Job, JobUpdate, StatusFilter};
use jobstack_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

pub(crate) const JOB_COLUMNS: &str = "id, title, company, description, location, work_mode, yoe, \
     salary, skills, posted_by, posted_at, num_applications, is_closed";

/// Shared filter predicate for `search`.
///
/// All filters are optional and AND-combined in a single parameterized
/// statement. The min/max yoe bounds apply only to rows whose `yoe` is a
/// pure non-negative integer string; rows with free-text experience drop
/// out of any bounded query but are included when no bound is given.
/// That asymmetry is deliberate and load-bearing for the search API.
/// The digit count is capped at 18 so the cast can never exceed bigint
/// range; longer digit runs count as free text.
const JOB_FILTER_WHERE: &str = "\
     ($1::uuid IS NULL OR posted_by = $1) \
     AND ($2::boolean IS NULL OR is_closed = $2) \
     AND ($3::text IS NULL OR LOWER(skills) LIKE $3) \
     AND ($4::bigint IS NULL OR (yoe ~ '^[0-9]{1,18}$' AND yoe::bigint >= $4)) \
     AND ($5::bigint IS NULL OR (yoe ~ '^[0-9]{1,18}$' AND yoe::bigint <= $5))";

/// Filters for job listings, all optional and AND-combined
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    /// Exact match on the posting employer
    pub owner_id: Option<Uuid>,
    /// Open/closed/any
    pub status: StatusFilter,
    /// Case-insensitive substring match against the skills text
    pub skill: Option<String>,
    /// Lower bound on numeric years of experience
    pub min_yoe: Option<i64>,
    /// Upper bound on numeric years of experience
    pub max_yoe: Option<i64>,
}

impl JobFilter {
    /// LIKE pattern for the skill filter
    fn skill_pattern(&self) -> Option<String> {
        self.skill
            .as_ref()
            .map(|s| format!("%{}%", s.to_lowercase()))
    }
}

/// Outcome of a compare-and-set on `is_closed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetClosedOutcome {
    /// State transitioned
    Updated,
    /// Job exists but was already in the requested state
    Unchanged,
    /// No such job
    NotFound,
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find job by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Job>> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
        let row = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a new job posting
    pub async fn create(&self, job: &Job) -> Result<Job> {
        let query = format!(
            "INSERT INTO jobs ({JOB_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {JOB_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Job>(&query)
            .bind(job.id)
            .bind(&job.title)
            .bind(&job.company)
            .bind(&job.description)
            .bind(&job.location)
            .bind(&job.work_mode)
            .bind(&job.yoe)
            .bind(&job.salary)
            .bind(&job.skills)
            .bind(job.posted_by)
            .bind(job.posted_at)
            .bind(job.num_applications)
            .bind(job.is_closed)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Filtered, paginated job listing.
    ///
    /// Returns the page of matching jobs plus the pre-pagination total.
    pub async fn search(
        &self,
        filter: &JobFilter,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Job>, i64)> {
        let count_query = format!("SELECT COUNT(*) FROM jobs WHERE {JOB_FILTER_WHERE}");
        let total = sqlx::query_scalar::<_, i64>(&count_query)
            .bind(filter.owner_id)
            .bind(filter.status.is_closed())
            .bind(filter.skill_pattern())
            .bind(filter.min_yoe)
            .bind(filter.max_yoe)
            .fetch_one(&self.pool)
            .await?;

        let list_query = format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE {JOB_FILTER_WHERE} \
             ORDER BY posted_at DESC, id LIMIT $6 OFFSET $7"
        );
        let rows = sqlx::query_as::<_, Job>(&list_query)
            .bind(filter.owner_id)
            .bind(filter.status.is_closed())
            .bind(filter.skill_pattern())
            .bind(filter.min_yoe)
            .bind(filter.max_yoe)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok((rows, total))
    }

    /// Apply a typed partial update over the editable columns.
    ///
    /// One parameterized statement; absent fields keep their stored value.
    /// `posted_by`, `posted_at`, `num_applications` and `is_closed` are
    /// not reachable from here.
    pub async fn update(&self, id: Uuid, update: &JobUpdate) -> Result<Option<Job>> {
        let skills_text = update.skills_text()?;
        let query = format!(
            "UPDATE jobs SET \
                title = COALESCE($2, title), \
                company = COALESCE($3, company), \
                description = COALESCE($4, description), \
                location = COALESCE($5, location), \
                work_mode = COALESCE($6, work_mode), \
                yoe = COALESCE($7, yoe), \
                salary = COALESCE($8, salary), \
                skills = COALESCE($9, skills) \
             WHERE id = $1 \
             RETURNING {JOB_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&update.title)
            .bind(&update.company)
            .bind(&update.description)
            .bind(&update.location)
            .bind(&update.work_mode)
            .bind(&update.yoe)
            .bind(&update.salary)
            .bind(skills_text)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Compare-and-set `is_closed`.
    ///
    /// Two concurrent calls with the same target state result in one
    /// `Updated` and one `Unchanged`, never two transitions.
    pub async fn set_closed(&self, id: Uuid, closed: bool) -> Result<SetClosedOutcome> {
        let result = sqlx::query("UPDATE jobs SET is_closed = $2 WHERE id = $1 AND is_closed = $3")
            .bind(id)
            .bind(closed)
            .bind(!closed)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            return Ok(SetClosedOutcome::Updated);
        }

        // Zero rows: either absent or already in the requested state
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        if exists {
            Ok(SetClosedOutcome::Unchanged)
        } else {
            Ok(SetClosedOutcome::NotFound)
        }
    }

    /// Delete a job and its applications in one transaction.
    ///
    /// Applications are removed first (referential-integrity ordering).
    /// Returns false if the job does not exist.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM applications WHERE job_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
