//! Domain entities for the jobs domain

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use jobstack_common::{Error, Result};

/// Delimiter for the serialized skills text. A skill token must never
/// contain it or the round-trip is lossy.
const SKILLS_DELIMITER: char = ',';

/// Job posting entity.
///
/// `skills` holds the comma-delimited storage form; `num_applications`
/// is maintained exclusively by the application ledger and `posted_by`
/// / `posted_at` are immutable after creation.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub work_mode: String,
    pub yoe: String,
    pub salary: String,
    pub skills: String,
    pub posted_by: Uuid,
    pub posted_at: DateTime<Utc>,
    pub num_applications: i32,
    pub is_closed: bool,
}

impl Job {
    /// Create a new open job posting with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: String,
        company: String,
        description: String,
        location: String,
        work_mode: String,
        yoe: String,
        salary: String,
        skills: &[String],
        posted_by: Uuid,
    ) -> Result<Self> {
        for (label, value) in [
            ("title", &title),
            ("company", &company),
            ("description", &description),
            ("location", &location),
            ("work_mode", &work_mode),
            ("yoe", &yoe),
            ("salary", &salary),
        ] {
            if value.trim().is_empty() {
                return Err(Error::validation(format!("Field '{}' is required", label)));
            }
        }

        Ok(Job {
            id: Uuid::new_v4(),
            title,
            company,
            description,
            location,
            work_mode,
            yoe,
            salary,
            skills: join_skills(skills)?,
            posted_by,
            posted_at: Utc::now(),
            num_applications: 0,
            is_closed: false,
        })
    }

    /// The skills list in its ordered, deserialized form
    pub fn skills_list(&self) -> Vec<String> {
        split_skills(&self.skills)
    }
}

/// Serialize an ordered skills list to the delimited storage form.
///
/// Rejects tokens containing the delimiter; silently storing them would
/// corrupt the round-trip.
pub fn join_skills(skills: &[String]) -> Result<String> {
    for skill in skills {
        if skill.contains(SKILLS_DELIMITER) {
            return Err(Error::validation(format!(
                "Skill '{}' must not contain a comma",
                skill
            )));
        }
        if skill.trim().is_empty() {
            return Err(Error::validation("Skills must not be empty"));
        }
    }
    Ok(skills.join(","))
}

/// Split the delimited storage form back into an ordered list.
/// An empty stored value yields an empty list.
pub fn split_skills(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(SKILLS_DELIMITER).map(str::to_string).collect()
}

/// Job application entity. Never updated after creation.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Application {
    pub id: Uuid,
    pub user_id: Uuid,
    pub job_id: Uuid,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    pub fn new(user_id: Uuid, job_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            job_id,
            applied_at: Utc::now(),
        }
    }
}

/// Open/closed filter for job listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Open,
    Closed,
    #[default]
    Any,
}

impl StatusFilter {
    /// The `is_closed` value this filter matches, if it constrains one
    pub fn is_closed(&self) -> Option<bool> {
        match self {
            StatusFilter::Open => Some(false),
            StatusFilter::Closed => Some(true),
            StatusFilter::Any => None,
        }
    }
}

/// Typed partial update over the editable job columns.
///
/// One optional field per allowed column; translated to a single
/// parameterized statement, never by concatenating field names.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub work_mode: Option<String>,
    pub yoe: Option<String>,
    pub salary: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl JobUpdate {
    /// Whether no field is present
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.work_mode.is_none()
            && self.yoe.is_none()
            && self.salary.is_none()
            && self.skills.is_none()
    }

    /// Serialized form of the skills field, validated
    pub fn skills_text(&self) -> Result<Option<String>> {
        match &self.skills {
            Some(skills) => Ok(Some(join_skills(skills)?)),
            None => Ok(None),
        }
    }
}
