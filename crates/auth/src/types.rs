//! Role enumeration shared by auth decisions and the users table

use serde::{Deserialize, Serialize};

/// User role for authorization decisions.
///
/// The role is fixed at registration; there is no role-escalation
/// endpoint. Stored in the `user_role` Postgres enum and carried in
/// identity token claims as a closed enumeration, never a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Role {
    JobSeeker,
    Employer,
    Admin,
}

impl Role {
    /// Check if this role grants moderation privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::JobSeeker => write!(f, "job_seeker"),
            Role::Employer => write!(f, "employer"),
            Role::Admin => write!(f, "admin"),
        }
    }
}
