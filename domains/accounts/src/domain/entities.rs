//! Domain entities for the accounts domain

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::ValidateEmail;

use jobstack_auth::Role;
use jobstack_common::{Error, Result};

/// User entity.
///
/// `password_hash` is never serialized; the role is immutable after
/// registration.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with validation
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Result<Self> {
        if !email.validate_email() {
            return Err(Error::validation("Invalid email format"));
        }

        if name.is_empty() || name.len() > 100 {
            return Err(Error::validation("Name must be 1-100 characters"));
        }

        Ok(User {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role,
            created_at: Utc::now(),
        })
    }
}

/// Public view of a user record (no password hash)
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
