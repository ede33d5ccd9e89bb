//! Authentication middleware for the JobStack API
//!
//! Provides identity token issuance and validation, argon2 password
//! hashing, the role/ownership authorization guard, and axum extractors
//! that work with any domain state implementing `FromRef<S>` for
//! `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod password;
mod types;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use config::AuthConfig;
pub use context::{AccessRequirement, AuthContext};
pub use error::AuthError;
pub use extractors::{AdminUser, AuthUser, EmployerUser, JobSeekerUser};
pub use jwt::{issue_token, verify_token};
pub use password::{hash_password, verify_password};
pub use types::Role;
