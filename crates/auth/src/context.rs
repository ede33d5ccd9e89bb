//! Authorization context and guard for authenticated users

use uuid::Uuid;

use crate::claims::Claims;
use crate::error::AuthError;
use crate::types::Role;

/// Represents a verified user identity.
///
/// Produced only by token validation; handlers never construct one from
/// raw request data.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
}

/// What an operation requires of the caller.
///
/// Every mutating operation on a job or application passes through
/// exactly one of these checks before any storage statement executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Caller's role must match exactly
    RoleIs(Role),
    /// Caller must be an admin
    IsAdmin,
    /// Caller must own the resource, or be an admin
    OwnsResource(Uuid),
}

impl AuthContext {
    /// Build a context from verified token claims.
    ///
    /// Fails if the subject is not a well-formed user id.
    pub fn from_claims(claims: &Claims) -> Result<Self, AuthError> {
        let user_id = claims
            .sub
            .parse::<Uuid>()
            .map_err(|_| AuthError::InvalidUserId)?;
        Ok(Self {
            user_id,
            name: claims.name.clone(),
            role: claims.role,
        })
    }

    /// Check whether the caller satisfies `requirement`.
    pub fn allows(&self, requirement: AccessRequirement) -> bool {
        match requirement {
            AccessRequirement::RoleIs(role) => self.role == role,
            AccessRequirement::IsAdmin => self.role.is_admin(),
            AccessRequirement::OwnsResource(owner_id) => {
                self.user_id == owner_id || self.role.is_admin()
            }
        }
    }

    /// Enforce `requirement`, yielding a caller-visible authorization
    /// error on denial. Denials are never silently ignored.
    pub fn authorize(&self, requirement: AccessRequirement) -> jobstack_common::Result<()> {
        if self.allows(requirement) {
            Ok(())
        } else {
            let reason = match requirement {
                AccessRequirement::RoleIs(role) => {
                    format!("This action requires the {} role", role)
                }
                AccessRequirement::IsAdmin => "This action requires admin privileges".to_string(),
                AccessRequirement::OwnsResource(_) => {
                    "You do not have access to this resource".to_string()
                }
            };
            Err(jobstack_common::Error::Authorization(reason))
        }
    }
}
