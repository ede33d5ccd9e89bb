//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;
use crate::types::Role;

/// Authenticated user extractor (any role)
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)?;

        let token = extract_bearer_token(auth_header)?;
        let auth_context = backend.authenticate(&token)?;

        Ok(AuthUser(auth_context))
    }
}

/// Job-seeker authenticated extractor.
///
/// Like `AuthUser` but rejects other roles with 403 FORBIDDEN. Used by
/// the apply and my-applications routes.
#[derive(Debug)]
pub struct JobSeekerUser(pub AuthContext);

impl<S> FromRequestParts<S> for JobSeekerUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(auth_context) = AuthUser::from_request_parts(parts, state).await?;

        if auth_context.role != Role::JobSeeker {
            return Err(AuthError::WrongRole("job_seeker"));
        }

        Ok(JobSeekerUser(auth_context))
    }
}

/// Employer authenticated extractor for the `/api/employer/*` route group.
#[derive(Debug)]
pub struct EmployerUser(pub AuthContext);

impl<S> FromRequestParts<S> for EmployerUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(auth_context) = AuthUser::from_request_parts(parts, state).await?;

        if auth_context.role != Role::Employer {
            return Err(AuthError::WrongRole("employer"));
        }

        Ok(EmployerUser(auth_context))
    }
}

/// Admin authenticated extractor for the `/api/admin/*` route group.
/// Ownership checks are bypassed for admins at the guard level, not here.
#[derive(Debug)]
pub struct AdminUser(pub AuthContext);

impl<S> FromRequestParts<S> for AdminUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(auth_context) = AuthUser::from_request_parts(parts, state).await?;

        if auth_context.role != Role::Admin {
            return Err(AuthError::WrongRole("admin"));
        }

        Ok(AdminUser(auth_context))
    }
}
