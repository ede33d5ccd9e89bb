//! User profile and admin user listing handlers
//!
//! Implements:
//! - GET /api/profile — Current user's profile
//! - GET /api/admin/users — All users (admin only), paginated

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use jobstack_auth::{AdminUser, AuthUser};
use jobstack_common::{Error, Pagination, Result};

use crate::api::middleware::AccountsState;
use crate::domain::entities::UserView;

/// Response for the profile endpoint
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: UserView,
}

/// List response for admin user listing
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    pub users: Vec<UserView>,
}

/// GET /api/profile — Current user's profile.
///
/// Loads the stored record rather than echoing token claims, so a
/// deleted account reads as not found even with a live token.
pub async fn profile(
    AuthUser(ctx): AuthUser,
    State(state): State<AccountsState>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .repos
        .users
        .find(ctx.user_id)
        .await?
        .ok_or_else(|| Error::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        profile: user.into(),
    }))
}

/// GET /api/admin/users — All users (admin only), paginated
pub async fn list_users(
    AdminUser(_ctx): AdminUser,
    State(state): State<AccountsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<UserListResponse>> {
    let (users, total) = state
        .repos
        .users
        .list(pagination.per_page(), pagination.offset())
        .await?;

    Ok(Json(UserListResponse {
        total,
        page: pagination.page(),
        per_page: pagination.per_page(),
        total_pages: pagination.total_pages(total),
        users: users.into_iter().map(Into::into).collect(),
    }))
}
