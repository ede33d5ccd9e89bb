//! Route definitions for the accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::AccountsState;

/// Create all accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/profile", get(users::profile))
        .route("/api/admin/users", get(users::list_users))
}
