//! Repository implementations for the accounts domain

pub mod users;

use sqlx::PgPool;

pub use users::UserRepository;

/// Combined repository access for the accounts domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pub users: UserRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }
}
