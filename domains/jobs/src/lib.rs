//! Jobs domain: job postings, search, applications

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use repository::{
    ApplicationRepository, JobFilter, JobRepository, JobsRepositories, SetClosedOutcome,
};

// Re-export API types
pub use api::routes;
pub use api::JobsState;
