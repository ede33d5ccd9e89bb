//! Shared utilities, configuration, and error handling for JobStack
//!
//! This crate provides common functionality used across the JobStack application:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Shared axum extractors (pagination, validated JSON)

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{Pagination, ValidatedJson};
