pub mod admin;
pub mod applications;
pub mod employer;
pub mod jobs;
