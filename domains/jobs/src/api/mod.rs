pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::JobsState;
pub use routes::routes;
