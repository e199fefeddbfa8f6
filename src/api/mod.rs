//! HTTP API module for the coaster catalog and admin page.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
