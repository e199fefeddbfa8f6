//! In-memory roller coaster catalog served over HTTP.
//!
//! Coasters are created, listed and fetched (by id or at random) through a
//! small JSON API. A separate admin page is gated behind Basic auth with a
//! single password taken from the environment.
//!
//! ```text
//! GET  /coasters          list all coasters
//! POST /coasters          create a coaster (application/json)
//! GET  /coasters/{id}     fetch one coaster
//! GET  /coasters/random   fetch a random coaster
//! ANY  /admin             admin page (user "admin", password ADMIN_PASSWORD)
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Coaster records and the shared in-memory table
//! - [`admin`]: Credential check for the admin page
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod admin;
pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{CatalogError, Result};
