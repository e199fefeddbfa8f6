//! Record store module for the coaster catalog.
//!
//! This module handles:
//! - Coaster record types and their JSON shape
//! - The shared in-memory table with id generation and random selection

pub mod memory;
pub mod types;

pub use memory::CoasterStore;
pub use types::{Coaster, NewCoaster};
