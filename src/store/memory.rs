//! Shared in-memory coaster table.

use std::collections::HashMap;

use parking_lot::Mutex;
use rand::seq::IteratorRandom;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::types::{Coaster, NewCoaster};
use crate::error::StoreError;

/// Thread-safe coaster store.
///
/// A single mutex guards the whole table. Every operation copies what it
/// needs out of the map and releases the lock before returning, so callers
/// never serialize or do I/O while holding it.
#[derive(Debug, Default)]
pub struct CoasterStore {
    coasters: Mutex<HashMap<String, Coaster>>,
}

impl CoasterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored coaster, in no particular order.
    pub fn list(&self) -> Vec<Coaster> {
        self.coasters.lock().values().cloned().collect()
    }

    /// Store a new coaster under a freshly generated id.
    ///
    /// Returns the stored record, including its id.
    #[instrument(skip(self, coaster), fields(name = %coaster.name))]
    pub fn insert(&self, coaster: NewCoaster) -> Coaster {
        let mut coasters = self.coasters.lock();

        // v4 collisions are not expected, but an existing record is never replaced.
        let id = loop {
            let id = generate_id();
            if !coasters.contains_key(&id) {
                break id;
            }
        };

        let stored = coaster.with_id(id.clone());
        coasters.insert(id, stored.clone());
        debug!(id = %stored.id, "coaster stored");
        stored
    }

    /// Fetch a coaster by id.
    pub fn get(&self, id: &str) -> Result<Coaster, StoreError> {
        self.coasters
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Fetch a uniformly chosen coaster.
    ///
    /// With a single record stored, that record is always returned.
    pub fn random(&self) -> Result<Coaster, StoreError> {
        self.coasters
            .lock()
            .values()
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(StoreError::Empty)
    }

    /// Number of stored coasters.
    pub fn len(&self) -> usize {
        self.coasters.lock().len()
    }

    /// Whether the store holds no coasters.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
