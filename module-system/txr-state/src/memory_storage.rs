use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::scratchpad::StateWrites;
use crate::storage::{Storage, StorageKey, StorageValue};

/// An in-memory [`Storage`] backend.
///
/// Stands in for the chain's authenticated store in tests and native
/// tooling. Clones share the same underlying cells.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    cells: Arc<Mutex<HashMap<StorageKey, StorageValue>>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an ordered write batch produced by
    /// [`crate::StateCheckpoint::freeze`].
    pub fn commit(&self, writes: &StateWrites) {
        tracing::debug!(writes = writes.len(), "committing state writes");
        let mut cells = self.cells.lock().unwrap();
        for (key, value) in writes {
            match value {
                Some(value) => {
                    cells.insert(key.clone(), value.clone());
                }
                None => {
                    cells.remove(key);
                }
            }
        }
    }

    /// Number of live cells in the store.
    pub fn len(&self) -> usize {
        self.cells.lock().unwrap().len()
    }

    /// Returns `true` if the store holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &StorageKey) -> Option<StorageValue> {
        self.cells.lock().unwrap().get(key).cloned()
    }
}
