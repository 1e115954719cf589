use super::backend::StorageBackend;
use crate::error::{Result, TodozError};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since todoz is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
///
/// Every successful `write_slot` bumps a counter, so tests can assert that
/// no-op mutations skip the persistence write entirely.
pub struct MemBackend {
    slot: RefCell<Option<String>>,
    writes: RefCell<usize>,
    simulate_write_error: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            slot: RefCell::new(None),
            writes: RefCell::new(0),
            simulate_write_error: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing degraded persistence.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Number of successful slot writes so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TodozError::Store("Simulated write error".to_string()));
        }
        *self.slot.borrow_mut() = Some(payload.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn slot_path(&self) -> PathBuf {
        PathBuf::from("memory://todos")
    }
}
