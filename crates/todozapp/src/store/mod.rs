//! # Storage Layer
//!
//! This module owns the authoritative item list and its persistence round-trip.
//! The [`StorageBackend`] trait lets the store work against different slots.
//!
//! ## Single-Slot Model
//!
//! All items live in one named slot holding a serialized JSON array. There is
//! no per-item file and no versioning field: the slot is rewritten wholesale
//! after every state change, and only after a state change.
//!
//! ### Philosophy
//! - **Memory is Truth**: the in-memory list is authoritative. Persistence is
//!   a best-effort side effect of mutation; a failed write degrades the
//!   session to memory-only, it never rejects the mutation.
//! - **Silent Repair**: a missing, unparseable, or structurally invalid slot
//!   loads as an empty list. Corruption must never block startup, so
//!   [`TodoStore::load`] cannot fail.
//! - **No Redundant Writes**: every operation that leaves state untouched
//!   (empty-text add, unknown id, flag already at its value, nothing to
//!   clear) skips the write. One policy for all operations.
//!
//! ## Mutation Signals
//!
//! Every operation returns a [`Mutation`]: whether state changed, how many
//! items a bulk operation removed, and the captured persistence error if the
//! write failed. The dispatcher turns that error into a warning message; it
//! is never raised.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production slot, one JSON file written
//!   atomically (tmp + rename).
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O,
//!   with an observable write counter.

use crate::error::TodozError;
use crate::model::{Filter, Item};
use uuid::Uuid;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;

pub use backend::StorageBackend;

/// Outcome of a store operation.
///
/// `changed` is false for every no-op path; `persist_error` carries a failed
/// write without failing the operation.
#[derive(Debug, Default)]
#[must_use]
pub struct Mutation {
    pub changed: bool,
    pub removed: usize,
    pub persist_error: Option<TodozError>,
}

impl Mutation {
    fn unchanged() -> Self {
        Self::default()
    }

    fn with_removed(mut self, removed: usize) -> Self {
        self.removed = removed;
        self
    }
}

/// The authoritative, ordered item list plus the session filter.
///
/// Items are kept newest first. The filter is session state only and is
/// never written to the slot.
pub struct TodoStore<B: StorageBackend> {
    pub(crate) backend: B,
    items: Vec<Item>,
    filter: Filter,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Initialize the store from the slot.
    ///
    /// Never fails: missing, unreadable, or structurally invalid data resets
    /// to an empty list.
    pub fn load(backend: B) -> Self {
        let items = match backend.read_slot() {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        };

        Self {
            backend,
            items,
            filter: Filter::default(),
        }
    }

    /// Add a new item at the front of the list.
    ///
    /// Both inputs are trimmed; an empty trimmed text is a validation no-op.
    pub fn add(&mut self, text: &str, detail: &str) -> Mutation {
        let Some(item) = Item::new(text, detail) else {
            return Mutation::unchanged();
        };

        self.items.insert(0, item);
        self.persist()
    }

    /// Set an item's completion flag.
    ///
    /// Unknown ids are tolerated: the UI may hold a stale reference to an
    /// item that is already gone. Setting the flag to its current value is
    /// also a no-op.
    pub fn toggle(&mut self, id: Uuid, completed: bool) -> Mutation {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Mutation::unchanged();
        };
        if item.completed == completed {
            return Mutation::unchanged();
        }

        item.completed = completed;
        self.persist()
    }

    /// Remove the item with the given id, permanently.
    pub fn remove(&mut self, id: Uuid) -> Mutation {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);

        if self.items.len() == before {
            return Mutation::unchanged();
        }
        self.persist().with_removed(1)
    }

    /// Remove every completed item.
    pub fn clear_completed(&mut self) -> Mutation {
        let removed = self.items.iter().filter(|item| item.completed).count();
        if removed == 0 {
            return Mutation::unchanged();
        }

        self.items.retain(|item| !item.completed);
        self.persist().with_removed(removed)
    }

    /// Switch the session filter. Never touches the slot.
    pub fn set_filter(&mut self, filter: Filter) -> Mutation {
        let changed = self.filter != filter;
        self.filter = filter;

        Mutation {
            changed,
            ..Default::default()
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Give the backend back, e.g. to re-load and verify the round-trip.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn persist(&self) -> Mutation {
        let payload = match serde_json::to_string_pretty(&self.items) {
            Ok(payload) => payload,
            Err(e) => {
                return Mutation {
                    changed: true,
                    removed: 0,
                    persist_error: Some(TodozError::Serialization(e)),
                }
            }
        };

        Mutation {
            changed: true,
            removed: 0,
            persist_error: self.backend.write_slot(&payload).err(),
        }
    }
}
