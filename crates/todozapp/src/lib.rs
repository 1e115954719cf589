//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo-list library**. This is not a CLI application that
//! happens to have some library code—it's a library that happens to have a CLI client.
//!
//! That distinction drives the entire design: everything in this crate takes regular
//! Rust values, returns regular Rust types, and never assumes a terminal (or any
//! other UI) exists.
//!
//! ## The Synchronization Loop
//!
//! The heart of the library is one loop:
//!
//! ```text
//! intent ──▶ Dispatcher ──▶ Store mutation ──▶ persistence write ──▶ Projection
//! ```
//!
//! Every mutation applies to in-memory state first, is persisted as a best-effort
//! side effect, and is followed by a freshly rebuilt projection. The projection is
//! what a UI renders; it is recomputed even after no-op mutations so callers never
//! have to guess whether their view is stale.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (dispatch.rs)                                   │
//! │  - Maps Intent values onto store operations                 │
//! │  - Always re-projects, never returns an error               │
//! │  - Surfaces degraded persistence as warning messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/)                                             │
//! │  - Owns the ordered item list and the session filter        │
//! │  - Persists after every state change, and only then         │
//! │  - Generic over StorageBackend (file or in-memory)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Projector (view.rs)                                        │
//! │  - Pure function: items + filter → display records + stats  │
//! │  - No mutation, no I/O                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Philosophy
//!
//! Nothing in this system is fatal. A corrupt data file loads as an empty list,
//! an unknown id is a no-op, and a failed persistence write leaves the in-memory
//! state authoritative while the application runs on in degraded mode. The cost
//! of a wrong save is far lower than an unresponsive client.
//!
//! ## Testing Strategy
//!
//! - **Store and projector** (`store/`, `view.rs`): the lion's share of testing,
//!   against [`store::memory::InMemoryStore`] so no filesystem is involved.
//! - **Dispatcher** (`dispatch.rs`): verifies intent → operation mapping and that
//!   projections are rebuilt unconditionally.
//! - **Filesystem backend** (`tests/fs_backend_test.rs`): tempdir-based
//!   integration tests for atomic writes and on-disk round-trips.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Item`, `Filter`) and id generation
//! - [`store`]: The store, its mutation operations, and storage backends
//! - [`view`]: The pure projection from store state to display records
//! - [`dispatch`]: Intent dispatch and structured results
//! - [`config`]: On-disk configuration
//! - [`error`]: Error types

pub mod config;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod store;
pub mod view;
