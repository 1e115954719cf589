//! # Command Dispatcher
//!
//! The single entry point for all mutations, regardless of the UI driving
//! them. [`dispatch`] maps an [`Intent`] onto the matching store operation and
//! then **unconditionally** rebuilds the projection — a no-op mutation still
//! yields an identical, valid projection, so callers never render stale state.
//!
//! ## What the Dispatcher Does NOT Do
//!
//! - **I/O**: no stdout, stderr, or terminal concerns
//! - **Raise**: it never returns an error. Validation failures and unknown ids
//!   are no-ops; a failed persistence write becomes a warning message while
//!   the in-memory state stays authoritative.
//!
//! Malformed intents cannot be expressed: `Intent` is a closed enum and
//! filter values are parsed at the boundary ([`Filter::parse`]), so anything
//! unrecognized is dropped before it gets here.
//!
//! ## Structured Returns
//!
//! [`dispatch`] returns a [`CmdResult`]: the fresh projection plus structured
//! messages with levels (info, success, warning, error). The UI layer decides
//! how to render them.

use crate::model::Filter;
use crate::store::{StorageBackend, TodoStore};
use crate::view::{project, Projection};
use serde::Serialize;
use uuid::Uuid;

/// An external request to change or re-view the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddItem { text: String, detail: String },
    ToggleItem { id: Uuid, completed: bool },
    RemoveItem { id: Uuid },
    ClearCompleted,
    SetFilter { filter: Filter },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug)]
pub struct CmdResult {
    pub projection: Projection,
    pub messages: Vec<CmdMessage>,
}

/// Process one intent to completion: mutation, persistence, re-projection.
pub fn dispatch<B: StorageBackend>(store: &mut TodoStore<B>, intent: Intent) -> CmdResult {
    let mut messages = Vec::new();

    let mutation = match intent {
        Intent::AddItem { text, detail } => {
            let mutation = store.add(&text, &detail);
            if mutation.changed {
                messages.push(CmdMessage::success(format!("Added: {}", text.trim())));
            }
            mutation
        }
        Intent::ToggleItem { id, completed } => store.toggle(id, completed),
        Intent::RemoveItem { id } => {
            let mutation = store.remove(id);
            if mutation.changed {
                messages.push(CmdMessage::info("Removed 1 item"));
            }
            mutation
        }
        Intent::ClearCompleted => {
            let mutation = store.clear_completed();
            if mutation.changed {
                messages.push(CmdMessage::info(format!(
                    "Cleared {} completed item{}",
                    mutation.removed,
                    if mutation.removed == 1 { "" } else { "s" }
                )));
            }
            mutation
        }
        Intent::SetFilter { filter } => store.set_filter(filter),
    };

    if let Some(err) = mutation.persist_error {
        messages.push(CmdMessage::warning(format!(
            "Could not save; changes kept in memory: {}",
            err
        )));
    }

    CmdResult {
        projection: project(store.items(), store.filter()),
        messages,
    }
}
