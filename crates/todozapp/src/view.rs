//! # View Projector
//!
//! A pure projection from store state to display-ready records. No mutation,
//! no I/O: the UI layer (CLI, web, anything) renders what comes out of
//! [`project`] and nothing else.
//!
//! The statistics carried by a [`Projection`] are always computed over the
//! full unfiltered store: the "items left" count and whether a bulk clear has
//! anything to do must not change when the user switches filters.

use crate::model::{Filter, Item};
use serde::Serialize;
use uuid::Uuid;

/// One renderable record.
///
/// `has_multiline_detail` is a presentational hint (true iff the detail spans
/// more than one line), not a separate piece of state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    pub id: Uuid,
    pub text: String,
    pub detail: String,
    pub completed: bool,
    pub has_multiline_detail: bool,
}

impl From<&Item> for DisplayItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            text: item.text.clone(),
            detail: item.detail.clone(),
            completed: item.completed,
            has_multiline_detail: item.has_multiline_detail(),
        }
    }
}

/// Everything a UI needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub filter: Filter,
    /// Visible records under the filter, store order (newest first) preserved.
    pub visible: Vec<DisplayItem>,
    /// Uncompleted items in the entire store, regardless of filter.
    pub remaining_count: usize,
    /// Whether any item in the entire store is completed. Drives the
    /// availability of the bulk-clear action.
    pub has_any_completed: bool,
}

/// Derive the visible records and statistics for the current state.
pub fn project(items: &[Item], filter: Filter) -> Projection {
    let visible = items
        .iter()
        .filter(|item| filter.matches(item))
        .map(DisplayItem::from)
        .collect();

    Projection {
        filter,
        visible,
        remaining_count: items.iter().filter(|item| !item.completed).count(),
        has_any_completed: items.iter().any(|item| item.completed),
    }
}
