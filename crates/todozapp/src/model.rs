//! # Domain Model: Items and Filters
//!
//! This module defines the core data structures: [`Item`] and [`Filter`].
//!
//! ## Input Normalization
//!
//! Users submit text from free-form input fields, so both the text and the
//! detail are trimmed on construction. A submission whose trimmed text is empty
//! is not an item at all — [`Item::new`] returns `None` and nothing is stored.
//! The detail keeps its interior line breaks (only leading/trailing whitespace
//! is stripped); a multi-line detail is legal and drives a presentational hint
//! in the projection.
//!
//! ## Identity
//!
//! Every item gets a v7 UUID at creation: a timestamp component plus random
//! bits, so ids are unique among all currently-held ids with overwhelming
//! probability and without any coordination. Ids are opaque to the rest of the
//! system, immutable, and never reused.
//!
//! ## Persisted Shape
//!
//! Items serialize to records with fields `id`, `text`, `detail`, `completed`.
//! `detail` is `#[serde(default)]` so records written before the field existed
//! still load. Anything else that fails to deserialize is treated as corruption
//! by the store and resets the whole list — there is no per-record repair.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub detail: String,
    pub completed: bool,
}

impl Item {
    /// Build an item from raw user input.
    ///
    /// Trims both fields; returns `None` when the trimmed text is empty.
    /// New items always start uncompleted.
    pub fn new(text: &str, detail: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            // v7: time component + random component
            id: Uuid::now_v7(),
            text: text.to_string(),
            detail: detail.trim().to_string(),
            completed: false,
        })
    }

    /// True iff the detail spans more than one line.
    pub fn has_multiline_detail(&self) -> bool {
        self.detail.contains('\n')
    }
}

/// The session view filter. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Parse the wire/user representation. Unrecognized values yield `None`;
    /// callers drop the request rather than erroring.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Whether an item is visible under this filter.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_trims_text_and_detail() {
        let item = Item::new("  Buy milk  ", "  2% if they have it  ").unwrap();
        assert_eq!(item.text, "Buy milk");
        assert_eq!(item.detail, "2% if they have it");
        assert!(!item.completed);
    }

    #[test]
    fn test_new_rejects_empty_text() {
        assert!(Item::new("", "detail").is_none());
        assert!(Item::new("   ", "detail").is_none());
        assert!(Item::new(" \t\n ", "").is_none());
    }

    #[test]
    fn test_new_keeps_interior_line_breaks() {
        let item = Item::new("Walk dog", "bring leash\nand bag\n").unwrap();
        assert_eq!(item.detail, "bring leash\nand bag");
        assert!(item.has_multiline_detail());
    }

    #[test]
    fn test_single_line_detail_is_not_multiline() {
        let item = Item::new("Buy milk", "").unwrap();
        assert!(!item.has_multiline_detail());

        let item = Item::new("Buy milk", "one line").unwrap();
        assert!(!item.has_multiline_detail());
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let mut seen = HashSet::new();
        for i in 0..1000 {
            let item = Item::new(&format!("item {}", i), "").unwrap();
            assert!(seen.insert(item.id), "duplicate id generated");
        }
    }

    #[test]
    fn test_item_serialization_roundtrip() {
        let item = Item::new("Walk dog", "bring leash\nand bag").unwrap();

        let json = serde_json::to_string(&item).unwrap();
        let loaded: Item = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, item);
    }

    #[test]
    fn test_legacy_record_without_detail() {
        // Records written before the detail field existed
        let json = r#"{
            "id": "0198c5b2-8a11-7cc3-9f6e-3f6a7b2d1e05",
            "text": "Legacy item",
            "completed": true
        }"#;

        let loaded: Item = serde_json::from_str(json).unwrap();
        assert_eq!(loaded.text, "Legacy item");
        assert_eq!(loaded.detail, "");
        assert!(loaded.completed);
    }

    #[test]
    fn test_filter_parse_recognized_values() {
        assert_eq!(Filter::parse("all"), Some(Filter::All));
        assert_eq!(Filter::parse("active"), Some(Filter::Active));
        assert_eq!(Filter::parse("completed"), Some(Filter::Completed));
    }

    #[test]
    fn test_filter_parse_rejects_unknown_values() {
        assert_eq!(Filter::parse("done"), None);
        assert_eq!(Filter::parse("ALL"), None);
        assert_eq!(Filter::parse(""), None);
    }

    #[test]
    fn test_filter_default_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_filter_matches() {
        let mut item = Item::new("task", "").unwrap();

        assert!(Filter::All.matches(&item));
        assert!(Filter::Active.matches(&item));
        assert!(!Filter::Completed.matches(&item));

        item.completed = true;
        assert!(Filter::All.matches(&item));
        assert!(!Filter::Active.matches(&item));
        assert!(Filter::Completed.matches(&item));
    }

    #[test]
    fn test_filter_as_str_roundtrip() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            assert_eq!(Filter::parse(filter.as_str()), Some(filter));
        }
    }
}
