//! Items and the summary derived from a list of them.

use crate::filter::Filter;
use serde::{Deserialize, Serialize};

/// Opaque unique identifier of an item
///
/// Assigned once at creation and never changed. Serialized as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps an identifier string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A single task
///
/// Persisted as `{"id": "...", "title": "...", "completed": false}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Item {
    /// Creates an active item
    #[must_use]
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Flips the completed flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Counts shown in the footer, derived on every render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FooterSummary {
    /// Items not yet completed
    pub active_count: usize,
    /// Items marked completed
    pub completed_count: usize,
}

impl FooterSummary {
    /// Counts the given items
    #[must_use]
    pub fn from_items(items: &[Item]) -> Self {
        let completed_count = items.iter().filter(|item| item.completed).count();
        Self {
            active_count: items.len() - completed_count,
            completed_count,
        }
    }

    /// Total number of items
    #[must_use]
    pub const fn total(&self) -> usize {
        self.active_count + self.completed_count
    }

    /// Count shown in the "N items left" phrase for a filter
    ///
    /// Under `all` this is active plus completed, i.e. the total, not the
    /// number of active items.
    #[must_use]
    pub const fn displayed_count(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.active_count + self.completed_count,
            Filter::Active => self.active_count,
            Filter::Completed => self.completed_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, completed: bool) -> Item {
        Item {
            id: ItemId::new(id),
            title: id.to_uppercase(),
            completed,
        }
    }

    #[test]
    fn item_new_is_active() {
        let item = Item::new(ItemId::new("a"), "Buy milk");
        assert_eq!(item.title, "Buy milk");
        assert!(!item.completed);
    }

    #[test]
    fn item_toggle_twice_restores_flag() {
        let mut item = Item::new(ItemId::new("a"), "Buy milk");
        item.toggle();
        assert!(item.completed);
        item.toggle();
        assert!(!item.completed);
    }

    #[test]
    fn item_serializes_flat() {
        let item = Item::new(ItemId::new("abc"), "Walk dog");
        let json = serde_json::to_value(&item).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({"id": "abc", "title": "Walk dog", "completed": false}))
        );
    }

    #[test]
    fn summary_counts() {
        let items = vec![item("a", false), item("b", true), item("c", false)];
        let summary = FooterSummary::from_items(&items);
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn displayed_count_follows_filter() {
        let summary = FooterSummary {
            active_count: 1,
            completed_count: 1,
        };
        assert_eq!(summary.displayed_count(Filter::All), 2);
        assert_eq!(summary.displayed_count(Filter::Active), 1);
        assert_eq!(summary.displayed_count(Filter::Completed), 1);
    }

    proptest! {
        #[test]
        fn summary_partitions_the_list(flags in prop::collection::vec(any::<bool>(), 0..20)) {
            let items: Vec<Item> = flags
                .iter()
                .enumerate()
                .map(|(i, completed)| item(&i.to_string(), *completed))
                .collect();
            let summary = FooterSummary::from_items(&items);

            prop_assert_eq!(summary.total(), items.len());
            prop_assert_eq!(summary.displayed_count(Filter::All), items.len());
            prop_assert_eq!(summary.completed_count, flags.iter().filter(|c| **c).count());
        }
    }
}
