//! Navigable, filterable list state
//!
//! Holds an insertion-ordered collection with a highlighted entry. A filter
//! narrows the visible subset without touching the items; the highlight
//! always indexes the visible subset and is clamped to it.

use crate::models::Transaction;

/// Text an item is matched against when filtering
pub trait Filterable {
    fn filter_value(&self) -> &str;
}

impl Filterable for String {
    fn filter_value(&self) -> &str {
        self
    }
}

impl Filterable for Transaction {
    fn filter_value(&self) -> &str {
        &self.description
    }
}

/// An ordered collection with a highlighted entry
#[derive(Debug, Clone)]
pub struct ListView<T> {
    items: Vec<T>,
    /// Indices into `items` that pass the filter
    visible: Vec<usize>,
    /// Position within `visible`
    highlight: usize,
    filter: String,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            highlight: 0,
            filter: String::new(),
        }
    }
}

impl<T: Filterable> ListView<T> {
    /// Create a list with the given items, highlighting the first
    pub fn new(items: Vec<T>) -> Self {
        let mut list = Self {
            items,
            ..Self::default()
        };
        list.refresh_visible();
        list
    }

    /// All items, ignoring the filter
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items, ignoring the filter
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items that pass the filter, in insertion order
    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(move |&i| &self.items[i])
    }

    /// Number of items that pass the filter
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Highlight position within the visible items, `None` when nothing is visible
    pub fn highlight_index(&self) -> Option<usize> {
        if self.visible.is_empty() {
            None
        } else {
            Some(self.highlight)
        }
    }

    /// The highlighted item
    pub fn highlighted(&self) -> Option<&T> {
        self.highlight_index()
            .map(|pos| &self.items[self.visible[pos]])
    }

    /// Shift the highlight, clamping at both ends
    pub fn move_highlight(&mut self, delta: isize) {
        if self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() - 1;
        self.highlight = self.highlight.saturating_add_signed(delta).min(last);
    }

    /// Append an item; the highlight only moves when the list was empty
    pub fn insert(&mut self, item: T) {
        let was_empty = self.visible.is_empty();
        self.items.push(item);

        let index = self.items.len() - 1;
        if self.matches(&self.items[index]) {
            self.visible.push(index);
        }
        if was_empty {
            self.highlight = 0;
        }
    }

    /// Current filter text
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Restrict the visible items to case-insensitive substring matches
    pub fn set_filter(&mut self, text: &str) {
        if self.filter == text {
            return;
        }
        self.filter = text.to_string();
        self.refresh_visible();
        self.highlight = 0;
    }

    /// Show every item again
    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    fn matches(&self, item: &T) -> bool {
        self.filter.is_empty()
            || item
                .filter_value()
                .to_lowercase()
                .contains(&self.filter.to_lowercase())
    }

    fn refresh_visible(&mut self) {
        let visible: Vec<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .map(|(i, _)| i)
            .collect();
        self.visible = visible;
        if let Some(last) = self.visible.len().checked_sub(1) {
            self.highlight = self.highlight.min(last);
        } else {
            self.highlight = 0;
        }
    }
}
