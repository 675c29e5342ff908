//! Operator selection of catalog rows
//!
//! Transient set of product ids checked in the catalog table. Seeds an
//! order draft and is cleared once the order is actually created. Never
//! persisted.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether every currently visible row is selected. False for an empty
    /// page so the header checkbox never shows checked over nothing.
    pub fn all_selected(&self, visible: &[String]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    /// Header-checkbox behavior over the visible page: if every visible id
    /// is already selected the whole selection is cleared, otherwise the
    /// visible page becomes the selection. A pure toggle, not
    /// idempotent-additive.
    pub fn select_all(&mut self, visible: &[String]) {
        if self.all_selected(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().cloned().collect();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle() {
        let mut selection = SelectionSet::new();
        selection.toggle("a");
        assert!(selection.contains("a"));
        selection.toggle("a");
        assert!(!selection.contains("a"));
    }

    #[test]
    fn test_select_all_is_pure_toggle() {
        let visible = ids(&["a", "b", "c"]);
        let mut selection = SelectionSet::new();

        selection.select_all(&visible);
        assert_eq!(selection.len(), 3);
        assert!(selection.all_selected(&visible));

        // Toggling again with everything selected clears, not re-selects
        selection.select_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_reflects_visible_page_only() {
        let mut selection = SelectionSet::new();
        selection.toggle("stale");

        let visible = ids(&["a", "b"]);
        selection.select_all(&visible);
        assert_eq!(selection.len(), 2);
        assert!(!selection.contains("stale"));
    }

    #[test]
    fn test_partial_selection_selects_all() {
        let visible = ids(&["a", "b", "c"]);
        let mut selection = SelectionSet::new();
        selection.toggle("a");
        selection.select_all(&visible);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_empty_page_never_all_selected() {
        let selection = SelectionSet::new();
        assert!(!selection.all_selected(&[]));
    }
}
