//! Selection state for one composer surface

use std::collections::HashSet;

/// The set of currently chosen descriptor values.
///
/// Backed by an unordered set; membership is flipped by [`toggle`] and the
/// whole set is drawn from the attribute catalog's `value` field, so no
/// free-form text enters prompts through this path.
///
/// [`toggle`]: SelectionSet::toggle
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    values: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the value if absent, removes it if present.
    /// Calling twice returns the set to its original state.
    pub fn toggle(&mut self, value: &str) {
        if !self.values.remove(value) {
            self.values.insert(value.to_string());
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Selected values in a stable order for request assembly
    pub fn values_sorted(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        values.sort_unstable();
        values
    }

    /// Comma-joined fragment for prompt interpolation
    pub fn to_fragment(&self) -> String {
        self.values_sorted().join(", ")
    }

    /// Adds a batch of values (used when applying suggestions)
    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut set = SelectionSet::new();
        set.toggle("Golden hour");
        assert_eq!(set.len(), 1);
        assert!(set.contains("Golden hour"));

        set.toggle("Golden hour");
        assert_eq!(set.len(), 0);
        assert!(!set.contains("Golden hour"));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = SelectionSet::new();
        set.toggle("a");
        set.toggle("b");
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn fragment_is_sorted_and_comma_joined() {
        let mut set = SelectionSet::new();
        set.toggle("zebra");
        set.toggle("apple");
        assert_eq!(set.to_fragment(), "apple, zebra");
    }

    #[test]
    fn extend_deduplicates_against_existing_selection() {
        let mut set = SelectionSet::new();
        set.toggle("a");
        set.extend(["a", "b"]);
        assert_eq!(set.len(), 2);
    }
}
