/// Selection behavior of a [`ChoiceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    /// At most one item selected; toggling replaces, re-toggling clears.
    Single,
    /// Any number of items; toggling adds if absent and removes if present.
    Multi,
}

/// Toggle state over a displayed catalog list.
///
/// Identifiers are passed through unchanged; a stale id from a concurrently
/// edited catalog is the owning form's problem at submit time, not this
/// editor's. Insertion order is preserved because the create requests carry
/// ordered lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet<T> {
    mode: ChoiceMode,
    selected: Vec<T>,
}

impl<T: Copy + PartialEq> ChoiceSet<T> {
    /// Creates an empty single-select set.
    #[must_use]
    pub fn single() -> Self {
        Self {
            mode: ChoiceMode::Single,
            selected: Vec::new(),
        }
    }

    /// Creates an empty multi-select set.
    #[must_use]
    pub fn multi() -> Self {
        Self {
            mode: ChoiceMode::Multi,
            selected: Vec::new(),
        }
    }

    /// Toggles one item according to the selection mode.
    pub fn toggle(&mut self, id: T) {
        match self.mode {
            ChoiceMode::Single => {
                if self.selected.first() == Some(&id) {
                    self.selected.clear();
                } else {
                    self.selected = vec![id];
                }
            }
            ChoiceMode::Multi => {
                if let Some(index) = self.selected.iter().position(|held| *held == id) {
                    self.selected.remove(index);
                } else {
                    self.selected.push(id);
                }
            }
        }
    }

    /// Returns the current selection in insertion order.
    #[must_use]
    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    /// Returns whether an item is currently selected.
    #[must_use]
    pub fn contains(&self, id: T) -> bool {
        self.selected.contains(&id)
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns the number of selected items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::ChoiceSet;

    #[test]
    fn single_select_replaces_the_selection() {
        let mut set = ChoiceSet::single();
        set.toggle(1_i64);
        set.toggle(2_i64);
        assert_eq!(set.selected(), [2]);
    }

    #[test]
    fn single_select_retoggle_clears() {
        let mut set = ChoiceSet::single();
        set.toggle(7_i64);
        set.toggle(7_i64);
        assert!(set.is_empty());
    }

    #[test]
    fn multi_select_toggle_twice_round_trips() {
        let mut set = ChoiceSet::multi();
        set.toggle(1_i64);
        set.toggle(2_i64);
        let before = set.clone();
        set.toggle(9_i64);
        set.toggle(9_i64);
        assert_eq!(set, before);
    }

    #[test]
    fn multi_select_preserves_insertion_order() {
        let mut set = ChoiceSet::multi();
        set.toggle(3_i64);
        set.toggle(1_i64);
        set.toggle(2_i64);
        set.toggle(1_i64);
        assert_eq!(set.selected(), [3, 2]);
    }

    #[test]
    fn stale_ids_pass_through_unchanged() {
        // No catalog is consulted; an id unknown to any catalog still toggles.
        let mut set = ChoiceSet::multi();
        set.toggle(404_i64);
        assert!(set.contains(404));
    }
}
