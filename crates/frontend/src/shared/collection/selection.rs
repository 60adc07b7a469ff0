use std::collections::HashSet;

/// Tri-state of a "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Selected rows, keyed by record id so it survives sorting and filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn set_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>, checked: bool) {
        for id in ids {
            self.set(id, checked);
        }
    }

    /// Drops ids that are no longer loaded.
    pub fn retain_known(&mut self, known: &HashSet<String>) {
        self.ids.retain(|id| known.contains(id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// State of the header checkbox for the given visible ids.
    pub fn state_for<'a>(&self, visible: impl IntoIterator<Item = &'a str>) -> CheckState {
        let mut total = 0;
        let mut hit = 0;
        for id in visible {
            total += 1;
            if self.contains(id) {
                hit += 1;
            }
        }
        if hit == 0 {
            CheckState::Unchecked
        } else if hit == total {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_for() {
        let mut sel = Selection::default();
        assert_eq!(sel.state_for(["a", "b"]), CheckState::Unchecked);
        sel.set("a", true);
        assert_eq!(sel.state_for(["a", "b"]), CheckState::Indeterminate);
        sel.set("b", true);
        assert_eq!(sel.state_for(["a", "b"]), CheckState::Checked);
        assert_eq!(sel.state_for(std::iter::empty()), CheckState::Unchecked);
    }

    #[test]
    fn test_retain_known() {
        let mut sel = Selection::default();
        sel.set_many(["a", "b", "c"], true);
        let known: HashSet<String> = ["a", "c"].iter().map(|s| s.to_string()).collect();
        sel.retain_known(&known);
        assert_eq!(sel.len(), 2);
        assert!(!sel.contains("b"));
    }
}
