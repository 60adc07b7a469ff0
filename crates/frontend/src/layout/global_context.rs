use leptos::prelude::*;

/// Open tabs and panel visibility, shared by the whole shell.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| push_unique(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next = None;
        self.opened.update(|tabs| next = remove_tab(tabs, key));
        if was_active {
            self.active.set(next);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

fn push_unique(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if !tabs.iter().any(|t| t.key == key) {
        tabs.push(Tab {
            key: key.to_string(),
            title: title.to_string(),
        });
    }
}

/// Removes `key`; returns the tab that should become active (the last one left).
fn remove_tab(tabs: &mut Vec<Tab>, key: &str) -> Option<String> {
    tabs.retain(|tab| tab.key != key);
    tabs.last().map(|t| t.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique() {
        let mut tabs = Vec::new();
        push_unique(&mut tabs, "a001_users", "Users");
        push_unique(&mut tabs, "a001_users", "Users again");
        push_unique(&mut tabs, "a003_bookings", "Bookings");
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "Users");
    }

    #[test]
    fn test_remove_tab_picks_last_remaining() {
        let mut tabs = Vec::new();
        for key in ["a", "b", "c"] {
            push_unique(&mut tabs, key, key);
        }
        assert_eq!(remove_tab(&mut tabs, "c").as_deref(), Some("b"));
        assert_eq!(remove_tab(&mut tabs, "a").as_deref(), Some("b"));
        assert_eq!(remove_tab(&mut tabs, "b"), None);
    }
}
