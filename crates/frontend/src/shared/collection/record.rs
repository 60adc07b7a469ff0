use contracts::shared::status::{status_eq, status_label};

use crate::shared::list_utils::{Searchable, Sortable};

/// A row a [`super::CollectionView`] can hold.
pub trait CollectionRecord: Searchable + Sortable + Clone {
    /// Stable primary key; selection is tracked by it.
    fn record_id(&self) -> String;

    /// Categorical status used by the status filter. Empty when the entity has none.
    fn status(&self) -> &str;
}

/// The status tab currently applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// "View All"
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn only(status: &str) -> Self {
        StatusFilter::Only(status.to_string())
    }

    pub fn matches(&self, status: &str) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status_eq(wanted, status),
        }
    }
}

/// One tab of the status filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOption {
    pub label: String,
    pub filter: StatusFilter,
}

/// "View All" followed by one tab per backend status value.
pub fn status_options(statuses: &[&str]) -> Vec<StatusOption> {
    std::iter::once(StatusOption {
        label: "View All".to_string(),
        filter: StatusFilter::All,
    })
    .chain(statuses.iter().map(|s| StatusOption {
        label: status_label(s),
        filter: StatusFilter::only(s),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches("anything"));
        assert!(StatusFilter::only("Active").matches("active"));
        assert!(!StatusFilter::only("active").matches("inactive"));
    }

    #[test]
    fn test_status_options() {
        let opts = status_options(&["active", "inactive"]);
        let labels: Vec<_> = opts.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["View All", "Active", "Inactive"]);
        assert_eq!(opts[0].filter, StatusFilter::All);
    }
}
