use std::collections::HashSet;

use super::pagination::{page_bounds, page_count, page_label, DEFAULT_PAGE_SIZE};
use super::record::{CollectionRecord, StatusFilter};
use super::selection::{CheckState, Selection};
use crate::shared::list_utils::sort_list;

/// Key of a rendered row: record id plus the load it came from.
pub type RowKey = (String, u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

/// Loaded records plus every piece of transient table state.
#[derive(Debug, Clone)]
pub struct CollectionView<T> {
    items: Vec<T>,
    query: String,
    status_filter: StatusFilter,
    sort: Option<SortState>,
    page: usize,
    page_size: usize,
    selection: Selection,
    revision: u64,
}

impl<T> Default for CollectionView<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            status_filter: StatusFilter::All,
            sort: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            selection: Selection::default(),
            revision: 0,
        }
    }
}

impl<T: CollectionRecord> CollectionView<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut view = Self::default();
        view.set_items(items);
        view
    }

    /// Replaces the loaded set (after a fetch or re-fetch). The current page
    /// is kept when it still exists.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.revision += 1;
        let known: HashSet<String> = self.items.iter().map(|i| i.record_id()).collect();
        self.selection.retain_known(&known);
        self.page = self.page.min(self.page_count() - 1);
    }

    /// Bumped by every [`Self::set_items`].
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.page = 0;
    }

    pub fn status_filter(&self) -> &StatusFilter {
        &self.status_filter
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.page = 0;
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn sort_field(&self) -> &str {
        self.sort.as_ref().map(|s| s.field.as_str()).unwrap_or("")
    }

    pub fn sort_ascending(&self) -> bool {
        self.sort.as_ref().map(|s| s.ascending).unwrap_or(true)
    }

    /// Same column flips direction, a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(current) if current.field == field => Some(SortState {
                field: current.field,
                ascending: !current.ascending,
            }),
            _ => Some(SortState {
                field: field.to_string(),
                ascending: true,
            }),
        };
    }

    /// Rows passing search and status filter, in display order.
    pub fn filtered(&self) -> Vec<T> {
        let mut rows: Vec<T> = self
            .items
            .iter()
            .filter(|item| self.status_filter.matches(item.status()))
            .filter(|item| item.matches_filter(&self.query))
            .cloned()
            .collect();
        if let Some(sort) = &self.sort {
            sort_list(&mut rows, &sort.field, sort.ascending);
        }
        rows
    }

    pub fn filtered_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| self.status_filter.matches(item.status()))
            .filter(|item| item.matches_filter(&self.query))
            .count()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// At least one page, even when nothing matches.
    pub fn page_count(&self) -> usize {
        page_count(self.filtered_count(), self.page_size).max(1)
    }

    pub fn page_label(&self) -> String {
        page_label(self.page, self.page_count())
    }

    /// Rows of the current page; never longer than the page size.
    pub fn page_rows(&self) -> Vec<T> {
        let rows = self.filtered();
        let last = self.page_count().saturating_sub(1);
        let range = page_bounds(self.page.min(last), self.page_size, rows.len());
        rows[range].to_vec()
    }

    /// Page rows keyed so that reloaded records render afresh.
    pub fn keyed_page_rows(&self) -> Vec<(RowKey, T)> {
        self.page_rows()
            .into_iter()
            .map(|row| ((row.record_id(), self.revision), row))
            .collect()
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    pub fn go_first(&mut self) {
        self.page = 0;
    }

    pub fn go_prev(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn go_next(&mut self) {
        self.set_page(self.page + 1);
    }

    pub fn go_last(&mut self) {
        self.set_page(self.page_count().saturating_sub(1));
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn toggle_row(&mut self, id: &str, checked: bool) {
        self.selection.set(id, checked);
    }

    /// Header checkbox: (de)selects every row of the current page.
    pub fn set_page_selected(&mut self, checked: bool) {
        let ids: Vec<String> = self.page_rows().iter().map(|r| r.record_id()).collect();
        self.selection.set_many(ids.iter().map(String::as_str), checked);
    }

    pub fn page_selection_state(&self) -> CheckState {
        let ids: Vec<String> = self.page_rows().iter().map(|r| r.record_id()).collect();
        self.selection.state_for(ids.iter().map(String::as_str))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected records in load order.
    pub fn selected_records(&self) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| self.selection.contains(&item.record_id()))
            .cloned()
            .collect()
    }

    /// What the export button writes: the selection if there is one,
    /// otherwise every loaded record regardless of filters.
    pub fn export_rows(&self) -> Vec<T> {
        if self.selection.is_empty() {
            self.items.clone()
        } else {
            self.selected_records()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{Searchable, SortKey, Sortable};

    #[derive(Debug, Clone, PartialEq)]
    struct Member {
        id: String,
        name: String,
        status: String,
        age: f64,
    }

    impl Searchable for Member {
        fn search_text(&self) -> String {
            self.name.clone()
        }
    }

    impl Sortable for Member {
        fn sort_key(&self, field: &str) -> SortKey {
            match field {
                "age" => SortKey::number(self.age),
                _ => SortKey::text(&self.name),
            }
        }
    }

    impl CollectionRecord for Member {
        fn record_id(&self) -> String {
            self.id.clone()
        }

        fn status(&self) -> &str {
            &self.status
        }
    }

    /// 7 active members followed by 5 inactive ones.
    fn twelve_members() -> Vec<Member> {
        (0..12)
            .map(|i| Member {
                id: format!("m{i}"),
                name: format!("Member {i:02}"),
                status: if i < 7 { "active" } else { "inactive" }.to_string(),
                age: (30 + (i * 7) % 11) as f64,
            })
            .collect()
    }

    fn ids(rows: &[Member]) -> Vec<&str> {
        rows.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_active_filter_and_pages_of_five() {
        let mut view = CollectionView::new(twelve_members());
        view.set_status_filter(StatusFilter::only("Active"));
        assert_eq!(view.filtered_count(), 7);

        view.set_page_size(5);
        assert_eq!(view.page_count(), 2);
        assert_eq!(view.page_rows().len(), 5);
        view.go_next();
        assert_eq!(view.page_rows().len(), 2);
        assert_eq!(view.page_label(), "Page 2 of 2");
        assert!(!view.can_go_next());
    }

    #[test]
    fn test_view_all_restores_full_set() {
        let members = twelve_members();
        let mut view = CollectionView::new(members.clone());
        view.set_status_filter(StatusFilter::only("inactive"));
        assert_eq!(view.filtered_count(), 5);
        view.set_status_filter(StatusFilter::All);
        assert_eq!(view.filtered(), members);
    }

    #[test]
    fn test_status_filter_is_case_insensitive() {
        let mut members = twelve_members();
        members[0].status = "ACTIVE".into();
        members[8].status = "Inactive".into();
        let mut view = CollectionView::new(members);
        for wanted in ["active", "inactive"] {
            view.set_status_filter(StatusFilter::only(wanted));
            assert!(view
                .filtered()
                .iter()
                .all(|m| m.status.eq_ignore_ascii_case(wanted)));
        }
        view.set_status_filter(StatusFilter::only("active"));
        assert_eq!(view.filtered_count(), 7);
    }

    #[test]
    fn test_search_matches_substring_case_insensitive() {
        let mut view = CollectionView::new(twelve_members());
        view.set_query("member 1");
        let rows = view.filtered();
        assert_eq!(ids(&rows), vec!["m10", "m11"]);
        assert!(rows.iter().all(|m| m.name.to_lowercase().contains("member 1")));

        view.set_query("");
        assert_eq!(view.filtered_count(), 12);
    }

    #[test]
    fn test_search_and_status_combine() {
        let mut view = CollectionView::new(twelve_members());
        view.set_status_filter(StatusFilter::only("inactive"));
        view.set_query("member 0");
        assert_eq!(ids(&view.filtered()), vec!["m7", "m8", "m9"]);
    }

    #[test]
    fn test_page_rows_never_exceed_page_size() {
        let mut view = CollectionView::new(twelve_members());
        for &size in super::super::PAGE_SIZE_OPTIONS {
            view.set_page_size(size);
            assert_eq!(view.page_count(), 12usize.div_ceil(size));
            for page in 0..view.page_count() {
                view.set_page(page);
                assert!(view.page_rows().len() <= size);
            }
        }
    }

    #[test]
    fn test_filter_resets_to_first_page() {
        let mut view = CollectionView::new(twelve_members());
        view.set_page_size(5);
        view.go_last();
        assert_eq!(view.page(), 2);
        view.set_query("member");
        assert_eq!(view.page(), 0);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut view = CollectionView::new(twelve_members());
        view.set_page_size(5);
        view.set_page(99);
        assert_eq!(view.page(), 2);
        view.go_prev();
        view.go_prev();
        view.go_prev();
        assert_eq!(view.page(), 0);
        assert!(!view.can_go_prev());
    }

    #[test]
    fn test_empty_view() {
        let view: CollectionView<Member> = CollectionView::new(Vec::new());
        assert_eq!(view.page_count(), 1);
        assert!(view.page_rows().is_empty());
        assert_eq!(view.page_label(), "Page 1 of 1");
        assert_eq!(view.page_selection_state(), CheckState::Unchecked);
    }

    #[test]
    fn test_toggle_sort_direction() {
        let mut view = CollectionView::new(twelve_members());
        view.toggle_sort("age");
        let asc: Vec<f64> = view.filtered().iter().map(|m| m.age).collect();
        assert!(asc.windows(2).all(|w| w[0] <= w[1]));

        view.toggle_sort("age");
        assert!(!view.sort_ascending());
        let desc: Vec<f64> = view.filtered().iter().map(|m| m.age).collect();
        assert!(desc.windows(2).all(|w| w[0] >= w[1]));

        view.toggle_sort("name");
        assert_eq!(view.sort_field(), "name");
        assert!(view.sort_ascending());
    }

    #[test]
    fn test_selection_survives_sort_and_filter() {
        let mut view = CollectionView::new(twelve_members());
        view.set_page_size(5);
        view.toggle_row("m3", true);
        view.toggle_row("m9", true);

        view.toggle_sort("age");
        view.toggle_sort("age");
        view.set_status_filter(StatusFilter::only("active"));
        view.set_status_filter(StatusFilter::All);

        assert!(view.is_selected("m3"));
        assert!(view.is_selected("m9"));
        assert_eq!(ids(&view.selected_records()), vec!["m3", "m9"]);
    }

    #[test]
    fn test_select_all_on_page() {
        let mut view = CollectionView::new(twelve_members());
        view.set_page_size(5);
        view.set_page_selected(true);
        assert_eq!(view.selection().len(), 5);
        assert_eq!(view.page_selection_state(), CheckState::Checked);

        view.go_next();
        assert_eq!(view.page_selection_state(), CheckState::Unchecked);
        view.toggle_row("m5", true);
        assert_eq!(view.page_selection_state(), CheckState::Indeterminate);

        view.go_first();
        view.set_page_selected(false);
        assert_eq!(ids(&view.selected_records()), vec!["m5"]);
    }

    #[test]
    fn test_reload_drops_vanished_selection() {
        let mut members = twelve_members();
        let mut view = CollectionView::new(members.clone());
        view.toggle_row("m0", true);
        view.toggle_row("m11", true);
        members.pop();
        view.set_items(members);
        assert_eq!(ids(&view.selected_records()), vec!["m0"]);
    }

    #[test]
    fn test_reload_keeps_page_within_bounds() {
        let mut members = twelve_members();
        let mut view = CollectionView::new(members.clone());
        view.set_page_size(5);
        view.go_last();
        assert_eq!(view.page(), 2);

        view.set_items(members.clone());
        assert_eq!(view.page(), 2);

        members.truncate(8);
        view.set_items(members);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_reload_changes_row_keys() {
        let mut members = twelve_members();
        let mut view = CollectionView::new(members.clone());
        let before = view.keyed_page_rows();
        let (old_key, _) = &before[0];

        members[0].status = "inactive".into();
        view.set_items(members);
        let after = view.keyed_page_rows();
        let (new_key, row) = &after[0];

        assert_eq!(old_key.0, new_key.0);
        assert_ne!(old_key, new_key);
        assert_eq!(row.status, "inactive");
    }

    #[test]
    fn test_search_keeps_trailing_space() {
        let mut members = twelve_members();
        members[0].name = "Ada Obi".into();
        members[1].name = "Adaeze".into();
        let mut view = CollectionView::new(members);

        view.set_query("ada ");
        let rows = view.filtered();
        assert_eq!(ids(&rows), vec!["m0"]);
        assert!(rows.iter().all(|m| m.name.to_lowercase().contains("ada ")));

        view.set_query("   ");
        assert_eq!(view.filtered_count(), 0);
    }

    #[test]
    fn test_export_rows() {
        let mut view = CollectionView::new(twelve_members());
        view.set_status_filter(StatusFilter::only("active"));
        assert_eq!(view.export_rows().len(), 12);

        view.toggle_row("m1", true);
        view.toggle_row("m2", true);
        assert_eq!(ids(&view.export_rows()), vec!["m1", "m2"]);
    }
}
