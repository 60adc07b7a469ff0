//! Search, sort and header helpers shared by every list page.

use std::cmp::Ordering;

/// Records that can be matched by the global search box.
pub trait Searchable {
    /// Text the search box is matched against (usually several columns joined).
    fn search_text(&self) -> String;

    /// Case-insensitive substring match; only an empty filter matches everything.
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        filter.is_empty() || self.search_text().to_lowercase().contains(&filter)
    }
}

/// Records that can be ordered by a column.
pub trait Sortable {
    fn sort_key(&self, field: &str) -> SortKey;

    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        self.sort_key(field).compare(&other.sort_key(field))
    }
}

/// Comparable value of one cell. Blank cells sort first, then numbers, then text.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Empty,
    Number(f64),
    Text(String),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            SortKey::Empty
        } else {
            SortKey::Text(value.to_lowercase())
        }
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(SortKey::text).unwrap_or(SortKey::Empty)
    }

    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            SortKey::Empty
        } else {
            SortKey::Number(value)
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Empty => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Stable sort by field.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Indicator shown next to a sortable header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl Searchable for Row {
        fn search_text(&self) -> String {
            self.0.to_string()
        }
    }

    impl Sortable for Row {
        fn sort_key(&self, field: &str) -> SortKey {
            match field {
                "amount" => SortKey::number(self.1),
                _ => SortKey::text(self.0),
            }
        }
    }

    #[test]
    fn test_sort_key_ordering() {
        assert_eq!(SortKey::text("b").compare(&SortKey::text("A")), Ordering::Greater);
        assert_eq!(SortKey::number(10.0).compare(&SortKey::number(9.5)), Ordering::Greater);
        assert_eq!(SortKey::Empty.compare(&SortKey::number(0.0)), Ordering::Less);
        assert_eq!(SortKey::text("  ").compare(&SortKey::Empty), Ordering::Equal);
    }

    #[test]
    fn test_sort_list_numeric_and_text() {
        let mut rows = vec![Row("beta", 10.0), Row("Alpha", 2.0), Row("gamma", 100.0)];
        sort_list(&mut rows, "amount", true);
        assert_eq!(rows.iter().map(|r| r.1).collect::<Vec<_>>(), vec![2.0, 10.0, 100.0]);
        sort_list(&mut rows, "name", false);
        assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), vec!["gamma", "beta", "Alpha"]);
    }

    #[test]
    fn test_matches_filter_case_insensitive() {
        assert!(Row("Lagos Clinic", 0.0).matches_filter("LAGOS"));
        assert!(!Row("Abuja Lab", 0.0).matches_filter("lagos"));
        assert!(Row("Abuja Lab", 0.0).matches_filter(""));
    }

    #[test]
    fn test_matches_filter_keeps_whitespace() {
        assert!(Row("Ada Obi", 0.0).matches_filter("ada "));
        assert!(!Row("Adaeze", 0.0).matches_filter("ada "));
        assert!(!Row("Adaeze", 0.0).matches_filter("   "));
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "email", true), " ⇅");
    }
}
