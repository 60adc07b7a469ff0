/// Case-insensitive comparison used for record statuses (`"Active"` vs `"active"`).
pub fn status_eq(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Turns a backend status (`"in_review"`, `"ACTIVE"`) into a label (`"In review"`, `"Active"`).
pub fn status_label(status: &str) -> String {
    let cleaned = status.trim().replace(['_', '-'], " ").to_lowercase();
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_eq() {
        assert!(status_eq("Active", "active"));
        assert!(status_eq(" inactive ", "INACTIVE"));
        assert!(!status_eq("active", "inactive"));
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("ACTIVE"), "Active");
        assert_eq!(status_label("in_review"), "In review");
        assert_eq!(status_label(""), "");
    }
}
