pub mod api;
pub mod collection;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod notify;
pub mod number_format;
pub mod page_frame;
pub mod remote;

/// Placeholder for absent optional values.
pub const NOT_AVAILABLE: &str = "N/A";

/// `value ?? "N/A"`, also treating blank strings as absent.
pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(Some("Lagos")), "Lagos");
        assert_eq!(or_na(Some("  ")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }
}
