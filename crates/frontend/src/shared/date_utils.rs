/// Utilities for date and time formatting
///
/// Backends send RFC 3339 timestamps (`2024-03-15T14:02:26.123Z`) or plain
/// dates (`2024-03-15`). Anything unparseable is shown as received.
use chrono::{DateTime, NaiveDate};

/// "2024-03-15T14:02:26.123Z" -> "15 Mar 2024, 14:02"
pub fn format_datetime(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(dt) => dt.format("%d %b %Y, %H:%M").to_string(),
        Err(_) => format_date(value),
    }
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15 Mar 2024"
pub fn format_date(value: &str) -> String {
    let date_part = value.trim().split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// Optional timestamp, `"N/A"` when absent.
pub fn format_opt_date(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format_date(v),
        _ => super::NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15 Mar 2024, 14:02");
        assert_eq!(format_datetime("2024-12-31"), "31 Dec 2024");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_opt_date(None), "N/A");
    }
}
