//! Number formatting for money and counters.

/// 1234567.5 -> "1,234,567.50"
pub fn format_number(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", if negative { "-" } else { "" }, grouped, frac_part)
}

/// Amount with currency sign: `("NGN", 2500.0)` -> "₦2,500.00".
pub fn format_money(currency: &str, value: f64) -> String {
    let symbol = match currency.to_ascii_uppercase().as_str() {
        "NGN" => "₦",
        "USD" => "$",
        "GBP" => "£",
        "EUR" => "€",
        _ => "",
    };
    if symbol.is_empty() {
        format!("{} {}", currency, format_number(value))
    } else if value < 0.0 {
        format!("-{}{}", symbol, format_number(-value))
    } else {
        format!("{}{}", symbol, format_number(value))
    }
}

pub fn format_naira(value: f64) -> String {
    format_money("NGN", value)
}

/// 12345 -> "12,345"
pub fn format_count(value: u64) -> String {
    let s = format_number(value as f64);
    s.trim_end_matches(".00").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0.00");
        assert_eq!(format_number(999.0), "999.00");
        assert_eq!(format_number(1000.0), "1,000.00");
        assert_eq!(format_number(1234567.5), "1,234,567.50");
        assert_eq!(format_number(-1500.25), "-1,500.25");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("ngn", 2500.0), "₦2,500.00");
        assert_eq!(format_money("USD", -10.0), "-$10.00");
        assert_eq!(format_money("KES", 10.0), "KES 10.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(12345), "12,345");
        assert_eq!(format_count(7), "7");
    }
}
