//! Decimal-string money helpers
//!
//! Prices travel on the wire as decimal strings ("149.99"). Arithmetic is
//! done on f64 and formatted back with two decimals.

/// Parse a decimal string into f64. Empty or malformed input yields None.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount with two decimal places, no currency sign
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a decimal string as display currency, e.g. "149.99" -> "$149.99".
/// Unparseable input renders as "$0.00".
pub fn format_currency(value: &str) -> String {
    format!("${:.2}", parse_decimal(value).unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("149.99"), Some(149.99));
        assert_eq!(parse_decimal(" 10 "), Some(10.0));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(20.0), "20.00");
        assert_eq!(format_amount(89.969999), "89.97");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("149.99"), "$149.99");
        assert_eq!(format_currency("bad"), "$0.00");
    }
}
