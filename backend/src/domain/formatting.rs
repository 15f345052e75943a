//! Money formatting for anything shown to the accountant.

/// Format with a currency symbol, thousands separators and two decimals:
/// `1234.5` becomes `$1,234.50`, `-5.0` becomes `-$5.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(85.0, "$"), "$85.00");
        assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
        assert_eq!(format_currency(1_000_000.0, "$"), "$1,000,000.00");
        assert_eq!(format_currency(-5.0, "$"), "-$5.00");
        assert_eq!(format_currency(12.3, "€"), "€12.30");
    }

    #[test]
    fn test_tiny_negative_is_not_signed() {
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
    }
}
