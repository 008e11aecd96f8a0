//! Display formatting helpers.

/// Format a dollar amount with thousands separators, e.g. `$1,234.50`.
///
/// Negative amounts carry the sign ahead of the symbol: `-$12.00`.
pub fn usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();
    let rem = cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{rem:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(usd(1234.5), "$1,234.50");
        assert_eq!(usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(usd(999.99), "$999.99");
    }

    #[test]
    fn keeps_two_decimal_places() {
        assert_eq!(usd(0.0), "$0.00");
        assert_eq!(usd(850.5), "$850.50");
        assert_eq!(usd(12.0), "$12.00");
    }

    #[test]
    fn negative_amounts_sign_before_the_symbol() {
        assert_eq!(usd(-12.0), "-$12.00");
        assert_eq!(usd(-1234.5), "-$1,234.50");
    }
}
