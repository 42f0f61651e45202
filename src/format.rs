//! Currency formatting for displayed amounts.
//!
//! Every amount shown anywhere in the client goes through [`format_currency`]:
//! a fixed rupee symbol, exactly two fraction digits, and Indian-system digit
//! grouping (last three digits, then groups of two).

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Format a decimal amount as displayed currency, e.g. `₹12,34,567.50`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), format!("{:0<2}", frac_part)),
        None => (text, "00".to_string()),
    };

    format!(
        "{}{}{}.{}",
        CURRENCY_SYMBOL,
        sign,
        group_indian(&int_part),
        frac_part
    )
}

/// Indian digit grouping: `1234567` becomes `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);

    let mut out = groups
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join(",");
    out.push(',');
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn always_two_fraction_digits() {
        assert_eq!(format_currency(dec!(0)), "₹0.00");
        assert_eq!(format_currency(dec!(1000)), "₹1,000.00");
        assert_eq!(format_currency(dec!(99.5)), "₹99.50");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_currency(dec!(1234567.5)), "₹12,34,567.50");
        assert_eq!(format_currency(dec!(100000)), "₹1,00,000.00");
        assert_eq!(format_currency(dec!(12345)), "₹12,345.00");
        assert_eq!(format_currency(dec!(123)), "₹123.00");
    }

    #[test]
    fn negative_amounts_keep_symbol_first() {
        assert_eq!(format_currency(dec!(-1000)), "₹-1,000.00");
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(format_currency(dec!(10.005)), "₹10.01");
        assert_eq!(format_currency(dec!(-10.005)), "₹-10.01");
    }

    #[test]
    fn idempotent_under_reformatting() {
        for raw in [dec!(0), dec!(12.3), dec!(1234567.891), dec!(-45000)] {
            let first = format_currency(raw);
            let stripped: String = first
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            let reparsed: Decimal = stripped.parse().unwrap();
            assert_eq!(format_currency(reparsed), first);
        }
    }
}
