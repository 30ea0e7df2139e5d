use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("no amount given")]
    Empty,
    #[error("invalid amount '{0}'")]
    Invalid(String),
}

/// Parse a user-typed GBP amount such as "£45,000" or "52 000.50".
///
/// Currency symbols, separators and whitespace are ignored. A minus sign
/// before the first digit is kept; the calculation treats negatives as zero.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let negative = input
        .chars()
        .take_while(|c| !c.is_ascii_digit())
        .any(|c| c == '-');
    let number: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if number.is_empty() {
        return Err(AmountError::Empty);
    }

    let amount =
        Decimal::from_str(&number).map_err(|_| AmountError::Invalid(input.trim().to_string()))?;
    Ok(if negative { -amount } else { amount })
}

/// Round to pence, halves away from zero.
pub fn to_pence(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Plain two-decimal amount, e.g. "39519.60"
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", to_pence(amount))
}

/// Display amount as "£39,519.60"
pub fn format_gbp(amount: Decimal) -> String {
    let rounded = to_pence(amount);
    let text = format!("{:.2}", rounded.abs());
    let (whole, pence) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}£{}.{}", sign, group_thousands(whole), pence)
}

/// Display a percentage as "79.04%"
pub fn format_pct(pct: Decimal) -> String {
    format!("{:.2}%", to_pence(pct))
}

/// Display a rate given as a fraction, e.g. 0.1273 as "12.73%"
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * dec!(100)).normalize())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_decorated_amounts() {
        assert_eq!(parse_amount("50000"), Ok(dec!(50000)));
        assert_eq!(parse_amount("£50,000"), Ok(dec!(50000)));
        assert_eq!(parse_amount(" 52 000.50 "), Ok(dec!(52000.50)));
        assert_eq!(parse_amount("GBP 1,234.5"), Ok(dec!(1234.5)));
    }

    #[test]
    fn parse_keeps_leading_minus() {
        assert_eq!(parse_amount("-500"), Ok(dec!(-500)));
        assert_eq!(parse_amount("-£500"), Ok(dec!(-500)));
        // a dash after the digits is just noise
        assert_eq!(parse_amount("500-"), Ok(dec!(500)));
    }

    #[test]
    fn parse_rejects_empty_and_malformed() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("£"), Err(AmountError::Empty));
        assert_eq!(
            parse_amount("1.2.3"),
            Err(AmountError::Invalid("1.2.3".to_string()))
        );
    }

    #[test]
    fn format_gbp_groups_thousands() {
        assert_eq!(format_gbp(dec!(0)), "£0.00");
        assert_eq!(format_gbp(dec!(999.5)), "£999.50");
        assert_eq!(format_gbp(dec!(39519.6)), "£39,519.60");
        assert_eq!(format_gbp(dec!(1234567.891)), "£1,234,567.89");
        assert_eq!(format_gbp(dec!(-12570)), "-£12,570.00");
    }

    #[test]
    fn format_rounds_half_away_from_zero() {
        assert_eq!(format_amount(dec!(0.125)), "0.13");
        assert_eq!(format_amount(dec!(6029.783333)), "6029.78");
        assert_eq!(format_pct(dec!(79.0392)), "79.04%");
    }

    #[test]
    fn format_rates() {
        assert_eq!(format_rate(dec!(0.08)), "8%");
        assert_eq!(format_rate(dec!(0.1273)), "12.73%");
        assert_eq!(format_rate(dec!(0.115)), "11.5%");
    }
}
