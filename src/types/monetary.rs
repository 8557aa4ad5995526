use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;
const CURRENCY_SYMBOLS: [char; 4] = ['$', '₹', '€', '£'];

/// Display wrapper rendering an amount with two decimal places and
/// thousands separators, e.g. `-1,234,567.89`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Currency(pub Decimal);

/// Display wrapper rendering a percentage with two decimal places, e.g. `12.50%`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Percent(pub Decimal);

fn to_display_scale(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DECIMAL_PLACES);

    //NOTE: rust_decimal keeps the sign on zero, "-0.00" is not something a user wants to see
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    rounded
}

impl Display for Currency {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = to_display_scale(self.0);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let digits = rounded.abs().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);

        for (index, digit) in integer.chars().enumerate() {
            if index > 0 && (integer.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(formatter, "{sign}{grouped}.{fraction}")
    }
}

impl Display for Percent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}%", to_display_scale(self.0))
    }
}

/// Parses a signed amount as it appears in bank exports.
///
/// Surrounding whitespace, a leading currency symbol and thousands separators
/// are tolerated, so `"$1,200.50"`, `"-45.2"` and `" 100 "` are all accepted.
pub fn parse_amount(value: &str) -> Result<Decimal, MonetaryError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
    }

    let (sign, unsigned) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value.strip_prefix('+').unwrap_or(value))
    };

    let cleaned: String = unsigned
        .trim_start_matches(|c| CURRENCY_SYMBOLS.contains(&c))
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() || cleaned.starts_with('-') || cleaned.starts_with('+') {
        return Err(MonetaryError::InvalidFormat(format!("Value '{value}' is not a number")));
    }

    Ok(Decimal::from_str(&format!("{sign}{cleaned}"))?)
}
