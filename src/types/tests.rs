use super::{parse_amount, parse_date, Currency, MonthKey, Percent, WeekKey};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_currency_renders_two_decimals_with_thousands_separators() -> Result<()> {
    let test_cases = vec![
        ("0", "0.00"),
        ("5", "5.00"),
        ("999.999", "1,000.00"),
        ("1234.5", "1,234.50"),
        ("10500", "10,500.00"),
        ("1234567.891", "1,234,567.89"),
        ("-42200.005", "-42,200.01"),
        ("-0.001", "0.00"),
        ("100000", "100,000.00"),
    ];

    for (input, expected_output) in test_cases {
        assert_eq!(Currency(Decimal::from_str(input)?).to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_percent_renders_two_decimals() -> Result<()> {
    assert_eq!(Percent(Decimal::from_str("12.5")?).to_string(), "12.50%");
    assert_eq!(Percent(Decimal::from_str("44.1602")?).to_string(), "44.16%");
    assert_eq!(Percent(Decimal::ZERO).to_string(), "0.00%");

    Ok(())
}

#[test]
fn test_amount_successfully_parses_bank_formats() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.0"),
        ("-45.20", "-45.20"),
        ("  100  ", "100"),
        ("+12.5", "12.5"),
        ("$1,200.50", "1200.50"),
        ("-$75", "-75"),
        ("₹10,000", "10000"),
    ];

    for (input, expected_output) in test_cases {
        assert_eq!(parse_amount(input)?, Decimal::from_str(expected_output)?);
    }

    Ok(())
}

#[test]
fn test_amount_fails_to_parse_invalid_strings() {
    assert!(parse_amount("").is_err());
    assert!(parse_amount("   ").is_err());
    assert!(parse_amount("abc").is_err());
    assert!(parse_amount("1.2.3").is_err());
    assert!(parse_amount("--5").is_err());
    assert!(parse_amount("$").is_err());
}

#[test]
fn test_date_parses_supported_layouts() -> Result<()> {
    let expected = NaiveDate::from_ymd_opt(2024, 3, 7).ok_or_else(|| anyhow::anyhow!("invalid date"))?;

    assert_eq!(parse_date("2024-03-07")?, expected);
    assert_eq!(parse_date(" 2024/03/07 ")?, expected);
    assert_eq!(parse_date("03/07/2024")?, expected);
    assert_eq!(parse_date("2024-03-07 14:30:00")?, expected);
    assert!(parse_date("07.03.2024").is_err());
    assert!(parse_date("").is_err());

    Ok(())
}

#[test]
fn test_month_key_groups_by_calendar_month() -> Result<()> {
    let key = MonthKey::from_date(parse_date("2024-01-31")?);

    assert_eq!(key, MonthKey::from_date(parse_date("2024-01-01")?));
    assert_ne!(key, MonthKey::from_date(parse_date("2024-02-01")?));
    assert_eq!(key.to_string(), "2024-01");
    assert!(key < MonthKey::from_date(parse_date("2024-02-01")?));

    Ok(())
}

#[test]
fn test_week_key_starts_on_monday() -> Result<()> {
    // 2024-01-07 is a Sunday, 2024-01-08 a Monday
    let sunday = WeekKey::from_date(parse_date("2024-01-07")?);
    let monday = WeekKey::from_date(parse_date("2024-01-08")?);

    assert_eq!(sunday.to_string(), "2024-01-01/2024-01-07");
    assert_eq!(monday.to_string(), "2024-01-08/2024-01-14");
    assert_eq!(WeekKey::from_date(parse_date("2024-01-03")?), sunday);

    Ok(())
}
