use super::{ConfigError, ImportPolicy, Settings};

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

use crate::models::{RiskLevel, TransactionType};

fn settings_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{contents}")?;
    Ok(file)
}

#[test]
fn test_defaults_match_built_in_tables() {
    let settings = Settings::default();

    assert_eq!(settings.currency_symbol, "$");
    assert_eq!(settings.import_policy, ImportPolicy::Skip);
    assert_eq!(settings.category_rules.len(), 10);
    assert_eq!(settings.tax_slabs.len(), 3);
    assert_eq!(settings.concentration_threshold, Decimal::from(20));
    assert_eq!(settings.top_categories, 5);
    assert_eq!(settings.risk_table().lookup("Bonds"), RiskLevel::Low);
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() -> Result<()> {
    let file = settings_file(r#"{ "currency_symbol": "₹", "import_policy": "abort", "concentration_threshold": 35 }"#)?;
    let settings = Settings::load(file.path())?;

    assert_eq!(settings.currency_symbol, "₹");
    assert_eq!(settings.import_policy, ImportPolicy::Abort);
    assert_eq!(settings.concentration_threshold, Decimal::from(35));
    assert_eq!(settings.category_rules, Settings::default().category_rules);

    Ok(())
}

#[test]
fn test_custom_rules_and_strict_mode_flow_into_categorizer() -> Result<()> {
    let file = settings_file(r#"{
        "income_requires_positive_amount": true,
        "category_rules": [
            { "category": "Rent", "type": "Expense", "keywords": ["landlord"] },
            { "category": "Interest", "type": "Income", "keywords": ["interest"] }
        ]
    }"#)?;
    let categorizer = Settings::load(file.path())?.categorizer();

    assert_eq!(categorizer.categorize("LANDLORD PMT", Decimal::from(-900)), ("Rent", TransactionType::Expense));
    assert_eq!(categorizer.categorize("Card interest", Decimal::from(-9)), ("Other", TransactionType::Expense));
    assert_eq!(categorizer.categorize("Savings interest", Decimal::from(9)), ("Interest", TransactionType::Income));
    // default groups are replaced, not merged
    assert_eq!(categorizer.categorize("Walmart", Decimal::from(-9)), ("Other", TransactionType::Expense));

    Ok(())
}

#[test]
fn test_risk_levels_and_tax_slabs_can_be_overridden() -> Result<()> {
    let file = settings_file(r#"{
        "risk_levels": { "Startup Equity": "Very High" },
        "tax_slabs": [ { "lower": 0, "upper": null, "rate": 15 } ]
    }"#)?;
    let settings = Settings::load(file.path())?;

    assert_eq!(settings.risk_table().lookup("startup equity"), RiskLevel::VeryHigh);
    assert_eq!(settings.risk_table().lookup("Stocks"), RiskLevel::Unknown);
    assert_eq!(settings.tax_slabs.len(), 1);
    assert_eq!(settings.tax_slabs[0].rate, Decimal::from(15));

    Ok(())
}

#[test]
fn test_load_reports_missing_and_invalid_files() -> Result<()> {
    let missing = Settings::load(Path::new("does-not-exist.json"));
    assert!(matches!(missing, Err(ConfigError::Io { .. })));

    let file = settings_file("{ not json")?;
    assert!(matches!(Settings::load(file.path()), Err(ConfigError::Parse { .. })));

    assert_eq!(Settings::load_or_default(None)?, Settings::default());

    Ok(())
}
