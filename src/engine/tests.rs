use super::{generate_sample, write_allocation, write_net_worth, write_transactions, ImportEngine};

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::io::{Cursor, Write};
use std::path::Path;
use std::str::FromStr;

use tempfile::NamedTempFile;

use crate::categorizer::Categorizer;
use crate::config::ImportPolicy;
use crate::models::{ImportError, NetWorthEntry, PortfolioAsset, TransactionType};
use crate::portfolio::{analyze, RiskTable};

fn engine(policy: ImportPolicy) -> ImportEngine {
    ImportEngine::new(Categorizer::default(), policy)
}

fn reader(contents: &str) -> Cursor<Vec<u8>> {
    Cursor::new(contents.as_bytes().to_vec())
}

fn create_temporary_csv(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{contents}")?;
    Ok(file)
}

#[tokio::test]
async fn test_engine_labels_uploaded_rows_in_file_order() -> Result<()> {
    let csv = "Date,Description,Amount\n\
               2024-01-03,Monthly Salary,\"3,000.00\"\n\
               2024-01-05, Walmart Supercenter ,-82.15\n\
               2024-01-09,Netflix,-$15.99\n";
    let file = create_temporary_csv(csv)?;

    let outcome = engine(ImportPolicy::Skip).run(file.path()).await?;

    assert!(outcome.skipped.is_empty());
    assert_eq!(outcome.transactions.len(), 3);

    let salary = &outcome.transactions[0];
    assert_eq!(salary.category, "Income");
    assert_eq!(salary.transaction_type, TransactionType::Income);
    assert_eq!(salary.amount, Decimal::from(3000));

    let groceries = &outcome.transactions[1];
    assert_eq!(groceries.description, "Walmart Supercenter");
    assert_eq!(groceries.category, "Groceries");
    assert_eq!(groceries.amount, Decimal::from_str("-82.15")?);

    assert_eq!(outcome.transactions[2].category, "Entertainment");
    assert_eq!(outcome.transactions[2].month.to_string(), "2024-01");

    Ok(())
}

#[tokio::test]
async fn test_engine_keeps_supplied_labels() -> Result<()> {
    let csv = "Date,Description,Amount,Category,Type\n\
               2024-02-01,Walmart,-40.00,Gifts,Expense\n\
               2024-02-02,Walmart,-12.00,,Expense\n";

    let outcome = engine(ImportPolicy::Skip).run_reader(reader(csv)).await?;

    assert_eq!(outcome.transactions[0].category, "Gifts");
    // a blank category falls back to the keyword rules
    assert_eq!(outcome.transactions[1].category, "Groceries");

    Ok(())
}

#[tokio::test]
async fn test_engine_skips_malformed_rows_under_skip_policy() -> Result<()> {
    let csv = "Date,Description,Amount\n\
               2024-03-01,Shell Gas,-30.00\n\
               2024-03-02,Coffee,abc\n\
               not-a-date,Uber,-9.00\n\
               2024-03-04,Uber,-12.00\n";

    let outcome = engine(ImportPolicy::Skip).run_reader(reader(csv)).await?;

    assert_eq!(outcome.transactions.len(), 2);
    assert_eq!(outcome.skipped.len(), 2);
    assert!(matches!(outcome.skipped[0], ImportError::MalformedRow { line: 3, .. }));
    assert!(matches!(outcome.skipped[1], ImportError::MalformedRow { line: 4, .. }));
    assert!(outcome.transactions.iter().all(|transaction| transaction.category == "Transportation"));

    Ok(())
}

#[tokio::test]
async fn test_engine_stops_at_first_malformed_row_under_abort_policy() -> Result<()> {
    let csv = "Date,Description,Amount\n\
               2024-03-01,Shell Gas,-30.00\n\
               2024-03-02,Coffee,\n\
               2024-03-04,Uber,-12.00\n";

    let result = engine(ImportPolicy::Abort).run_reader(reader(csv)).await;

    assert!(matches!(result, Err(ImportError::MalformedRow { line: 3, .. })));

    Ok(())
}

#[tokio::test]
async fn test_engine_rejects_missing_required_column() -> Result<()> {
    let csv = "Date,Amount\n2024-03-01,-30.00\n";

    let result = engine(ImportPolicy::Skip).run_reader(reader(csv)).await;

    assert!(matches!(result, Err(ImportError::MissingColumn("Description"))));

    Ok(())
}

#[tokio::test]
async fn test_engine_reports_unreadable_file() -> Result<()> {
    let result = engine(ImportPolicy::Skip).run(Path::new("does-not-exist.csv")).await;

    assert!(matches!(result, Err(ImportError::Io(_))));

    Ok(())
}

#[tokio::test]
async fn test_header_only_file_imports_nothing() -> Result<()> {
    let outcome = engine(ImportPolicy::Abort).run_reader(reader("Date,Description,Amount\n")).await?;

    assert!(outcome.transactions.is_empty());
    assert!(outcome.skipped.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_exported_transactions_import_unchanged() -> Result<()> {
    let transactions = generate_sample(2023, 7);
    let mut exported = Vec::new();
    write_transactions(&mut exported, &transactions)?;

    let first_line = String::from_utf8(exported.clone())?.lines().next().map(str::to_string);
    assert_eq!(first_line.as_deref(), Some("Date,Description,Amount,Category,Type,Month"));

    let outcome = engine(ImportPolicy::Abort).run_reader(Cursor::new(exported)).await?;

    assert_eq!(outcome.transactions, transactions);

    Ok(())
}

#[test]
fn test_empty_export_still_has_header() -> Result<()> {
    let mut exported = Vec::new();
    write_transactions(&mut exported, &[])?;

    assert_eq!(String::from_utf8(exported)?, "Date,Description,Amount,Category,Type,Month\n");

    Ok(())
}

#[test]
fn test_sample_is_deterministic_per_seed() {
    assert_eq!(generate_sample(2024, 42), generate_sample(2024, 42));
    assert_ne!(generate_sample(2024, 42), generate_sample(2024, 43));
}

#[test]
fn test_sample_stays_within_year_and_sign_rules() {
    let transactions = generate_sample(2024, 42);

    assert!(!transactions.is_empty());
    // at most three per day in a leap year
    assert!(transactions.len() <= 366 * 3);
    assert!(transactions.windows(2).all(|pair| pair[0].date <= pair[1].date));

    for transaction in &transactions {
        assert_eq!(transaction.date.year(), 2024);
        assert_eq!(transaction.description, format!("{} transaction", transaction.category));
        assert_eq!(transaction.amount.round_dp(2), transaction.amount);

        match transaction.transaction_type {
            TransactionType::Expense => assert!(transaction.amount < Decimal::ZERO),
            TransactionType::Income => assert!(transaction.amount > Decimal::ZERO)
        }
    }

    assert!(transactions.iter().any(|transaction| transaction.is_income()));
    assert!(transactions.iter().filter(|transaction| transaction.is_expense()).count() > transactions.len() / 2);
}

#[test]
fn test_allocation_export_rounds_percentages() -> Result<()> {
    let assets = vec![
        PortfolioAsset::new("Stocks", Decimal::from(2)),
        PortfolioAsset::new("Bonds", Decimal::from(1))
    ];
    let analysis = analyze(&assets, Decimal::from(50), &RiskTable::default())?;

    let mut exported = Vec::new();
    write_allocation(&mut exported, &analysis)?;
    let exported = String::from_utf8(exported)?;
    let lines: Vec<&str> = exported.lines().collect();

    assert_eq!(lines[0], "Asset,Value,Percentage,Risk,Over Threshold,Suggested Percentage");
    assert_eq!(lines[1], "Stocks,2,66.67,High,true,50");
    assert_eq!(lines[2], "Bonds,1,33.33,Low,false,33.33");

    Ok(())
}

#[test]
fn test_net_worth_export_lists_entries() -> Result<()> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or_else(|| anyhow::anyhow!("invalid date"))?;
    let entry = NetWorthEntry::new(date, Decimal::from(10_000), Decimal::from(2_500))?;

    let mut exported = Vec::new();
    write_net_worth(&mut exported, [&entry])?;

    assert_eq!(String::from_utf8(exported)?, "Date,Assets,Liabilities,Net Worth\n2024-01-31,10000,2500,7500\n");

    Ok(())
}
