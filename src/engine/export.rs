use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

use crate::models::{NetWorthEntry, Transaction, TransactionType};
use crate::portfolio::PortfolioAnalysis;
use crate::types::MonthKey;

const EXPORT_DECIMAL_PLACES: u32 = 2;

const TRANSACTION_HEADER: [&str; 6] = ["Date", "Description", "Amount", "Category", "Type", "Month"];
const ALLOCATION_HEADER: [&str; 6] = ["Asset", "Value", "Percentage", "Risk", "Over Threshold", "Suggested Percentage"];
const NET_WORTH_HEADER: [&str; 4] = ["Date", "Assets", "Liabilities", "Net Worth"];

/// Column layout of the processed transaction file. It is a superset of the
/// upload layout, so an exported file can be imported again as-is.
#[derive(Debug, Serialize)]
struct TransactionRow<'a> {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: Decimal,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Type")]
    transaction_type: TransactionType,
    #[serde(rename = "Month")]
    month: MonthKey
}

#[derive(Debug, Serialize)]
struct AllocationExportRow<'a> {
    #[serde(rename = "Asset")]
    asset: &'a str,
    #[serde(rename = "Value")]
    value: Decimal,
    #[serde(rename = "Percentage")]
    percentage: Decimal,
    #[serde(rename = "Risk")]
    risk: String,
    #[serde(rename = "Over Threshold")]
    over_threshold: bool,
    #[serde(rename = "Suggested Percentage")]
    suggested_percentage: Decimal
}

/// Writes processed transactions as `Date,Description,Amount,Category,Type,Month`.
pub fn write_transactions<W: Write>(writer: W, transactions: &[Transaction]) -> Result<(), csv::Error> {
    let mut writer = writer_with_header(writer, &TRANSACTION_HEADER)?;

    for transaction in transactions {
        writer.serialize(TransactionRow {
            date: transaction.date,
            description: &transaction.description,
            amount: transaction.amount,
            category: &transaction.category,
            transaction_type: transaction.transaction_type,
            month: transaction.month
        })?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes the analyzed allocation table, largest share first.
pub fn write_allocation<W: Write>(writer: W, analysis: &PortfolioAnalysis) -> Result<(), csv::Error> {
    let mut writer = writer_with_header(writer, &ALLOCATION_HEADER)?;

    for row in &analysis.rows {
        writer.serialize(AllocationExportRow {
            asset: &row.allocation.asset,
            value: row.allocation.value,
            percentage: row.allocation.percentage.round_dp(EXPORT_DECIMAL_PLACES).normalize(),
            risk: row.allocation.risk.to_string(),
            over_threshold: row.over_threshold,
            suggested_percentage: row.suggested_percentage.round_dp(EXPORT_DECIMAL_PLACES).normalize()
        })?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes net-worth entries as `Date,Assets,Liabilities,Net Worth`.
pub fn write_net_worth<'a, W, I>(writer: W, entries: I) -> Result<(), csv::Error>
where
    W: Write,
    I: IntoIterator<Item = &'a NetWorthEntry>,
{
    let mut writer = writer_with_header(writer, &NET_WORTH_HEADER)?;

    for entry in entries {
        writer.serialize(entry)?;
    }

    writer.flush()?;

    Ok(())
}

//NOTE: The header is written up front so that an empty export is still a valid, re-importable file
fn writer_with_header<W: Write>(writer: W, header: &[&str]) -> Result<csv::Writer<W>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(header)?;

    Ok(writer)
}
