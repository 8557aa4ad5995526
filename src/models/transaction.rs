use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::TransactionType;
use crate::types::MonthKey;

/// Represents a single row from an uploaded CSV file.
///
/// Only `Date`, `Description` and `Amount` are expected; `Category` and `Type`
/// are optional and trigger automatic categorization when absent. Every field
/// is kept as raw text so that a bad value can be reported against its line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Amount", default)]
    pub amount: Option<String>,
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
    #[serde(rename = "Type", default)]
    pub transaction_type: Option<String>
}

/// A parsed, labeled transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Positive for money coming in, negative for money going out.
    pub amount: Decimal,
    pub category: String,
    pub transaction_type: TransactionType,
    /// Month the transaction falls into, used for grouping.
    pub month: MonthKey
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        transaction_type: TransactionType
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category: category.into(),
            transaction_type,
            month: MonthKey::from_date(date)
        }
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}
