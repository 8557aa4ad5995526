use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::categorizer::rules::{default_rules, CategoryRule, OTHER_EXPENSE, OTHER_INCOME};
use crate::models::{ImportError, RawTransaction, Transaction, TransactionType};
use crate::types::{parse_amount, parse_date, LineNumber};

/// First line of data in a CSV file, after the header.
pub const FIRST_DATA_LINE: LineNumber = 2;

/// Keyword-based transaction classifier.
///
/// Rules are evaluated in order and the first match wins. Income rules match
/// regardless of the amount's sign unless `income_requires_positive_amount`
/// is set; expense rules only ever match negative amounts.
#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    income_requires_positive_amount: bool
}

impl Default for Categorizer {
    fn default() -> Self {
        Self::new(default_rules(), false)
    }
}

impl Categorizer {
    pub fn new(rules: Vec<CategoryRule>, income_requires_positive_amount: bool) -> Self {
        Self {
            rules: rules.into_iter().map(CategoryRule::normalized).collect(),
            income_requires_positive_amount
        }
    }

    /// Maps a description and signed amount to a `(category, type)` pair.
    pub fn categorize(&self, description: &str, amount: Decimal) -> (&str, TransactionType) {
        let description = description.to_lowercase();
        let is_negative = amount < Decimal::ZERO;

        for rule in &self.rules {
            let applies = match rule.transaction_type {
                TransactionType::Income => !self.income_requires_positive_amount || amount > Decimal::ZERO,
                TransactionType::Expense => is_negative
            };

            if applies && rule.matches(&description) {
                return (rule.category.as_str(), rule.transaction_type);
            }
        }

        if is_negative {
            (OTHER_EXPENSE, TransactionType::Expense)
        } else {
            (OTHER_INCOME, TransactionType::Income)
        }
    }

    /// Parses and labels one uploaded row.
    ///
    /// A row that already carries both a category and a recognizable type is
    /// passed through unchanged; otherwise it is categorized from its
    /// description and amount.
    ///
    /// # Errors
    /// Returns `ImportError::MalformedRow` if the date or amount is missing or
    /// cannot be parsed.
    pub fn label(&self, raw: RawTransaction, line: LineNumber) -> Result<Transaction, ImportError> {
        let date = non_empty(raw.date.as_deref())
            .ok_or_else(|| ImportError::missing_field(line, "Date"))?;
        let date = parse_date(date).map_err(|error| ImportError::invalid_field(line, "Date", error))?;

        let amount = non_empty(raw.amount.as_deref())
            .ok_or_else(|| ImportError::missing_field(line, "Amount"))?;
        let amount = parse_amount(amount).map_err(|error| ImportError::invalid_field(line, "Amount", error))?;

        let description = raw.description.as_deref().map(str::trim).unwrap_or_default();
        let supplied_category = non_empty(raw.category.as_deref());
        let supplied_type = non_empty(raw.transaction_type.as_deref()).and_then(|value| {
            TransactionType::from_str(value)
                .inspect_err(|error| warn!("Line [{line}]: {error}, categorizing from description"))
                .ok()
        });

        let transaction = match (supplied_category, supplied_type) {
            (Some(category), Some(transaction_type)) => {
                Transaction::new(date, description, amount, category, transaction_type)
            }
            _ => {
                let (category, transaction_type) = self.categorize(description, amount);
                debug!("Line [{line}]: '{description}' categorized as [{category}]:[{transaction_type}]");
                Transaction::new(date, description, amount, category, transaction_type)
            }
        };

        Ok(transaction)
    }

    /// Labels a batch of rows, keeping one result per row so the caller can
    /// decide whether a malformed row should be skipped or abort the import.
    pub fn process_transactions<I>(&self, rows: I) -> Vec<Result<Transaction, ImportError>>
    where
        I: IntoIterator<Item = RawTransaction>,
    {
        rows.into_iter()
            .zip(FIRST_DATA_LINE..)
            .map(|(raw, line)| self.label(raw, line))
            .collect()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
