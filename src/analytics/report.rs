use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::analytics::errors::AnalyticsError;
use crate::analytics::grouping::top_expense_categories;
use crate::analytics::metrics::{compute_metrics, Metrics};
use crate::models::Transaction;
use crate::types::{Currency, Percent};

/// Plain-text summary of a transaction set, suitable for saving as a `.txt` file.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub generated_at: NaiveDateTime,
    pub currency_symbol: String,
    pub metrics: Metrics,
    pub top_categories: Vec<(String, Decimal)>
}

impl SummaryReport {
    pub fn new(
        transactions: &[Transaction],
        top_categories: usize,
        currency_symbol: &str,
        generated_at: NaiveDateTime
    ) -> Result<Self, AnalyticsError> {
        Ok(Self {
            generated_at,
            currency_symbol: currency_symbol.to_string(),
            metrics: compute_metrics(transactions)?,
            top_categories: top_expense_categories(transactions, top_categories)?
        })
    }
}

impl Display for SummaryReport {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let symbol = &self.currency_symbol;

        writeln!(formatter, "Personal Finance Summary Report")?;
        writeln!(formatter, "Generated on: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(formatter)?;
        writeln!(formatter, "=== KEY METRICS ===")?;
        writeln!(formatter, "Total Income: {symbol}{}", Currency(self.metrics.total_income))?;
        writeln!(formatter, "Total Expenses: {symbol}{}", Currency(self.metrics.total_expenses))?;
        writeln!(formatter, "Net Income: {symbol}{}", Currency(self.metrics.net_income))?;
        writeln!(formatter, "Savings Rate: {}", Percent(self.metrics.savings_rate))?;
        writeln!(formatter)?;
        writeln!(formatter, "=== TOP EXPENSE CATEGORIES ===")?;

        for (category, amount) in &self.top_categories {
            writeln!(formatter, "{category}: {symbol}{}", Currency(*amount))?;
        }

        Ok(())
    }
}
