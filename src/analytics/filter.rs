use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};

/// Optional criteria narrowing a transaction set. An unset criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    /// Inclusive lower bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub to: Option<NaiveDate>,
    pub transaction_type: Option<TransactionType>,
    pub category: Option<String>,
    /// Minimum absolute amount.
    pub min_amount: Option<Decimal>
}

impl TransactionFilter {
    pub fn between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self {
            from,
            to,
            ..Self::default()
        }
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.from.is_none_or(|from| transaction.date >= from)
            && self.to.is_none_or(|to| transaction.date <= to)
            && self.transaction_type.is_none_or(|kind| transaction.transaction_type == kind)
            && self.category.as_ref().is_none_or(|category| &transaction.category == category)
            && self.min_amount.is_none_or(|minimum| transaction.amount.abs() >= minimum)
    }

    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        transactions.iter()
            .filter(|transaction| self.matches(transaction))
            .cloned()
            .collect()
    }
}
