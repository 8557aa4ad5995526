mod errors;
mod net_worth;
mod portfolio;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use errors::{ensure_non_negative, ImportError, PortfolioError, ValidationError};
pub use net_worth::NetWorthEntry;
pub use portfolio::{AllocationRow, PortfolioAsset, RiskLevel};
pub use transaction::{RawTransaction, Transaction};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => formatter.write_str("Income"),
            TransactionType::Expense => formatter.write_str("Expense")
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(format!("Unknown transaction type '{other}'"))
        }
    }
}
