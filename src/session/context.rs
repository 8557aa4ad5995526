use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::{NetWorthEntry, Transaction, ValidationError};

/// State that lives for one user session: the current transaction set and
/// the net-worth entries recorded so far.
///
/// The transaction set is only ever replaced wholesale; net-worth entries are
/// append-only until the session is cleared.
#[derive(Debug, Clone, Default)]
pub struct Session {
    transactions: Option<Vec<Transaction>>,
    net_worth: Vec<NetWorthEntry>
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        info!("Session now holds {} transactions", transactions.len());
        self.transactions = Some(transactions);
    }

    pub fn has_transactions(&self) -> bool {
        self.transactions.is_some()
    }

    /// The loaded transactions, or an empty slice before anything was loaded.
    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.as_deref().unwrap_or_default()
    }

    /// Drops both the transactions and the net-worth history.
    pub fn clear(&mut self) {
        debug!("Clearing session");
        self.transactions = None;
        self.net_worth.clear();
    }

    /// Appends a net-worth snapshot.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidAmount` if assets or liabilities are negative.
    pub fn record_net_worth(&mut self, date: NaiveDate, assets: Decimal, liabilities: Decimal) -> Result<&NetWorthEntry, ValidationError> {
        let entry = NetWorthEntry::new(date, assets, liabilities)?;
        Ok(self.push_net_worth(entry))
    }

    pub fn push_net_worth(&mut self, entry: NetWorthEntry) -> &NetWorthEntry {
        debug!("Recorded net worth {} on {}", entry.net_worth, entry.date);
        self.net_worth.push(entry);
        &self.net_worth[self.net_worth.len() - 1]
    }

    /// Net-worth entries in date order; entries sharing a date keep insertion order.
    pub fn net_worth_history(&self) -> Vec<&NetWorthEntry> {
        let mut history: Vec<&NetWorthEntry> = self.net_worth.iter().collect();
        history.sort_by_key(|entry| entry.date);
        history
    }
}
