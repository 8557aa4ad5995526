use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::analytics::errors::AnalyticsError;
use crate::models::Transaction;

/// Headline figures for a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    /// Sum of all positive amounts.
    pub total_income: Decimal,
    /// Absolute sum of all negative amounts.
    pub total_expenses: Decimal,
    pub net_income: Decimal,
    pub monthly_avg_income: Decimal,
    pub monthly_avg_expenses: Decimal,
    /// Net income as a percentage of income, zero without income.
    pub savings_rate: Decimal
}

/// Adds `amount` to `total`, failing instead of panicking once the sum leaves
/// the range `Decimal` can represent.
pub(crate) fn accumulate(total: &mut Decimal, amount: Decimal, calculation: &'static str) -> Result<(), AnalyticsError> {
    *total = total.checked_add(amount).ok_or_else(|| AnalyticsError::overflow(calculation))?;
    Ok(())
}

/// Computes the headline metrics. Monthly averages divide by the number of
/// distinct months present (at least one), so an empty set yields all zeros.
///
/// # Errors
/// Returns `AnalyticsError::Overflow` if a total does not fit in a `Decimal`.
pub fn compute_metrics(transactions: &[Transaction]) -> Result<Metrics, AnalyticsError> {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut months = HashSet::new();

    for transaction in transactions {
        if transaction.amount > Decimal::ZERO {
            accumulate(&mut total_income, transaction.amount, "total income")?;
        } else if transaction.amount < Decimal::ZERO {
            accumulate(&mut total_expenses, transaction.amount, "total expenses")?;
        }

        months.insert(transaction.month);
    }

    let total_expenses = total_expenses.abs();
    let net_income = total_income.checked_sub(total_expenses)
        .ok_or_else(|| AnalyticsError::overflow("net income"))?;
    let month_count = Decimal::from(months.len().max(1));

    let savings_rate = if total_income > Decimal::ZERO {
        net_income.checked_div(total_income)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| AnalyticsError::overflow("savings rate"))?
    } else {
        Decimal::ZERO
    };

    Ok(Metrics {
        total_income,
        total_expenses,
        net_income,
        monthly_avg_income: total_income / month_count,
        monthly_avg_expenses: total_expenses / month_count,
        savings_rate
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryStatistics {
    pub count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub average_amount: Option<Decimal>,
    /// Most negative amount, if any transaction is negative.
    pub largest_expense: Option<Decimal>
}

pub fn summary_statistics(transactions: &[Transaction]) -> Result<SummaryStatistics, AnalyticsError> {
    let count = transactions.len();
    let mut total = Decimal::ZERO;

    for transaction in transactions {
        accumulate(&mut total, transaction.amount, "average amount")?;
    }

    Ok(SummaryStatistics {
        count,
        first_date: transactions.iter().map(|transaction| transaction.date).min(),
        last_date: transactions.iter().map(|transaction| transaction.date).max(),
        average_amount: (count > 0).then(|| total / Decimal::from(count)),
        largest_expense: transactions.iter()
            .map(|transaction| transaction.amount)
            .filter(|amount| *amount < Decimal::ZERO)
            .min()
    })
}
