use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::analytics::errors::AnalyticsError;
use crate::analytics::metrics::accumulate;
use crate::models::{Transaction, TransactionType};
use crate::types::{MonthKey, WeekKey};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyCashFlow {
    pub month: MonthKey,
    pub income: Decimal,
    pub expenses: Decimal,
    pub net: Decimal
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekdaySpending {
    pub weekday: Weekday,
    pub total: Decimal,
    pub count: usize,
    pub average: Decimal
}

impl WeekdaySpending {
    pub fn name(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday"
        }
    }
}

fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    transactions.iter().filter(|transaction| transaction.is_expense())
}

fn sum_by<K, F>(transactions: &[Transaction], calculation: &'static str, key: F) -> Result<BTreeMap<K, Decimal>, AnalyticsError>
where
    K: Ord,
    F: Fn(&Transaction) -> K,
{
    let mut groups = BTreeMap::new();

    for transaction in expenses(transactions) {
        accumulate(groups.entry(key(transaction)).or_insert(Decimal::ZERO), transaction.amount, calculation)?;
    }

    Ok(groups.into_iter().map(|(key, total)| (key, total.abs())).collect())
}

/// Income and expenses per month, grouped by each transaction's type label.
pub fn cash_flow(transactions: &[Transaction]) -> Result<Vec<MonthlyCashFlow>, AnalyticsError> {
    let mut months: BTreeMap<MonthKey, (Decimal, Decimal)> = BTreeMap::new();

    for transaction in transactions {
        let (income, expenses) = months.entry(transaction.month).or_default();

        match transaction.transaction_type {
            TransactionType::Income => accumulate(income, transaction.amount, "monthly income")?,
            TransactionType::Expense => accumulate(expenses, transaction.amount, "monthly expenses")?
        }
    }

    months.into_iter()
        .map(|(month, (income, expenses))| {
            let expenses = expenses.abs();
            income.checked_sub(expenses)
                .map(|net| MonthlyCashFlow { month, income, expenses, net })
                .ok_or_else(|| AnalyticsError::overflow("monthly net"))
        })
        .collect()
}

/// Absolute spending per category, over expense-typed transactions.
pub fn expense_by_category(transactions: &[Transaction]) -> Result<BTreeMap<String, Decimal>, AnalyticsError> {
    sum_by(transactions, "category spending", |transaction| transaction.category.clone())
}

/// The `limit` largest expense categories, largest first, ties by name.
pub fn top_expense_categories(transactions: &[Transaction], limit: usize) -> Result<Vec<(String, Decimal)>, AnalyticsError> {
    let mut categories: Vec<(String, Decimal)> = expense_by_category(transactions)?.into_iter().collect();

    categories.sort_by(|(left_name, left), (right_name, right)| match right.cmp(left) {
        Ordering::Equal => left_name.cmp(right_name),
        ordering => ordering
    });
    categories.truncate(limit);

    Ok(categories)
}

/// Absolute spending per Monday-start week.
pub fn weekly_expenses(transactions: &[Transaction]) -> Result<BTreeMap<WeekKey, Decimal>, AnalyticsError> {
    sum_by(transactions, "weekly spending", |transaction| WeekKey::from_date(transaction.date))
}

/// Absolute spending per calendar date.
pub fn daily_expenses(transactions: &[Transaction]) -> Result<BTreeMap<NaiveDate, Decimal>, AnalyticsError> {
    sum_by(transactions, "daily spending", |transaction| transaction.date)
}

/// Spending per day of the week, always Monday through Sunday; days without
/// expenses are present with zeros.
pub fn weekday_pattern(transactions: &[Transaction]) -> Result<[WeekdaySpending; 7], AnalyticsError> {
    let mut pattern = WEEK.map(|weekday| WeekdaySpending {
        weekday,
        total: Decimal::ZERO,
        count: 0,
        average: Decimal::ZERO
    });

    for transaction in expenses(transactions) {
        let slot = &mut pattern[transaction.date.weekday().num_days_from_monday() as usize];
        accumulate(&mut slot.total, transaction.amount, "weekday spending")?;
        slot.count += 1;
    }

    for slot in &mut pattern {
        slot.total = slot.total.abs();

        if slot.count > 0 {
            slot.average = slot.total / Decimal::from(slot.count);
        }
    }

    Ok(pattern)
}
