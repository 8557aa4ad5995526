use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::models::{Transaction, TransactionType};

const PROBABILITY_EXPENSE: f64 = 0.8;
/// Daily counts are drawn uniformly from `0..=3`, averaging 1.5 a day with a
/// hard cap instead of an unbounded Poisson tail.
const MAX_TRANSACTIONS_PER_DAY: u32 = 3;

const EXPENSE_CATEGORIES: [(&str, f64, f64); 8] = [
    ("Groceries", 50.0, 200.0),
    ("Utilities", 80.0, 150.0),
    ("Transportation", 30.0, 100.0),
    ("Entertainment", 20.0, 80.0),
    ("Restaurants", 25.0, 75.0),
    ("Shopping", 40.0, 200.0),
    ("Healthcare", 50.0, 300.0),
    ("Insurance", 100.0, 400.0),
];

const INCOME_CATEGORIES: [(&str, f64, f64); 3] = [
    ("Salary", 2000.0, 5000.0),
    ("Freelance", 200.0, 1000.0),
    ("Investment", 50.0, 500.0),
];

/// Builds a year of labeled demo transactions, sorted by date.
///
/// The same `year` and `seed` always produce the same data.
pub fn generate_sample(year: i32, seed: u64) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut transactions = Vec::new();

    let Some(mut date) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return transactions;
    };

    while date.year() == year {
        for _ in 0..rng.gen_range(0..=MAX_TRANSACTIONS_PER_DAY) {
            transactions.push(generate_transaction(&mut rng, date));
        }

        match date.checked_add_days(Days::new(1)) {
            Some(next) => date = next,
            None => break
        }
    }

    transactions
}

fn generate_transaction<R: Rng>(rng: &mut R, date: NaiveDate) -> Transaction {
    let transaction_type = if rng.gen_bool(PROBABILITY_EXPENSE) {
        TransactionType::Expense
    } else {
        TransactionType::Income
    };

    let categories: &[(&str, f64, f64)] = match transaction_type {
        TransactionType::Expense => &EXPENSE_CATEGORIES,
        TransactionType::Income => &INCOME_CATEGORIES
    };

    let &(category, low, high) = categories.choose(rng).unwrap_or(&categories[0]);
    let amount = generate_random_amount(rng, low, high);
    let amount = match transaction_type {
        TransactionType::Expense => -amount,
        TransactionType::Income => amount
    };

    Transaction::new(date, format!("{category} transaction"), amount, category, transaction_type)
}

fn generate_random_amount<R: Rng>(rng: &mut R, low: f64, high: f64) -> Decimal {
    let raw_amount = rng.gen_range(low..high);
    Decimal::from_f64(raw_amount).unwrap_or_default().round_dp(2)
}
