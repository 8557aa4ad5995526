mod errors;
mod monetary;
mod period;
#[cfg(test)]
mod tests;

pub use errors::{MonetaryError, PeriodError};
pub use monetary::{parse_amount, Currency, Percent};
pub use period::{parse_date, MonthKey, WeekKey};

pub type LineNumber = u64;
