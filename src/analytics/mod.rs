mod errors;
mod filter;
mod grouping;
mod metrics;
mod report;

pub use errors::AnalyticsError;
pub use filter::TransactionFilter;
pub use grouping::{
    cash_flow, daily_expenses, expense_by_category, top_expense_categories, weekday_pattern, weekly_expenses,
    MonthlyCashFlow, WeekdaySpending
};
pub use metrics::{compute_metrics, summary_statistics, Metrics, SummaryStatistics};
pub use report::SummaryReport;
