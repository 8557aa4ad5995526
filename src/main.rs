use std::io::{stderr, stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use finance_toolkit::analytics::{
    cash_flow, daily_expenses, summary_statistics, weekday_pattern, weekly_expenses, SummaryReport, TransactionFilter
};
use finance_toolkit::calculators::{estimate_tax, inflation_impact, simple_interest};
use finance_toolkit::config::Settings;
use finance_toolkit::engine::{generate_sample, write_allocation, write_net_worth, write_transactions, ImportEngine};
use finance_toolkit::models::{NetWorthEntry, PortfolioAsset, TransactionType};
use finance_toolkit::portfolio::{analyze, PortfolioAnalysis};
use finance_toolkit::session::Session;
use finance_toolkit::types::{parse_amount, parse_date, Currency, MonetaryError, Percent};

#[derive(Parser)]
#[command(name = "finance-toolkit", version, about = "Personal finance calculators and transaction analytics")]
struct Cli {
    /// error, warn, info, debug or trace
    #[arg(long, global = true, default_value = "error", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command
}

#[derive(Subcommand)]
enum Command {
    /// Simple interest on a principal
    Interest {
        #[arg(long, value_parser = parse_decimal)]
        principal: Decimal,
        /// Annual rate in percent
        #[arg(long, value_parser = parse_decimal)]
        rate: Decimal,
        /// Time in years
        #[arg(long, value_parser = parse_decimal)]
        time: Decimal
    },
    /// Purchasing power of an amount after years of inflation
    Inflation {
        #[arg(long, value_parser = parse_decimal)]
        current: Decimal,
        /// Annual inflation in percent
        #[arg(long, value_parser = parse_decimal)]
        rate: Decimal,
        #[arg(long)]
        years: u32
    },
    /// Progressive income tax estimate
    Tax {
        #[arg(long, value_parser = parse_decimal)]
        income: Decimal
    },
    /// Allocation, risk and concentration analysis
    Portfolio {
        /// Holding as NAME=VALUE, repeatable
        #[arg(long = "asset", required = true)]
        assets: Vec<PortfolioAsset>,
        /// Concentration threshold in percent
        #[arg(long, value_parser = parse_decimal)]
        threshold: Option<Decimal>,
        /// Print the allocation table as CSV
        #[arg(long)]
        csv: bool
    },
    /// Categorize an uploaded CSV and print the processed rows
    Process {
        input: PathBuf
    },
    /// Summary report for an uploaded CSV
    Report {
        input: PathBuf,
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
        #[arg(long = "type")]
        transaction_type: Option<TransactionType>,
        #[arg(long)]
        category: Option<String>,
        /// Minimum absolute amount
        #[arg(long, value_parser = parse_decimal)]
        min_amount: Option<Decimal>,
        /// Snapshot as DATE,ASSETS,LIABILITIES, repeatable
        #[arg(long = "net-worth")]
        net_worth: Vec<NetWorthEntry>
    },
    /// Generate a year of labeled demo transactions
    Sample {
        #[arg(long, default_value_t = 2024)]
        year: i32,
        #[arg(long, default_value_t = 42)]
        seed: u64
    },
    /// Net-worth history from recorded snapshots
    NetWorth {
        /// Snapshot as DATE,ASSETS,LIABILITIES, repeatable
        #[arg(long = "entry", required = true)]
        entries: Vec<NetWorthEntry>
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    let settings = Settings::load_or_default(cli.config.as_deref())?;
    let mut output = BufWriter::new(stdout().lock());

    match cli.command {
        Command::Interest { principal, rate, time } => {
            let result = simple_interest(principal, rate, time)?;
            let symbol = &settings.currency_symbol;

            writeln!(output, "Principal: {symbol}{}", Currency(result.principal))?;
            writeln!(output, "Interest: {symbol}{}", Currency(result.interest))?;
            writeln!(output, "Total Amount: {symbol}{}", Currency(result.total))?;

            if let Some(growth) = result.growth_percentage {
                writeln!(output, "Growth: {}", Percent(growth))?;
            }
        }
        Command::Inflation { current, rate, years } => {
            let impact = inflation_impact(current, rate, years)?;
            let symbol = &settings.currency_symbol;

            writeln!(output, "Current Value: {symbol}{}", Currency(impact.current_value))?;
            writeln!(output, "Future Purchasing Power: {symbol}{}", Currency(impact.future_value))?;
            writeln!(output, "Purchasing Power Loss: {symbol}{}", Currency(impact.purchasing_power_loss))?;

            if let Some(loss) = impact.loss_percentage {
                writeln!(output, "Loss Percentage: {}", Percent(loss))?;
            }

            writeln!(output, "First Year Loss: {symbol}{}", Currency(impact.first_year_loss))?;
            writeln!(output, "Required Return: {}", Percent(impact.required_return))?;
            writeln!(output)?;
            writeln!(output, "=== PURCHASING POWER BY YEAR ===")?;

            for point in &impact.yearly {
                writeln!(output, "Year {}: {symbol}{}", point.year, Currency(point.value))?;
            }
        }
        Command::Tax { income } => {
            let estimate = estimate_tax(income, &settings.tax_slabs)?;
            let symbol = &settings.currency_symbol;

            writeln!(output, "Income: {symbol}{}", Currency(estimate.income))?;
            writeln!(output, "Tax: {symbol}{}", Currency(estimate.tax))?;
            writeln!(output, "Net Income: {symbol}{}", Currency(estimate.net_income))?;
            writeln!(output, "Effective Rate: {}", Percent(estimate.effective_rate))?;
            writeln!(output)?;
            writeln!(output, "=== BREAKDOWN ===")?;

            for charge in &estimate.breakdown {
                let upper = charge.slab.upper
                    .map(|upper| format!("{symbol}{}", Currency(upper)))
                    .unwrap_or_else(|| "and above".to_string());

                writeln!(
                    output,
                    "{symbol}{} - {upper} @ {}: taxable {symbol}{}, tax {symbol}{}",
                    Currency(charge.slab.lower),
                    Percent(charge.slab.rate),
                    Currency(charge.taxable),
                    Currency(charge.tax)
                )?;
            }
        }
        Command::Portfolio { assets, threshold, csv } => {
            let threshold = threshold.unwrap_or(settings.concentration_threshold);
            let analysis = analyze(&assets, threshold, &settings.risk_table())?;

            if csv {
                write_allocation(&mut output, &analysis)?;
            } else {
                write_portfolio_summary(&mut output, &analysis, &settings.currency_symbol)?;
            }
        }
        Command::Process { input } => {
            let session = import(&input, &settings).await?;
            write_transactions(&mut output, session.transactions())?;
        }
        Command::Report { input, from, to, transaction_type, category, min_amount, net_worth } => {
            let mut session = import(&input, &settings).await?;

            let filter = TransactionFilter {
                transaction_type,
                category,
                min_amount,
                ..TransactionFilter::between(from, to)
            };
            let filtered = filter.apply(session.transactions());
            session.replace_transactions(filtered);

            for entry in net_worth {
                session.push_net_worth(entry);
            }

            write_report(&mut output, &session, &settings)?;
        }
        Command::Sample { year, seed } => {
            write_transactions(&mut output, &generate_sample(year, seed))?;
        }
        Command::NetWorth { entries } => {
            let mut session = Session::new();

            for entry in entries {
                session.push_net_worth(entry);
            }

            write_net_worth(&mut output, session.net_worth_history())?;
        }
    }

    output.flush()?;

    Ok(())
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("Invalid log level '{level}', expected one of: error, warn, info, debug, trace"))
    }
}

fn parse_decimal(value: &str) -> Result<Decimal, MonetaryError> {
    parse_amount(value)
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Data is written to stdout, so logging has to go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn import(path: &Path, settings: &Settings) -> Result<Session> {
    let engine = ImportEngine::new(settings.categorizer(), settings.import_policy);

    let timer = Instant::now();
    let outcome = engine.run(path).await
        .with_context(|| format!("Failed to import {}", path.display()))?;
    let duration = timer.elapsed();

    info!("Processed transactions in: {duration:?}");

    let mut session = Session::new();
    session.replace_transactions(outcome.transactions);

    Ok(session)
}

fn write_portfolio_summary<W: Write>(output: &mut W, analysis: &PortfolioAnalysis, symbol: &str) -> Result<()> {
    writeln!(output, "Total Value: {symbol}{}", Currency(analysis.total_value))?;
    writeln!(output, "Diversification Score: {}", Percent(analysis.diversification_score))?;
    writeln!(output)?;
    writeln!(output, "=== ALLOCATION ===")?;

    for row in &analysis.rows {
        writeln!(
            output,
            "{}: {symbol}{} ({}, {} risk, suggested {})",
            row.allocation.asset,
            Currency(row.allocation.value),
            Percent(row.allocation.percentage),
            row.allocation.risk,
            Percent(row.suggested_percentage)
        )?;
    }

    writeln!(output)?;
    writeln!(output, "=== CONCENTRATION ALERTS ===")?;

    let mut alerts = analysis.alerts().peekable();

    if alerts.peek().is_none() {
        writeln!(output, "No asset exceeds {}", Percent(analysis.threshold))?;
    }

    for row in alerts {
        writeln!(
            output,
            "{} is {} of the portfolio (above {})",
            row.allocation.asset,
            Percent(row.allocation.percentage),
            Percent(analysis.threshold)
        )?;
    }

    Ok(())
}

fn write_report<W: Write>(output: &mut W, session: &Session, settings: &Settings) -> Result<()> {
    let transactions = session.transactions();
    let symbol = &settings.currency_symbol;
    let report = SummaryReport::new(transactions, settings.top_categories, symbol, Local::now().naive_local())?;

    write!(output, "{report}")?;

    let statistics = summary_statistics(transactions)?;

    writeln!(output)?;
    writeln!(output, "=== SUMMARY STATISTICS ===")?;
    writeln!(output, "Transactions: {}", statistics.count)?;

    if let (Some(first), Some(last)) = (statistics.first_date, statistics.last_date) {
        writeln!(output, "Date Range: {first} to {last}")?;
    }
    if let Some(average) = statistics.average_amount {
        writeln!(output, "Average Amount: {symbol}{}", Currency(average))?;
    }
    if let Some(largest) = statistics.largest_expense {
        writeln!(output, "Largest Expense: {symbol}{}", Currency(largest))?;
    }

    writeln!(output)?;
    writeln!(output, "=== MONTHLY CASH FLOW ===")?;

    for month in cash_flow(transactions)? {
        writeln!(
            output,
            "{}: income {symbol}{}, expenses {symbol}{}, net {symbol}{}",
            month.month,
            Currency(month.income),
            Currency(month.expenses),
            Currency(month.net)
        )?;
    }

    writeln!(output)?;
    writeln!(output, "=== WEEKLY EXPENSES ===")?;

    for (week, total) in weekly_expenses(transactions)? {
        writeln!(output, "{week}: {symbol}{}", Currency(total))?;
    }

    writeln!(output)?;
    writeln!(output, "=== DAILY EXPENSES ===")?;

    for (day, total) in daily_expenses(transactions)? {
        writeln!(output, "{day}: {symbol}{}", Currency(total))?;
    }

    writeln!(output)?;
    writeln!(output, "=== SPENDING BY WEEKDAY ===")?;

    for day in weekday_pattern(transactions)? {
        writeln!(
            output,
            "{}: {symbol}{} across {} expenses (avg {symbol}{})",
            day.name(),
            Currency(day.total),
            day.count,
            Currency(day.average)
        )?;
    }

    let history = session.net_worth_history();

    if !history.is_empty() {
        writeln!(output)?;
        writeln!(output, "=== NET WORTH ===")?;

        for entry in history {
            writeln!(
                output,
                "{}: assets {symbol}{}, liabilities {symbol}{}, net worth {symbol}{}",
                entry.date,
                Currency(entry.assets),
                Currency(entry.liabilities),
                Currency(entry.net_worth)
            )?;
        }
    }

    Ok(())
}
