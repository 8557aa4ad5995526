use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::models::{AllocationRow, PortfolioAsset, PortfolioError};
use crate::portfolio::risk::RiskTable;

/// Suggested share for one asset after capping it at the concentration threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RebalanceSuggestion {
    pub asset: String,
    pub current_percentage: Decimal,
    pub suggested_percentage: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    pub allocation: AllocationRow,
    pub over_threshold: bool,
    pub suggested_percentage: Decimal
}

/// Everything the diversification analyzer reports for one portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioAnalysis {
    pub total_value: Decimal,
    pub threshold: Decimal,
    /// Sorted by percentage, largest first.
    pub rows: Vec<AnalysisRow>,
    pub diversification_score: Decimal
}

impl PortfolioAnalysis {
    pub fn alerts(&self) -> impl Iterator<Item = &AnalysisRow> {
        self.rows.iter().filter(|row| row.over_threshold)
    }
}

/// Expresses every named asset as a percentage of the portfolio total.
///
/// Assets with a blank name are dropped. Rows keep the input order.
///
/// # Errors
/// - `EmptyPortfolio` if no named asset remains or the values sum to zero.
/// - `NegativeValue` if an asset's value is below zero.
/// - `DuplicateAsset` if two assets share a name (ignoring case).
/// - `Overflow` if the values sum past what a `Decimal` holds.
pub fn allocate(assets: &[PortfolioAsset], risk_table: &RiskTable) -> Result<Vec<AllocationRow>, PortfolioError> {
    let mut seen = HashSet::new();
    let mut named = Vec::with_capacity(assets.len());

    for asset in assets {
        let name = asset.name.trim();

        if name.is_empty() {
            warn!("Dropping unnamed asset with value {}", asset.value);
            continue;
        }

        if asset.value.is_sign_negative() && !asset.value.is_zero() {
            return Err(PortfolioError::NegativeValue { asset: name.to_string(), value: asset.value });
        }

        if !seen.insert(name.to_lowercase()) {
            return Err(PortfolioError::DuplicateAsset { asset: name.to_string() });
        }

        named.push((name, asset.value));
    }

    let total = portfolio_total(named.iter().map(|(_, value)| *value))?;

    if named.is_empty() || total.is_zero() {
        return Err(PortfolioError::EmptyPortfolio);
    }

    debug!("Allocating {} assets worth {total}", named.len());

    Ok(named.into_iter()
        .map(|(name, value)| AllocationRow {
            asset: name.to_string(),
            value,
            percentage: value / total * Decimal::ONE_HUNDRED,
            risk: risk_table.lookup(name)
        })
        .collect())
}

fn portfolio_total(mut values: impl Iterator<Item = Decimal>) -> Result<Decimal, PortfolioError> {
    values.try_fold(Decimal::ZERO, |total, value| total.checked_add(value).ok_or(PortfolioError::Overflow))
}

/// Accepts thresholds in `(0, 100]`.
pub fn validate_threshold(threshold: Decimal) -> Result<Decimal, PortfolioError> {
    if threshold <= Decimal::ZERO || threshold > Decimal::ONE_HUNDRED {
        return Err(PortfolioError::InvalidThreshold { threshold });
    }

    Ok(threshold)
}

/// Rows whose share is strictly above `threshold`.
pub fn concentration_alerts(rows: &[AllocationRow], threshold: Decimal) -> Result<Vec<&AllocationRow>, PortfolioError> {
    let threshold = validate_threshold(threshold)?;

    Ok(rows.iter().filter(|row| row.percentage > threshold).collect())
}

/// Caps every row at `threshold` and leaves the others unchanged.
///
/// The capped share is discarded, not redistributed, so the suggested
/// percentages sum to less than 100 whenever anything was capped.
pub fn suggest_rebalance(rows: &[AllocationRow], threshold: Decimal) -> Result<Vec<RebalanceSuggestion>, PortfolioError> {
    let threshold = validate_threshold(threshold)?;

    Ok(rows.iter()
        .map(|row| RebalanceSuggestion {
            asset: row.asset.clone(),
            current_percentage: row.percentage,
            suggested_percentage: row.percentage.min(threshold)
        })
        .collect())
}

/// `100 - largest share`; risk levels do not weigh in.
pub fn diversification_score(rows: &[AllocationRow]) -> Decimal {
    let largest = rows.iter().map(|row| row.percentage).max().unwrap_or(Decimal::ZERO);
    Decimal::ONE_HUNDRED - largest
}

/// Allocation, alerts, rebalance suggestion and score in one pass.
pub fn analyze(assets: &[PortfolioAsset], threshold: Decimal, risk_table: &RiskTable) -> Result<PortfolioAnalysis, PortfolioError> {
    let allocation = allocate(assets, risk_table)?;
    let suggestions = suggest_rebalance(&allocation, threshold)?;
    let score = diversification_score(&allocation);
    let total_value = portfolio_total(allocation.iter().map(|row| row.value))?;

    let mut rows: Vec<AnalysisRow> = allocation.into_iter()
        .zip(suggestions)
        .map(|(allocation, suggestion)| AnalysisRow {
            over_threshold: allocation.percentage > threshold,
            suggested_percentage: suggestion.suggested_percentage,
            allocation
        })
        .collect();

    rows.sort_by(|left, right| right.allocation.percentage.cmp(&left.allocation.percentage));

    for row in rows.iter().filter(|row| row.over_threshold) {
        warn!("Asset [{}] is {:.2}% of the portfolio (> {threshold}%)", row.allocation.asset, row.allocation.percentage);
    }

    Ok(PortfolioAnalysis {
        total_value,
        threshold,
        rows,
        diversification_score: score
    })
}
