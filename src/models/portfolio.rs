use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::models::errors::PortfolioError;

/// A single holding as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioAsset {
    pub name: String,
    pub value: Decimal
}

impl PortfolioAsset {
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        Self {
            name: name.into(),
            value
        }
    }
}

/// Parses the `NAME=VALUE` form used on the command line.
impl FromStr for PortfolioAsset {
    type Err = PortfolioError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, amount) = value.rsplit_once('=')
            .ok_or_else(|| PortfolioError::InvalidEntry(value.to_string()))?;

        let amount = Decimal::from_str(amount.trim())
            .map_err(|_| PortfolioError::InvalidEntry(value.to_string()))?;

        Ok(PortfolioAsset::new(name.trim(), amount))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Unknown
}

impl Display for RiskLevel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
            RiskLevel::Unknown => "Unknown"
        };

        formatter.write_str(label)
    }
}

/// An asset's share of the whole portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationRow {
    pub asset: String,
    pub value: Decimal,
    /// Share of the total value, 0 to 100.
    pub percentage: Decimal,
    pub risk: RiskLevel
}
