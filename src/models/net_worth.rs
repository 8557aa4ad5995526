use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

use crate::models::errors::{ensure_non_negative, ValidationError};
use crate::types::parse_date;

/// A manually recorded snapshot of assets and liabilities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetWorthEntry {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Assets")]
    pub assets: Decimal,
    #[serde(rename = "Liabilities")]
    pub liabilities: Decimal,
    #[serde(rename = "Net Worth")]
    pub net_worth: Decimal
}

impl NetWorthEntry {
    /// Creates an entry, deriving `net_worth` as assets minus liabilities.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidAmount` if either side is negative.
    pub fn new(date: NaiveDate, assets: Decimal, liabilities: Decimal) -> Result<Self, ValidationError> {
        let assets = ensure_non_negative("assets", assets)?;
        let liabilities = ensure_non_negative("liabilities", liabilities)?;

        Ok(Self {
            date,
            assets,
            liabilities,
            net_worth: assets - liabilities
        })
    }
}

/// Parses the `DATE,ASSETS,LIABILITIES` form used on the command line.
impl FromStr for NetWorthEntry {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();

        let [date, assets, liabilities] = parts.as_slice() else {
            return Err(format!("Net worth entry '{value}' must look like DATE,ASSETS,LIABILITIES"));
        };

        let date = parse_date(date).map_err(|error| error.to_string())?;
        let assets = Decimal::from_str(assets).map_err(|error| format!("Invalid assets '{assets}': {error}"))?;
        let liabilities = Decimal::from_str(liabilities)
            .map_err(|error| format!("Invalid liabilities '{liabilities}': {error}"))?;

        NetWorthEntry::new(date, assets, liabilities).map_err(|error| error.to_string())
    }
}
