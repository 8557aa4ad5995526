use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::LineNumber;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Malformed row at line [{line}]: {reason}")]
    MalformedRow {
        line: LineNumber,
        reason: String
    },
    #[error("Input is missing the required column [{0}]")]
    MissingColumn(&'static str),
    #[error("Import failed reading input: {0}")]
    Io(#[from] std::io::Error),
    #[error("Import failed decoding CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV reader task did not finish: {0}")]
    Reader(#[from] tokio::task::JoinError)
}

impl ImportError {
    pub fn missing_field(line: LineNumber, field: &str) -> Self {
        Self::MalformedRow {
            line,
            reason: format!("required field '{field}' is missing")
        }
    }

    pub fn undecodable(line: LineNumber, cause: csv::Error) -> Self {
        Self::MalformedRow {
            line,
            reason: format!("row could not be decoded: {cause}")
        }
    }

    pub fn invalid_field(line: LineNumber, field: &str, cause: impl std::fmt::Display) -> Self {
        Self::MalformedRow {
            line,
            reason: format!("field '{field}' is invalid: {cause}")
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid amount for [{field}]: {value} (must not be negative)")]
    InvalidAmount {
        field: &'static str,
        value: Decimal
    }
}

impl ValidationError {
    pub fn invalid_amount(field: &'static str, value: Decimal) -> Self {
        Self::InvalidAmount { field, value }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PortfolioError {
    #[error("Portfolio is empty: add at least one named asset with a non-zero value")]
    EmptyPortfolio,
    #[error("Asset [{asset}] has a negative value: {value}")]
    NegativeValue {
        asset: String,
        value: Decimal
    },
    #[error("Asset [{asset}] appears more than once")]
    DuplicateAsset {
        asset: String
    },
    #[error("Concentration threshold {threshold} must be greater than 0 and at most 100")]
    InvalidThreshold {
        threshold: Decimal
    },
    #[error("Asset entry '{0}' must look like NAME=VALUE")]
    InvalidEntry(String),
    #[error("Portfolio total does not fit in a decimal")]
    Overflow
}

/// Rejects negative inputs before any computation runs.
pub fn ensure_non_negative(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::invalid_amount(field, value));
    }

    Ok(value)
}
