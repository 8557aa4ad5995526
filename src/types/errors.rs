use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonetaryError {
    #[error("Monetary error: {0}")]
    InvalidFormat(String),
    #[error("Monetary error: {0}")]
    Decimal(#[from] rust_decimal::Error)
}

#[derive(Debug, Error)]
pub enum PeriodError {
    #[error("Period error: unrecognized date '{0}'")]
    InvalidDate(String)
}
