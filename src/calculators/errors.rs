use thiserror::Error;

use crate::models::ValidationError;

#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Numeric overflow while computing {calculation}")]
    Overflow {
        calculation: &'static str
    }
}

impl CalculatorError {
    pub fn overflow(calculation: &'static str) -> Self {
        Self::Overflow { calculation }
    }
}
