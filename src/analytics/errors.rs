use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AnalyticsError {
    #[error("Numeric overflow while computing {calculation}")]
    Overflow {
        calculation: &'static str
    }
}

impl AnalyticsError {
    pub fn overflow(calculation: &'static str) -> Self {
        Self::Overflow { calculation }
    }
}
