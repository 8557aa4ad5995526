use rust_decimal::Decimal;

use crate::calculators::errors::CalculatorError;
use crate::models::ensure_non_negative;

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleInterest {
    pub principal: Decimal,
    pub interest: Decimal,
    pub total: Decimal,
    /// Interest as a percentage of the principal; `None` when the principal is zero.
    pub growth_percentage: Option<Decimal>
}

/// Simple interest on `principal` at `rate` percent per year over `time` years.
pub fn simple_interest(principal: Decimal, rate: Decimal, time: Decimal) -> Result<SimpleInterest, CalculatorError> {
    let principal = ensure_non_negative("principal", principal)?;
    let rate = ensure_non_negative("rate", rate)?;
    let time = ensure_non_negative("time", time)?;

    let interest = principal.checked_mul(rate)
        .and_then(|value| value.checked_mul(time))
        .and_then(|value| value.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| CalculatorError::overflow("simple interest"))?;

    let total = principal.checked_add(interest)
        .ok_or_else(|| CalculatorError::overflow("simple interest total"))?;

    let growth_percentage = match interest.checked_div(principal) {
        Some(ratio) => Some(ratio.checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| CalculatorError::overflow("interest growth"))?),
        None => None
    };

    Ok(SimpleInterest {
        principal,
        interest,
        total,
        growth_percentage
    })
}
