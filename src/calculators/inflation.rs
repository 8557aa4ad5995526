use rust_decimal::Decimal;

use crate::calculators::errors::CalculatorError;
use crate::models::ensure_non_negative;

/// Percentage points a return must exceed inflation by to count as beating it.
pub const INFLATION_MARGIN: Decimal = Decimal::TWO;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyValue {
    pub year: u32,
    pub value: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct InflationImpact {
    pub current_value: Decimal,
    /// What `current_value` will buy after the period, in today's money.
    pub future_value: Decimal,
    pub purchasing_power_loss: Decimal,
    /// `None` when the current value is zero.
    pub loss_percentage: Option<Decimal>,
    /// Value eroded during the first year at the given rate.
    pub first_year_loss: Decimal,
    pub required_return: Decimal,
    /// Purchasing power at the start of every year, year 0 through `years`.
    pub yearly: Vec<YearlyValue>
}

/// Purchasing power of `current_value` after `years` of inflation at `rate` percent:
/// `current / (1 + rate/100)^years`.
pub fn inflation_impact(current_value: Decimal, rate: Decimal, years: u32) -> Result<InflationImpact, CalculatorError> {
    let current_value = ensure_non_negative("current value", current_value)?;
    let rate = ensure_non_negative("inflation rate", rate)?;

    let growth = Decimal::ONE + rate / Decimal::ONE_HUNDRED;
    let mut compounded = Decimal::ONE;
    let mut yearly = Vec::with_capacity(years as usize + 1);

    for year in 0..=years {
        if year > 0 {
            compounded = compounded.checked_mul(growth)
                .ok_or_else(|| CalculatorError::overflow("inflation compounding"))?;
        }

        let value = current_value.checked_div(compounded)
            .ok_or_else(|| CalculatorError::overflow("purchasing power"))?;

        yearly.push(YearlyValue { year, value });
    }

    let future_value = yearly.last().map(|entry| entry.value).unwrap_or(current_value);
    let purchasing_power_loss = current_value - future_value;
    let loss_percentage = purchasing_power_loss.checked_div(current_value)
        .map(|ratio| ratio * Decimal::ONE_HUNDRED);

    let first_year_loss = current_value.checked_mul(rate)
        .map(|value| value / Decimal::ONE_HUNDRED)
        .ok_or_else(|| CalculatorError::overflow("first year loss"))?;
    let required_return = rate.checked_add(INFLATION_MARGIN)
        .ok_or_else(|| CalculatorError::overflow("required return"))?;

    Ok(InflationImpact {
        current_value,
        future_value,
        purchasing_power_loss,
        loss_percentage,
        first_year_loss,
        required_return,
        yearly
    })
}
