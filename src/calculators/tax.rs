use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculators::errors::CalculatorError;
use crate::models::ensure_non_negative;

/// An income range taxed at its own rate. `upper` is `None` for the top slab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    /// Percentage applied to the portion of income inside the slab.
    pub rate: Decimal
}

impl TaxSlab {
    pub fn new(lower: i64, upper: Option<i64>, rate: i64) -> Self {
        Self {
            lower: Decimal::from(lower),
            upper: upper.map(Decimal::from),
            rate: Decimal::from(rate)
        }
    }

    /// Portion of `income` that falls inside this slab.
    pub fn taxable(&self, income: Decimal) -> Decimal {
        let above_lower = (income - self.lower).max(Decimal::ZERO);

        match self.upper {
            Some(upper) => above_lower.min((upper - self.lower).max(Decimal::ZERO)),
            None => above_lower
        }
    }
}

pub fn default_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab::new(0, Some(10_000), 10),
        TaxSlab::new(10_000, Some(30_000), 12),
        TaxSlab::new(30_000, None, 20),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlabCharge {
    pub slab: TaxSlab,
    pub taxable: Decimal,
    pub tax: Decimal
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxEstimate {
    pub income: Decimal,
    pub tax: Decimal,
    pub net_income: Decimal,
    /// Tax as a percentage of income, zero when there is no income.
    pub effective_rate: Decimal,
    /// One entry per slab that taxes a non-zero portion, lowest slab first.
    pub breakdown: Vec<SlabCharge>
}

/// Progressive tax: every slab taxes only the portion of income inside it.
pub fn estimate_tax(income: Decimal, slabs: &[TaxSlab]) -> Result<TaxEstimate, CalculatorError> {
    let income = ensure_non_negative("income", income)?;

    let mut breakdown = Vec::new();
    let mut tax = Decimal::ZERO;

    for slab in slabs {
        let taxable = slab.taxable(income);

        if taxable.is_zero() {
            continue;
        }

        let charge = taxable.checked_mul(slab.rate)
            .map(|value| value / Decimal::ONE_HUNDRED)
            .ok_or_else(|| CalculatorError::overflow("slab tax"))?;

        tax = tax.checked_add(charge)
            .ok_or_else(|| CalculatorError::overflow("income tax"))?;

        breakdown.push(SlabCharge {
            slab: slab.clone(),
            taxable,
            tax: charge
        });
    }

    let effective_rate = tax.checked_div(income)
        .map(|ratio| ratio * Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO);

    Ok(TaxEstimate {
        income,
        tax,
        net_income: income - tax,
        effective_rate,
        breakdown
    })
}
