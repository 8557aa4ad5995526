mod errors;
mod inflation;
mod interest;
mod tax;

pub use errors::CalculatorError;
pub use inflation::{inflation_impact, InflationImpact, YearlyValue, INFLATION_MARGIN};
pub use interest::{simple_interest, SimpleInterest};
pub use tax::{default_slabs, estimate_tax, SlabCharge, TaxEstimate, TaxSlab};
