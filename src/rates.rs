use rust_decimal::Decimal;

use crate::decimal::Rate;
use crate::errors::{CalculationError, Result};
use crate::types::{Investment, Modality};

/// derive the nominal annual rate for an investment from its modality
///
/// Absence of a field the modality requires is an error, never a silent
/// zero: defaulting would understate the projected yield.
pub fn resolve_annual_rate(investment: &Investment) -> Result<Rate> {
    let missing = || CalculationError::MissingRateField {
        modality: investment.modality,
    };

    match investment.modality {
        Modality::FixedRate => {
            let fixed = investment.fixed_rate_pct.ok_or_else(missing)?;
            Ok(Rate::from_percentage_decimal(fixed))
        }
        Modality::FloatingCdi => {
            let percentage = investment.cdi_percentage.ok_or_else(missing)?;
            let index = investment.index_rate_pct.ok_or_else(missing)?;
            let hundred = Decimal::from(100);
            Ok(Rate::from_decimal((percentage / hundred) * (index / hundred)))
        }
        Modality::InflationLinked => {
            let spread = investment.inflation_spread_pct.ok_or_else(missing)?;
            let inflation = investment.inflation_rate_pct.ok_or_else(missing)?;
            // real spread and index are additive, not compounded
            Ok(Rate::from_percentage_decimal(inflation + spread))
        }
    }
}
