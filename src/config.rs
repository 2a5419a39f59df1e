use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// which end date the projection runs to
///
/// Projections for an unmatured investment can be taken either at the
/// stated maturity (the default: the system projects final yield) or at an
/// arbitrary reference date, clamped to maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaxAssessment {
    #[default]
    AtMaturity,
    AsOf(NaiveDate),
}

/// calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalculatorConfig {
    pub assessment: TaxAssessment,
}

impl CalculatorConfig {
    pub fn at_maturity() -> Self {
        CalculatorConfig {
            assessment: TaxAssessment::AtMaturity,
        }
    }

    pub fn as_of(date: NaiveDate) -> Self {
        CalculatorConfig {
            assessment: TaxAssessment::AsOf(date),
        }
    }
}
