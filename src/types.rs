use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for an investment record
pub type InvestmentId = Uuid;

/// rate-determination scheme of a fixed-income security
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    /// rate agreed at contribution time (prefixado)
    FixedRate,
    /// percentage of the CDI/SELIC index (pós-fixado)
    FloatingCdi,
    /// IPCA plus a fixed real spread (IPCA+)
    InflationLinked,
}

/// an investment record as supplied by the record-management layer
///
/// Dates are kept as the storage layer delivers them and parsed at
/// calculation time; the index snapshots (`index_rate_pct`,
/// `inflation_rate_pct`) are captured at contribution time, not refreshed
/// per calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: InvestmentId,
    pub client_name: String,
    /// security label, e.g. "CDB Banco X 2027"
    #[serde(default)]
    pub title: Option<String>,
    pub principal: Money,
    /// contribution date, ISO `YYYY-MM-DD` or Brazilian `DD/MM/YYYY`
    pub contribution_date: String,
    /// maturity date, same accepted formats
    pub maturity_date: String,
    pub modality: Modality,
    /// annual rate in percent, required for `FixedRate` (e.g. 10.5)
    #[serde(default)]
    pub fixed_rate_pct: Option<Decimal>,
    /// percentage of the index, required for `FloatingCdi` (e.g. 100)
    #[serde(default)]
    pub cdi_percentage: Option<Decimal>,
    /// real spread over IPCA in percent, required for `InflationLinked`
    #[serde(default)]
    pub inflation_spread_pct: Option<Decimal>,
    /// current CDI/SELIC snapshot in percent, required for `FloatingCdi`
    #[serde(default)]
    pub index_rate_pct: Option<Decimal>,
    /// current IPCA snapshot in percent, required for `InflationLinked`
    #[serde(default)]
    pub inflation_rate_pct: Option<Decimal>,
    /// LCI/LCA-style exemption: no income tax or IOF on the yield
    #[serde(default)]
    pub tax_exempt: bool,
}

/// full rentability projection for one investment
///
/// Produced fresh on every calculation; never cached across record edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub calendar_days: u32,
    pub business_days: u32,
    /// compounded rate actually applied over the period
    pub effective_rate: Rate,
    pub principal: Money,
    pub gross_amount: Money,
    pub gross_yield: Money,
    /// income tax bracket in percent: 22.5, 20.0, 17.5 or 15.0
    pub income_tax_rate: Decimal,
    pub income_tax: Money,
    /// IOF charged on early redemption
    pub transaction_tax: Money,
    pub net_yield: Money,
}

impl CalculationResult {
    /// zero-valued fallback used when a record cannot be calculated;
    /// distinguishable from a genuine zero-yield result only by the caller
    /// knowing which operation produced it
    pub fn zeroed(principal: Money) -> Self {
        CalculationResult {
            calendar_days: 0,
            business_days: 0,
            effective_rate: Rate::ZERO,
            principal,
            gross_amount: principal,
            gross_yield: Money::ZERO,
            income_tax_rate: Decimal::ZERO,
            income_tax: Money::ZERO,
            transaction_tax: Money::ZERO,
            net_yield: Money::ZERO,
        }
    }

    /// principal plus net yield (patrimônio líquido)
    pub fn net_total(&self) -> Money {
        self.principal + self.net_yield
    }

    /// total tax charged on the yield
    pub fn total_tax(&self) -> Money {
        self.income_tax + self.transaction_tax
    }
}
