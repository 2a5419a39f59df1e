use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use tracing::warn;

use crate::calendar::HolidayCalendar;
use crate::compounding;
use crate::config::{CalculatorConfig, TaxAssessment};
use crate::errors::{CalculationError, Result};
use crate::format;
use crate::rates;
use crate::tax;
use crate::types::{CalculationResult, Investment};

/// projects gross and net yield for one investment record
///
/// Stateless apart from the injected holiday calendar and configuration;
/// safe to share across threads and to call once per record when
/// recomputing a whole list.
#[derive(Debug, Clone)]
pub struct RentabilityCalculator {
    calendar: HolidayCalendar,
    config: CalculatorConfig,
}

impl RentabilityCalculator {
    pub fn new(calendar: HolidayCalendar) -> Self {
        RentabilityCalculator {
            calendar,
            config: CalculatorConfig::default(),
        }
    }

    pub fn with_config(calendar: HolidayCalendar, config: CalculatorConfig) -> Self {
        RentabilityCalculator { calendar, config }
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// full projection using the configured assessment date
    ///
    /// Validates the record, resolves the annual rate, counts days,
    /// compounds under BUS/252 and applies IOF and income tax.
    pub fn calculate(&self, investment: &Investment) -> Result<CalculationResult> {
        let (contribution, maturity) = self.parse_dates(investment)?;

        let end = match self.config.assessment {
            TaxAssessment::AtMaturity => maturity,
            TaxAssessment::AsOf(date) => date.min(maturity),
        };

        self.project(investment, contribution, end)
    }

    /// projection to `as_of` instead of the configured assessment date,
    /// clamped to maturity
    pub fn calculate_as_of(
        &self,
        investment: &Investment,
        as_of: NaiveDate,
    ) -> Result<CalculationResult> {
        let (contribution, maturity) = self.parse_dates(investment)?;
        self.project(investment, contribution, as_of.min(maturity))
    }

    /// projection as of the injected clock's today
    pub fn calculate_now(
        &self,
        investment: &Investment,
        time: &SafeTimeProvider,
    ) -> Result<CalculationResult> {
        self.calculate_as_of(investment, time.now().date_naive())
    }

    /// safe wrapper for bulk-display callers: any failure becomes the
    /// zero-valued result so a list or export never loses a row over one
    /// malformed record; the cause goes to the log instead
    pub fn calculate_or_zeroed(&self, investment: &Investment) -> CalculationResult {
        match self.calculate(investment) {
            Ok(result) => result,
            Err(error) => {
                warn!(
                    investment = %investment.id,
                    client = %investment.client_name,
                    %error,
                    "rentability calculation failed, substituting zeroed result",
                );
                CalculationResult::zeroed(investment.principal)
            }
        }
    }

    fn parse_dates(&self, investment: &Investment) -> Result<(NaiveDate, NaiveDate)> {
        let contribution = format::parse_date(&investment.contribution_date).ok_or_else(|| {
            CalculationError::InvalidDate {
                value: investment.contribution_date.clone(),
            }
        })?;
        let maturity = format::parse_date(&investment.maturity_date).ok_or_else(|| {
            CalculationError::InvalidDate {
                value: investment.maturity_date.clone(),
            }
        })?;

        if maturity <= contribution {
            return Err(CalculationError::InvalidDateRange {
                contribution,
                maturity,
            });
        }

        Ok((contribution, maturity))
    }

    fn project(
        &self,
        investment: &Investment,
        contribution: NaiveDate,
        end: NaiveDate,
    ) -> Result<CalculationResult> {
        if !investment.principal.is_positive() {
            return Err(CalculationError::InvalidPrincipal {
                amount: investment.principal,
            });
        }

        let annual_rate = rates::resolve_annual_rate(investment)?;
        let span = self.calendar.count_days(contribution, end)?;
        let compounded = compounding::compound(investment.principal, annual_rate, span.business_days);

        let taxes = if investment.tax_exempt {
            tax::exempt(compounded.gross_yield)
        } else {
            tax::assess(compounded.gross_yield, span.calendar_days)
        };

        Ok(CalculationResult {
            calendar_days: span.calendar_days,
            business_days: span.business_days,
            effective_rate: compounded.effective_rate,
            principal: investment.principal,
            gross_amount: compounded.gross_amount,
            gross_yield: compounded.gross_yield,
            income_tax_rate: taxes.income_tax_rate,
            income_tax: taxes.income_tax,
            transaction_tax: taxes.transaction_tax,
            net_yield: taxes.net_yield,
        })
    }
}
