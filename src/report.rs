/// serializable views for display and export collaborators
use serde::{Deserialize, Serialize};

use crate::format;
use crate::types::{CalculationResult, Investment, InvestmentId, Modality};

/// an investment joined with its calculation, the shape list/table/export
/// collaborators consume
///
/// Numeric fields serialize losslessly (decimals as strings); the
/// `display` block carries pre-rendered pt-BR strings so a consumer does
/// not need to know the locale rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentView {
    pub id: InvestmentId,
    pub client_name: String,
    pub title: Option<String>,
    pub modality: Modality,
    pub contribution_date: String,
    pub maturity_date: String,
    pub calculation: CalculationResult,
    pub display: DisplayView,
}

/// pre-rendered pt-BR strings for table cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayView {
    pub rate: String,
    pub principal: String,
    pub gross_yield: String,
    pub income_tax: String,
    pub transaction_tax: String,
    pub net_yield: String,
    pub net_total: String,
}

impl InvestmentView {
    pub fn new(investment: &Investment, calculation: CalculationResult) -> Self {
        let display = DisplayView {
            rate: format::rate_description(investment),
            principal: format::format_currency(calculation.principal),
            gross_yield: format::format_currency(calculation.gross_yield),
            income_tax: format::format_currency(calculation.income_tax),
            transaction_tax: format::format_currency(calculation.transaction_tax),
            net_yield: format::format_currency(calculation.net_yield),
            net_total: format::format_currency(calculation.net_total()),
        };

        InvestmentView {
            id: investment.id,
            client_name: investment.client_name.clone(),
            title: investment.title.clone(),
            modality: investment.modality,
            contribution_date: investment.contribution_date.clone(),
            maturity_date: investment.maturity_date.clone(),
            calculation,
            display,
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::RentabilityCalculator;
    use crate::calendar::HolidayCalendar;
    use crate::decimal::Money;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn investment() -> Investment {
        Investment {
            id: Uuid::new_v4(),
            client_name: "João".to_string(),
            title: Some("CDB 10% 2025".to_string()),
            principal: Money::from_major(10_000),
            contribution_date: "2024-01-02".to_string(),
            maturity_date: "2025-01-02".to_string(),
            modality: Modality::FixedRate,
            fixed_rate_pct: Some(dec!(10)),
            cdi_percentage: None,
            inflation_spread_pct: None,
            index_rate_pct: None,
            inflation_rate_pct: None,
            tax_exempt: false,
        }
    }

    #[test]
    fn test_view_carries_record_and_calculation() {
        let inv = investment();
        let calc = RentabilityCalculator::new(HolidayCalendar::empty());
        let result = calc.calculate(&inv).unwrap();

        let view = InvestmentView::new(&inv, result.clone());
        assert_eq!(view.id, inv.id);
        assert_eq!(view.client_name, "João");
        assert_eq!(view.calculation, result);
        assert_eq!(view.display.rate, "10,00% a.a.");
        assert!(view.display.principal.starts_with("R$ "));
        assert_eq!(view.display.transaction_tax, "R$ 0,00");
    }

    #[test]
    fn test_view_from_zeroed_fallback_still_renders() {
        let mut inv = investment();
        inv.maturity_date = "garbage".to_string();

        let calc = RentabilityCalculator::new(HolidayCalendar::empty());
        let view = InvestmentView::new(&inv, calc.calculate_or_zeroed(&inv));

        assert_eq!(view.calculation.calendar_days, 0);
        assert_eq!(view.display.gross_yield, "R$ 0,00");
        assert_eq!(view.display.net_total, "R$ 10.000,00");
    }

    #[test]
    fn test_view_json_round_trip() {
        let inv = investment();
        let calc = RentabilityCalculator::new(HolidayCalendar::empty());
        let view = InvestmentView::new(&inv, calc.calculate(&inv).unwrap());

        let json = view.to_json_pretty().unwrap();
        let back: InvestmentView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
