//! pt-BR rendering helpers for display and export collaborators.
//!
//! Thousands separator is `.`, decimal separator is `,`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::types::{Investment, Modality};

/// parse a date the way records store them: ISO first, then `DD/MM/YYYY`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

/// format as Brazilian Real: `R$ 1.234,56`
pub fn format_currency(value: Money) -> String {
    format!("R$ {}", group_thousands(value.as_decimal()))
}

/// format a percentage with comma decimals: `10,00%`
pub fn format_percentage(value: Decimal) -> String {
    format!("{:.2}%", value).replace('.', ",")
}

/// human description of the contracted rate, one per modality:
/// `"10,00% a.a."`, `"100% do CDI"`, `"IPCA + 5,00%"`
///
/// Returns `"-"` when the modality's rate field is absent, so table rows
/// always have something to show.
pub fn rate_description(investment: &Investment) -> String {
    match investment.modality {
        Modality::FixedRate => match investment.fixed_rate_pct {
            Some(rate) => format!("{} a.a.", format_percentage(rate)),
            None => "-".to_string(),
        },
        Modality::FloatingCdi => match investment.cdi_percentage {
            Some(pct) => format!("{}% do CDI", plain_decimal(pct)),
            None => "-".to_string(),
        },
        Modality::InflationLinked => match investment.inflation_spread_pct {
            Some(spread) => format!("IPCA + {}", format_percentage(spread)),
            None => "-".to_string(),
        },
    }
}

/// decimal without trailing zeros, comma separator: `102,5`
fn plain_decimal(value: Decimal) -> String {
    value.normalize().to_string().replace('.', ",")
}

fn group_thousands(value: Decimal) -> String {
    let negative = value < Decimal::ZERO;
    let formatted = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::new();
    let digits: Vec<char> = integer_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{decimal_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_parse_iso_and_brazilian_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        assert_eq!(parse_date("2024-01-02"), Some(expected));
        assert_eq!(parse_date("02/01/2024"), Some(expected));

        assert_eq!(parse_date("31/31/2024"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::from_str_exact("1234.56").unwrap()), "R$ 1.234,56");
        assert_eq!(format_currency(Money::from_major(1_000_000)), "R$ 1.000.000,00");
        assert_eq!(format_currency(Money::ZERO), "R$ 0,00");
        assert_eq!(format_currency(Money::from_str_exact("0.99").unwrap()), "R$ 0,99");
        assert_eq!(
            format_currency(Money::ZERO - Money::from_str_exact("500.10").unwrap()),
            "R$ -500,10"
        );
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(dec!(10)), "10,00%");
        assert_eq!(format_percentage(dec!(13.65)), "13,65%");
        assert_eq!(format_percentage(Rate::from_percentage(22).as_percentage()), "22,00%");
    }

    fn investment(modality: Modality) -> Investment {
        Investment {
            id: Uuid::new_v4(),
            client_name: "Carlos".to_string(),
            title: None,
            principal: Money::from_major(1_000),
            contribution_date: "2024-01-02".to_string(),
            maturity_date: "2026-01-02".to_string(),
            modality,
            fixed_rate_pct: None,
            cdi_percentage: None,
            inflation_spread_pct: None,
            index_rate_pct: None,
            inflation_rate_pct: None,
            tax_exempt: false,
        }
    }

    #[test]
    fn test_rate_descriptions() {
        let mut fixed = investment(Modality::FixedRate);
        fixed.fixed_rate_pct = Some(dec!(10));
        assert_eq!(rate_description(&fixed), "10,00% a.a.");

        let mut floating = investment(Modality::FloatingCdi);
        floating.cdi_percentage = Some(dec!(100));
        assert_eq!(rate_description(&floating), "100% do CDI");

        floating.cdi_percentage = Some(dec!(102.5));
        assert_eq!(rate_description(&floating), "102,5% do CDI");

        let mut ipca = investment(Modality::InflationLinked);
        ipca.inflation_spread_pct = Some(dec!(5.5));
        assert_eq!(rate_description(&ipca), "IPCA + 5,50%");
    }

    #[test]
    fn test_missing_rate_renders_a_dash() {
        assert_eq!(rate_description(&investment(Modality::FixedRate)), "-");
        assert_eq!(rate_description(&investment(Modality::FloatingCdi)), "-");
        assert_eq!(rate_description(&investment(Modality::InflationLinked)), "-");
    }
}
