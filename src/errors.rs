use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::Money;
use crate::types::Modality;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculationError {
    #[error("invalid date: could not parse {value:?} as a calendar date")]
    InvalidDate {
        value: String,
    },

    #[error("invalid date range: maturity {maturity} is not after contribution {contribution}")]
    InvalidDateRange {
        contribution: NaiveDate,
        maturity: NaiveDate,
    },

    #[error("missing rate field for modality {modality:?}")]
    MissingRateField {
        modality: Modality,
    },

    #[error("invalid principal: {amount} is not a positive amount")]
    InvalidPrincipal {
        amount: Money,
    },
}

pub type Result<T> = std::result::Result<T, CalculationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_readable() {
        let err = CalculationError::InvalidDate {
            value: "31/31/2024".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date: could not parse \"31/31/2024\" as a calendar date"
        );

        let err = CalculationError::MissingRateField {
            modality: Modality::FixedRate,
        };
        assert!(err.to_string().contains("FixedRate"));
    }

    #[test]
    fn test_date_range_error_carries_both_dates() {
        let contribution = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let maturity = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let err = CalculationError::InvalidDateRange {
            contribution,
            maturity,
        };
        assert!(err.to_string().contains("2024-06-01"));
    }
}
