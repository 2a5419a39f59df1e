use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::decimal::Money;

/// regressive income-tax brackets for fixed income (IN RFB 1585),
/// keyed by elapsed calendar days: `(low, high, rate_pct]`
const INCOME_TAX_BRACKETS: [(u32, u32, Decimal); 4] = [
    (0, 180, dec!(22.5)),
    (180, 360, dec!(20.0)),
    (360, 720, dec!(17.5)),
    (720, u32::MAX, dec!(15.0)),
];

/// published IOF regressive table (Decreto 6.306, Anexo): fraction of the
/// yield that is taxable, indexed by elapsed calendar days 1..=30
const IOF_YIELD_FRACTIONS: [Decimal; 30] = [
    dec!(0.96),
    dec!(0.93),
    dec!(0.90),
    dec!(0.86),
    dec!(0.83),
    dec!(0.80),
    dec!(0.76),
    dec!(0.73),
    dec!(0.70),
    dec!(0.66),
    dec!(0.63),
    dec!(0.60),
    dec!(0.56),
    dec!(0.53),
    dec!(0.50),
    dec!(0.46),
    dec!(0.43),
    dec!(0.40),
    dec!(0.36),
    dec!(0.33),
    dec!(0.30),
    dec!(0.26),
    dec!(0.23),
    dec!(0.20),
    dec!(0.16),
    dec!(0.13),
    dec!(0.10),
    dec!(0.06),
    dec!(0.03),
    dec!(0.00),
];

/// taxes applied to one gross yield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxBreakdown {
    /// income tax bracket in percent
    pub income_tax_rate: Decimal,
    pub income_tax: Money,
    pub transaction_tax: Money,
    pub net_yield: Money,
}

/// income-tax rate in percent for a holding period in calendar days
pub fn income_tax_rate(calendar_days: u32) -> Decimal {
    INCOME_TAX_BRACKETS
        .iter()
        .find(|(_, high, _)| calendar_days <= *high)
        .map(|(_, _, rate)| *rate)
        .unwrap_or(dec!(15.0))
}

/// taxable fraction of the yield under the regressive IOF table
///
/// Zero from day 30 onward; redemptions inside the first month are taxed
/// on a fraction that starts at 96% on day 1.
pub fn iof_yield_fraction(calendar_days: u32) -> Decimal {
    if calendar_days >= 30 {
        return Decimal::ZERO;
    }
    IOF_YIELD_FRACTIONS[calendar_days.saturating_sub(1) as usize]
}

/// apply IOF and income tax to a gross yield
///
/// IOF is charged on the gross yield first; income tax is charged on the
/// IOF-net base, never on the full gross yield independently.
pub fn assess(gross_yield: Money, calendar_days: u32) -> TaxBreakdown {
    let transaction_tax = gross_yield * iof_yield_fraction(calendar_days);
    let rate = income_tax_rate(calendar_days);
    let income_tax = (gross_yield - transaction_tax) * (rate / Decimal::from(100));

    TaxBreakdown {
        income_tax_rate: rate,
        income_tax,
        transaction_tax,
        net_yield: gross_yield - transaction_tax - income_tax,
    }
}

/// breakdown for LCI/LCA-style exempt securities: the yield passes through
pub fn exempt(gross_yield: Money) -> TaxBreakdown {
    TaxBreakdown {
        income_tax_rate: Decimal::ZERO,
        income_tax: Money::ZERO,
        transaction_tax: Money::ZERO,
        net_yield: gross_yield,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_income_tax_bracket_boundaries() {
        assert_eq!(income_tax_rate(1), dec!(22.5));
        assert_eq!(income_tax_rate(180), dec!(22.5));
        assert_eq!(income_tax_rate(181), dec!(20.0));
        assert_eq!(income_tax_rate(360), dec!(20.0));
        assert_eq!(income_tax_rate(361), dec!(17.5));
        assert_eq!(income_tax_rate(720), dec!(17.5));
        assert_eq!(income_tax_rate(721), dec!(15.0));
        assert_eq!(income_tax_rate(10_000), dec!(15.0));
    }

    #[test]
    fn test_iof_vanishes_at_day_thirty() {
        assert_eq!(iof_yield_fraction(30), Decimal::ZERO);
        assert_eq!(iof_yield_fraction(31), Decimal::ZERO);
        assert_eq!(iof_yield_fraction(365), Decimal::ZERO);

        for days in 1..=29 {
            assert!(
                iof_yield_fraction(days) > Decimal::ZERO,
                "day {days} should still attract IOF"
            );
        }
    }

    #[test]
    fn test_iof_published_table_spot_values() {
        assert_eq!(iof_yield_fraction(1), dec!(0.96));
        assert_eq!(iof_yield_fraction(2), dec!(0.93));
        assert_eq!(iof_yield_fraction(15), dec!(0.50));
        assert_eq!(iof_yield_fraction(29), dec!(0.03));
    }

    #[test]
    fn test_iof_is_monotonically_regressive() {
        for days in 1..=29 {
            assert!(iof_yield_fraction(days) > iof_yield_fraction(days + 1));
        }
    }

    #[test]
    fn test_income_tax_uses_the_iof_net_base() {
        let gross = Money::from_major(1_000);
        let breakdown = assess(gross, 15);

        // day 15: half the yield is IOF
        assert_eq!(breakdown.transaction_tax, Money::from_major(500));
        // 22.5% of the remaining 500, not of the full 1000
        assert_eq!(breakdown.income_tax, Money::from_str_exact("112.50").unwrap());
        assert_eq!(breakdown.net_yield, Money::from_str_exact("387.50").unwrap());
    }

    #[test]
    fn test_mid_term_redemption_has_no_iof() {
        let gross = Money::from_major(1_000);
        let breakdown = assess(gross, 400);

        assert_eq!(breakdown.transaction_tax, Money::ZERO);
        assert_eq!(breakdown.income_tax_rate, dec!(17.5));
        assert_eq!(breakdown.income_tax, Money::from_major(175));
        assert_eq!(breakdown.net_yield, Money::from_major(825));
    }

    #[test]
    fn test_zero_yield_means_zero_tax() {
        let breakdown = assess(Money::ZERO, 10);
        assert_eq!(breakdown.income_tax, Money::ZERO);
        assert_eq!(breakdown.transaction_tax, Money::ZERO);
        assert_eq!(breakdown.net_yield, Money::ZERO);
    }

    #[test]
    fn test_exempt_yield_passes_through() {
        let gross = Money::from_str_exact("432.10").unwrap();
        let breakdown = exempt(gross);

        assert_eq!(breakdown.income_tax_rate, Decimal::ZERO);
        assert_eq!(breakdown.income_tax, Money::ZERO);
        assert_eq!(breakdown.transaction_tax, Money::ZERO);
        assert_eq!(breakdown.net_yield, gross);
    }

    proptest! {
        #[test]
        fn prop_net_yield_identity_holds_exactly(
            centavos in 0i64..1_000_000_000,
            days in 1u32..2_000,
        ) {
            let gross = Money::from_minor(centavos, 2);
            let breakdown = assess(gross, days);

            prop_assert_eq!(
                breakdown.net_yield + breakdown.income_tax + breakdown.transaction_tax,
                gross
            );
            prop_assert!(!breakdown.income_tax.is_negative());
            prop_assert!(!breakdown.transaction_tax.is_negative());
            prop_assert!(breakdown.income_tax <= gross);
            prop_assert!(breakdown.transaction_tax <= gross);
        }
    }
}
