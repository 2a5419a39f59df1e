use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::decimal::{Money, Rate};

/// brazilian market convention for annualized rates
pub const BUSINESS_DAYS_PER_YEAR: u32 = 252;

/// gross return of one compounding run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompoundResult {
    pub effective_rate: Rate,
    pub gross_amount: Money,
    pub gross_yield: Money,
}

/// effective rate for a span of business days under BUS/252
///
/// `(1 + annual)^(business_days / 252) - 1`
pub fn effective_period_rate(annual_rate: Rate, business_days: u32) -> Rate {
    if business_days == 0 {
        return Rate::ZERO;
    }

    let exponent = Decimal::from(business_days) / dec!(252);
    let factor = (Decimal::ONE + annual_rate.as_decimal()).powd(exponent);
    Rate::from_decimal(factor - Decimal::ONE)
}

/// compound a principal over a span of business days
///
/// A zero-business-day span accrues nothing: same-day redemptions and
/// spans made entirely of weekends/holidays return the principal intact.
pub fn compound(principal: Money, annual_rate: Rate, business_days: u32) -> CompoundResult {
    let effective_rate = effective_period_rate(annual_rate, business_days);
    let gross_amount = principal + principal * effective_rate.as_decimal();

    CompoundResult {
        effective_rate,
        gross_amount,
        gross_yield: gross_amount - principal,
    }
}
