/// quick start - project one fixed-rate investment to maturity
use renda_fixa_rs::{HolidayCalendar, Investment, Modality, Money, RentabilityCalculator, Uuid};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a R$ 10,000 CDB at 10% a.a., held for one year
    let investment = Investment {
        id: Uuid::new_v4(),
        client_name: "Maria".to_string(),
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
    };

    // no holiday source wired up: weekends are still excluded
    let calculator = RentabilityCalculator::new(HolidayCalendar::empty());
    let result = calculator.calculate(&investment)?;

    println!("calendar days:  {}", result.calendar_days);
    println!("business days:  {}", result.business_days);
    println!("effective rate: {}", result.effective_rate);
    println!("gross yield:    R$ {}", result.gross_yield.round_dp(2));
    println!("income tax:     R$ {} ({}%)", result.income_tax.round_dp(2), result.income_tax_rate);
    println!("iof:            R$ {}", result.transaction_tax.round_dp(2));
    println!("net yield:      R$ {}", result.net_yield.round_dp(2));
    println!("net total:      R$ {}", result.net_total().round_dp(2));

    Ok(())
}
