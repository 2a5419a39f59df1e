/// safe wrapper - a malformed record never breaks the listing
use renda_fixa_rs::format::format_currency;
use renda_fixa_rs::{
    HolidayCalendar, Investment, Modality, Money, RentabilityCalculator, Uuid,
};
use rust_decimal_macros::dec;

fn main() {
    // the swallowed failure is surfaced through tracing
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let good = Investment {
        id: Uuid::new_v4(),
        client_name: "Paula".to_string(),
        title: None,
        principal: Money::from_major(8_000),
        contribution_date: "2024-02-01".to_string(),
        maturity_date: "2025-02-01".to_string(),
        modality: Modality::FixedRate,
        fixed_rate_pct: Some(dec!(10.5)),
        cdi_percentage: None,
        inflation_spread_pct: None,
        index_rate_pct: None,
        inflation_rate_pct: None,
        tax_exempt: false,
    };

    // missing its fixed rate: the pure API would refuse this record
    let mut broken = good.clone();
    broken.id = Uuid::new_v4();
    broken.client_name = "Pedro".to_string();
    broken.fixed_rate_pct = None;

    // unparseable maturity date
    let mut garbled = good.clone();
    garbled.id = Uuid::new_v4();
    garbled.client_name = "Sofia".to_string();
    garbled.maturity_date = "soon".to_string();

    let calculator = RentabilityCalculator::new(HolidayCalendar::empty());

    println!("pure api on the broken record: {:?}\n", calculator.calculate(&broken).err());

    // the bulk path still renders one row per record
    for investment in [&good, &broken, &garbled] {
        let result = calculator.calculate_or_zeroed(investment);
        println!(
            "{:<8} net yield {:>12}  net total {:>14}",
            investment.client_name,
            format_currency(result.net_yield),
            format_currency(result.net_total()),
        );
    }
}
