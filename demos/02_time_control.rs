/// time control - watch a projection grow under a controlled clock
use chrono::{Duration, TimeZone, Utc};
use renda_fixa_rs::{
    HolidayCalendar, Investment, Modality, Money, RentabilityCalculator, SafeTimeProvider,
    TimeSource, Uuid,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== time control example ===\n");

    let investment = Investment {
        id: Uuid::new_v4(),
        client_name: "Rafael".to_string(),
        title: Some("CDB 12% 2026".to_string()),
        principal: Money::from_major(50_000),
        contribution_date: "2024-01-02".to_string(),
        maturity_date: "2026-01-02".to_string(),
        modality: Modality::FixedRate,
        fixed_rate_pct: Some(dec!(12)),
        cdi_percentage: None,
        inflation_spread_pct: None,
        index_rate_pct: None,
        inflation_rate_pct: None,
        tax_exempt: false,
    };

    let calculator = RentabilityCalculator::new(HolidayCalendar::empty());

    // controlled clock starting ten days after contribution
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap(),
    ));
    let controller = time.test_control().unwrap();

    // quarterly snapshots until past maturity; the projection clamps there
    for _ in 0..9 {
        let result = calculator.calculate_now(&investment, &time)?;
        println!(
            "{}  days {:>4}  ir {:>5}%  iof R$ {:>8}  net R$ {:>10}",
            time.now().format("%Y-%m-%d"),
            result.calendar_days,
            result.income_tax_rate,
            result.transaction_tax.round_dp(2),
            result.net_yield.round_dp(2),
        );
        controller.advance(Duration::days(91));
    }

    // at maturity the projection equals the plain calculation
    let final_projection = calculator.calculate(&investment)?;
    println!(
        "\nat maturity: {} calendar days, net R$ {}",
        final_projection.calendar_days,
        final_projection.net_yield.round_dp(2),
    );

    Ok(())
}
