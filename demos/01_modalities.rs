/// modality tour - the three rate schemes side by side
use renda_fixa_rs::format::{format_currency, rate_description};
use renda_fixa_rs::{
    HolidayCalendar, Investment, InvestmentView, Modality, Money, RentabilityCalculator, Uuid,
};
use rust_decimal_macros::dec;

fn base(client: &str, modality: Modality) -> Investment {
    Investment {
        id: Uuid::new_v4(),
        client_name: client.to_string(),
        title: None,
        principal: Money::from_major(25_000),
        contribution_date: "2024-03-01".to_string(),
        maturity_date: "2026-03-01".to_string(),
        modality,
        fixed_rate_pct: None,
        cdi_percentage: None,
        inflation_spread_pct: None,
        index_rate_pct: None,
        inflation_rate_pct: None,
        tax_exempt: false,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== modality tour ===\n");

    let mut prefixado = base("Ana", Modality::FixedRate);
    prefixado.fixed_rate_pct = Some(dec!(11.5));

    let mut pos_fixado = base("Bruno", Modality::FloatingCdi);
    pos_fixado.cdi_percentage = Some(dec!(102));
    pos_fixado.index_rate_pct = Some(dec!(13.65)); // CDI snapshot at contribution

    let mut ipca_mais = base("Carla", Modality::InflationLinked);
    ipca_mais.inflation_spread_pct = Some(dec!(5.5));
    ipca_mais.inflation_rate_pct = Some(dec!(4.2)); // IPCA snapshot at contribution

    // LCI: same shape as the CDB but exempt from IR and IOF
    let mut lci = base("Ana", Modality::FixedRate);
    lci.title = Some("LCI 2026".to_string());
    lci.fixed_rate_pct = Some(dec!(11.5));
    lci.tax_exempt = true;

    let calculator = RentabilityCalculator::new(HolidayCalendar::empty());

    for investment in [&prefixado, &pos_fixado, &ipca_mais, &lci] {
        let result = calculator.calculate(investment)?;
        println!(
            "{:<8} {:<16} gross {:>14}  net {:>14}",
            investment.client_name,
            rate_description(investment),
            format_currency(result.gross_yield),
            format_currency(result.net_yield),
        );
    }

    // the joined view is what a table or export consumes
    let view = InvestmentView::new(&lci, calculator.calculate(&lci)?);
    println!("\nexport view for the LCI:\n{}", view.to_json_pretty()?);

    Ok(())
}
