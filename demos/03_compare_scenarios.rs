/// compare scenarios - put several loan structures side by side
use chrono::{TimeZone, Utc};
use mortgage_calculator_rs::{
    compare, BuydownType, LoanTerms, Money, MortgageType, PaymentFrequency, Rate,
    SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== scenario comparison ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    ));

    let thirty_year = LoanTerms::new(
        Money::from_major(400_000),
        Rate::from_percent(dec!(6.5)),
        30,
        MortgageType::Fixed,
        PaymentFrequency::Monthly,
    );
    let with_buydown = thirty_year.clone().with_buydown(BuydownType::TwoOne);
    let fifteen_year = LoanTerms::new(
        Money::from_major(400_000),
        Rate::from_percent(dec!(6.0)),
        15,
        MortgageType::Fixed,
        PaymentFrequency::Monthly,
    );

    let result = compare(&[thirty_year, with_buydown, fifteen_year], &time)?;

    for (i, mortgage) in result.mortgages.iter().enumerate() {
        println!(
            "scenario {}: payment ${}  total interest ${}",
            i + 1,
            mortgage.monthly_payment.as_decimal(),
            mortgage.total_interest.as_decimal()
        );
    }

    let summary = &result.comparison_summary;
    println!(
        "\nbest payment:  ${}",
        summary.best_monthly_payment.as_decimal()
    );
    println!(
        "best interest: ${}",
        summary.best_total_interest.as_decimal()
    );

    println!("\ndifferences between the first two scenarios:");
    for diff in &summary.differences {
        println!(
            "  {}: ${} vs ${} ({}%)",
            diff.metric,
            diff.mortgage1.as_decimal(),
            diff.mortgage2.as_decimal(),
            diff.percentage_difference
        );
    }

    println!("\nsummary as json:");
    println!("{}", serde_json::to_string_pretty(summary)?);

    Ok(())
}
