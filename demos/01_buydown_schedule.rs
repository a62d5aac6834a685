/// buydown schedule - temporary rate discounts over the first loan years
use chrono::{TimeZone, Utc};
use mortgage_calculator_rs::{
    calculate, BuydownType, LoanTerms, Money, MortgageType, PaymentFrequency, Rate,
    SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 2-1 buydown example ===\n");

    // fixed start date so the schedule is reproducible
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    ));

    let flat = LoanTerms::new(
        Money::from_major(400_000),
        Rate::from_percent(dec!(6.5)),
        30,
        MortgageType::Fixed,
        PaymentFrequency::Monthly,
    );
    let bought_down = flat.clone().with_buydown(BuydownType::TwoOne);

    let flat_result = calculate(&flat, &time)?;
    let buydown_result = calculate(&bought_down, &time)?;

    println!("flat payment:       ${}", flat_result.monthly_payment.as_decimal());
    println!("year 1 payment:     ${}", buydown_result.monthly_payment.as_decimal());

    // rate steps 4.5% -> 5.5% -> 6.5% at each payment year boundary
    println!("\nrate by year:");
    for year_start in [0usize, 12, 24] {
        let entry = &buydown_result.amortization_schedule[year_start];
        println!(
            "  year {}: rate {}  payment ${}",
            year_start / 12 + 1,
            entry.interest_rate,
            entry.regular_payment.as_decimal()
        );
    }

    let first_year_saving = flat_result.monthly_payment - buydown_result.monthly_payment;
    println!(
        "\nfirst year saving:  ${} per month",
        first_year_saving.as_decimal()
    );

    Ok(())
}
