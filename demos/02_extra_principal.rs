/// extra principal - pay the loan down faster with additional payments
use mortgage_calculator_rs::{
    calculate, AdditionalPaymentFrequency, LoanTerms, Money, MortgageType, PaymentFrequency,
    Rate, SafeTimeProvider, TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== extra principal example ===\n");

    let time = SafeTimeProvider::new(TimeSource::System);

    let baseline = LoanTerms::new(
        Money::from_major(400_000),
        Rate::from_percent(dec!(6.5)),
        30,
        MortgageType::Fixed,
        PaymentFrequency::Monthly,
    );

    // $500 extra toward principal every month
    let accelerated = baseline.clone().with_additional_principal(
        Money::from_major(500),
        AdditionalPaymentFrequency::Monthly,
    );

    let baseline_result = calculate(&baseline, &time)?;
    let accelerated_result = calculate(&accelerated, &time)?;

    println!(
        "baseline:    {} payments, total interest ${}",
        baseline_result.amortization_schedule.len(),
        baseline_result.total_interest.as_decimal()
    );
    println!(
        "accelerated: {} payments, total interest ${}",
        accelerated_result.amortization_schedule.len(),
        accelerated_result.total_interest.as_decimal()
    );

    let interest_avoided = baseline_result.total_interest - accelerated_result.total_interest;
    println!("\ninterest avoided: ${}", interest_avoided.as_decimal());

    let last = accelerated_result
        .amortization_schedule
        .last()
        .expect("schedule is never empty");
    println!(
        "paid off at period {} with a final payment of ${}",
        last.payment_number,
        last.total_payment.as_decimal()
    );
    println!(
        "estimated interest saved (running total): ${}",
        last.interest_saved.as_decimal()
    );

    Ok(())
}
