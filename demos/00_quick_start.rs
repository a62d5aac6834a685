/// quick start - calculate a standard 30 year fixed mortgage
use mortgage_calculator_rs::{
    calculate, LoanTerms, Money, MortgageType, PaymentFrequency, Rate, SafeTimeProvider,
    TimeSource,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let time = SafeTimeProvider::new(TimeSource::System);

    // $400,000 at 6.5% over 30 years
    let terms = LoanTerms::new(
        Money::from_major(400_000),
        Rate::from_percent(dec!(6.5)),
        30,
        MortgageType::Fixed,
        PaymentFrequency::Monthly,
    );

    let result = calculate(&terms, &time)?;

    println!("monthly payment: ${}", result.monthly_payment.as_decimal());
    println!("total interest:  ${}", result.total_interest.as_decimal());
    println!("total paid:      ${}", result.summary.total_amount_paid.as_decimal());
    println!("calculation id:  {}", result.calculation_id);

    // first few periods of the schedule
    println!("\nfirst periods:");
    for entry in result.amortization_schedule.iter().take(3) {
        println!(
            "  #{} {}  principal ${}  interest ${}  balance ${}",
            entry.payment_number,
            entry.payment_date,
            entry.principal_payment.as_decimal(),
            entry.interest_payment.as_decimal(),
            entry.remaining_balance.as_decimal()
        );
    }

    Ok(())
}
