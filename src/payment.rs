use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::types::{MortgageType, PaymentFrequency};

/// periodic payment for a principal over a term
///
/// interest-only loans pay periodic interest with no amortization; a zero
/// periodic rate divides the principal evenly; otherwise the standard
/// amortizing formula P * r(1+r)^n / ((1+r)^n - 1) with r the periodic rate.
/// all intermediate math stays on raw decimals and rounds once at the end
pub fn periodic_payment(
    principal: Money,
    annual_rate: Rate,
    payment_frequency: PaymentFrequency,
    term_years: u32,
    mortgage_type: MortgageType,
) -> Money {
    let payments_per_year = payment_frequency.payments_per_year();
    let periodic_rate = annual_rate.periodic(payments_per_year);
    let total_payments = term_years * payments_per_year;

    if mortgage_type == MortgageType::InterestOnly {
        return Money::from_decimal(principal.as_decimal() * periodic_rate);
    }

    if total_payments == 0 {
        return principal;
    }

    if periodic_rate.is_zero() {
        return Money::from_decimal(principal.as_decimal() / Decimal::from(total_payments));
    }

    let compound = compound_factor(periodic_rate, total_payments);
    let numerator = periodic_rate * compound;
    let denominator = compound - Decimal::ONE;

    Money::from_decimal(principal.as_decimal() * (numerator / denominator))
}

/// (1 + r)^n by repeated multiplication
fn compound_factor(periodic_rate: Decimal, periods: u32) -> Decimal {
    let base = Decimal::ONE + periodic_rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_monthly_payment() {
        // 400k at 6.5% over 30 years, the textbook case
        let payment = periodic_payment(
            Money::from_major(400_000),
            Rate::from_percent(dec!(6.5)),
            PaymentFrequency::Monthly,
            30,
            MortgageType::Fixed,
        );
        assert_eq!(payment.as_decimal(), dec!(2528.27));
    }

    #[test]
    fn test_variable_uses_standard_formula() {
        let fixed = periodic_payment(
            Money::from_major(250_000),
            Rate::from_percent(dec!(5.0)),
            PaymentFrequency::Monthly,
            15,
            MortgageType::Fixed,
        );
        let variable = periodic_payment(
            Money::from_major(250_000),
            Rate::from_percent(dec!(5.0)),
            PaymentFrequency::Monthly,
            15,
            MortgageType::Variable,
        );
        assert_eq!(fixed, variable);
    }

    #[test]
    fn test_interest_only_payment() {
        let payment = periodic_payment(
            Money::from_major(400_000),
            Rate::from_percent(dec!(6.5)),
            PaymentFrequency::Monthly,
            30,
            MortgageType::InterestOnly,
        );
        // 400,000 * 0.065 / 12
        assert_eq!(payment.as_decimal(), dec!(2166.67));
    }

    #[test]
    fn test_zero_rate_divides_principal_evenly() {
        let payment = periodic_payment(
            Money::from_major(360_000),
            Rate::ZERO,
            PaymentFrequency::Monthly,
            30,
            MortgageType::Fixed,
        );
        assert_eq!(payment.as_decimal(), dec!(1000));
    }

    #[test]
    fn test_higher_frequency_lowers_payment() {
        let monthly = periodic_payment(
            Money::from_major(400_000),
            Rate::from_percent(dec!(6.5)),
            PaymentFrequency::Monthly,
            30,
            MortgageType::Fixed,
        );
        let bi_weekly = periodic_payment(
            Money::from_major(400_000),
            Rate::from_percent(dec!(6.5)),
            PaymentFrequency::BiWeekly,
            30,
            MortgageType::Fixed,
        );
        let weekly = periodic_payment(
            Money::from_major(400_000),
            Rate::from_percent(dec!(6.5)),
            PaymentFrequency::Weekly,
            30,
            MortgageType::Fixed,
        );
        assert!(bi_weekly < monthly);
        assert!(weekly < bi_weekly);
        // paying down the balance more often shaves a little off the yearly total
        assert!(bi_weekly.as_decimal() * dec!(26) < monthly.as_decimal() * dec!(12));
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(dec!(0.01), 2), dec!(1.0201));
        assert_eq!(compound_factor(dec!(0.05), 0), Decimal::ONE);
    }
}
