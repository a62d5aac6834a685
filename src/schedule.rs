use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::buydown::Buydown;
use crate::decimal::{Money, Rate};
use crate::payment::periodic_payment;
use crate::terms::LoanTerms;
use crate::types::MortgageType;

/// one period of an amortization schedule, immutable once emitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationEntry {
    pub payment_number: u32,
    pub payment_date: NaiveDate,
    pub principal_payment: Money,
    pub interest_payment: Money,
    pub additional_principal_payment: Money,
    /// principal plus interest for this period
    pub regular_payment: Money,
    /// regular payment plus any additional principal
    pub total_payment: Money,
    pub remaining_balance: Money,
    /// effective annual rate applied this period
    pub interest_rate: Rate,
    /// cumulative estimated interest saved by additional payments so far
    pub interest_saved: Money,
}

/// build the period-by-period schedule for validated terms
///
/// `base_payment` is the payment computed once at the permanent rate;
/// discounted buydown years re-amortize against the live balance instead so
/// the loan still pays off by the stated term. the loop stops when the
/// balance reaches zero or the theoretical period count runs out
pub fn build_schedule(
    terms: &LoanTerms,
    base_payment: Money,
    start_date: NaiveDate,
) -> Vec<AmortizationEntry> {
    let payments_per_year = terms.payment_frequency.payments_per_year();
    let total_payments = terms.total_periods();
    let days_increment = (365 / payments_per_year) as i64;

    let buydown = Buydown::for_type(terms.buydown_type, terms.interest_rate);
    let additional_amount = terms.additional_principal_payment;
    let payment_interval = terms
        .additional_payment_frequency
        .payment_interval(terms.payment_frequency);
    let mut one_time_applied = false;

    let mut schedule = Vec::new();
    let mut balance = terms.loan_amount;
    let mut interest_saved = Money::ZERO;

    for payment_number in 1..=total_payments {
        let payment_year = (payment_number - 1) / payments_per_year + 1;
        let current_rate = match buydown {
            Some(buydown) => buydown.rate_for_year(payment_year),
            None => terms.interest_rate,
        };
        let periodic_rate = current_rate.periodic(payments_per_year);

        let interest_payment = Money::from_decimal(balance.as_decimal() * periodic_rate);

        let principal_payment = match terms.mortgage_type {
            MortgageType::InterestOnly => {
                // principal is due in full at maturity
                if payment_number == total_payments {
                    balance
                } else {
                    Money::ZERO
                }
            }
            _ => {
                let payment = match buydown {
                    Some(buydown) if payment_year <= buydown.duration_years() => {
                        let remaining_years = terms.loan_term_years - (payment_year - 1);
                        periodic_payment(
                            balance,
                            current_rate,
                            terms.payment_frequency,
                            remaining_years,
                            terms.mortgage_type,
                        )
                    }
                    _ => base_payment,
                };
                payment - interest_payment
            }
        };

        let mut additional_due = Money::ZERO;
        if additional_amount.is_positive() && terms.mortgage_type != MortgageType::InterestOnly {
            if payment_interval == 0 {
                if !one_time_applied && payment_number == 1 {
                    additional_due = additional_amount;
                    one_time_applied = true;
                }
            } else if payment_number % payment_interval == 0 {
                additional_due = additional_amount;
            }
        }

        let (principal_payment, additional_principal) =
            clamp_to_balance(principal_payment, additional_due, balance);

        balance -= principal_payment + additional_principal;
        if balance.is_negative() {
            balance = Money::ZERO;
        }

        if additional_principal.is_positive() {
            let remaining_payments = total_payments - payment_number;
            interest_saved += Money::from_decimal(
                additional_principal.as_decimal()
                    * periodic_rate
                    * Decimal::from(remaining_payments),
            );
        }

        let regular_payment = principal_payment + interest_payment;
        let payment_date =
            start_date + Duration::days((payment_number - 1) as i64 * days_increment);

        schedule.push(AmortizationEntry {
            payment_number,
            payment_date,
            principal_payment,
            interest_payment,
            additional_principal_payment: additional_principal,
            regular_payment,
            total_payment: regular_payment + additional_principal,
            remaining_balance: balance,
            interest_rate: current_rate,
            interest_saved,
        });

        if balance.is_zero() {
            break;
        }
    }

    schedule
}

/// cap principal and additional portions so their sum never exceeds the
/// remaining balance
///
/// the additional portion shrinks first; when the principal portion alone
/// already overshoots, both portions scale down proportionally so the sum
/// lands exactly on the balance. the final payoff period goes through the
/// same path as a capped additional payment
fn clamp_to_balance(principal: Money, additional: Money, balance: Money) -> (Money, Money) {
    let total = principal + additional;
    if total <= balance {
        return (principal, additional);
    }

    if principal > balance {
        let ratio = balance.as_decimal() / total.as_decimal();
        let scaled_principal = Money::from_decimal(principal.as_decimal() * ratio);
        (scaled_principal, balance - scaled_principal)
    } else {
        (principal, balance - principal)
    }
}
