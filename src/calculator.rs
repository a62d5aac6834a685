use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::buydown::Buydown;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::payment::periodic_payment;
use crate::schedule::{build_schedule, AmortizationEntry};
use crate::terms::LoanTerms;
use crate::types::PaymentFrequency;

/// complete calculation output for a single loan scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// first-period total payment, the number shown to the borrower
    pub monthly_payment: Money,
    pub total_interest: Money,
    /// theoretical period count over the full term
    pub total_payments: u32,
    pub amortization_schedule: Vec<AmortizationEntry>,
    pub summary: LoanSummary,
    pub calculation_id: String,
}

impl CalculationResult {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// headline figures for a calculated loan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanSummary {
    pub loan_amount: Money,
    pub total_interest_paid: Money,
    pub total_amount_paid: Money,
    pub monthly_payment: Money,
    pub interest_rate: Rate,
    pub loan_term_years: u32,
    pub payment_frequency: PaymentFrequency,
}

/// run a full calculation for one scenario
///
/// validates the terms, computes the base payment at the permanent rate,
/// builds the amortization schedule and aggregates totals from it. the
/// schedule start date comes from the time provider
pub fn calculate(terms: &LoanTerms, time: &SafeTimeProvider) -> Result<CalculationResult> {
    tracing::info!("calculating mortgage for loan amount {}", terms.loan_amount);
    terms.validate()?;

    let start_date = time.now().date_naive();
    Ok(calculate_validated(terms, start_date))
}

/// calculation body shared by the single and comparison paths, terms are
/// already validated
pub(crate) fn calculate_validated(terms: &LoanTerms, start_date: NaiveDate) -> CalculationResult {
    // payments vary during a buydown, so the base payment always amortizes
    // at the permanent rate
    let buydown = Buydown::for_type(terms.buydown_type, terms.interest_rate);
    let calculation_rate = match buydown {
        Some(buydown) => buydown.permanent_rate(),
        None => terms.interest_rate,
    };

    let base_payment = periodic_payment(
        terms.loan_amount,
        calculation_rate,
        terms.payment_frequency,
        terms.loan_term_years,
        terms.mortgage_type,
    );

    let schedule = build_schedule(terms, base_payment, start_date);

    let total_interest = schedule
        .iter()
        .fold(Money::ZERO, |acc, entry| acc + entry.interest_payment);
    let total_amount_paid = terms.loan_amount + total_interest;

    // the first period reflects any buydown discount and first extra payment
    let monthly_payment = match schedule.first() {
        Some(entry) => entry.total_payment,
        None => base_payment,
    };

    let summary = LoanSummary {
        loan_amount: terms.loan_amount,
        total_interest_paid: total_interest,
        total_amount_paid,
        monthly_payment,
        interest_rate: terms.interest_rate,
        loan_term_years: terms.loan_term_years,
        payment_frequency: terms.payment_frequency,
    };

    CalculationResult {
        monthly_payment,
        total_interest,
        total_payments: terms.total_periods(),
        amortization_schedule: schedule,
        summary,
        calculation_id: new_calculation_id(),
    }
}

/// short display identifier, unique enough for concurrent casual use
pub fn new_calculation_id() -> String {
    format!("calc_{}", &Uuid::new_v4().simple().to_string()[..8])
}
