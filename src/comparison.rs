use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::{calculate_validated, new_calculation_id, CalculationResult};
use crate::decimal::{round_half_up, Money};
use crate::errors::{CalculationError, Result};
use crate::terms::LoanTerms;

/// allowed number of scenarios in one comparison
pub const MIN_COMPARISON_SCENARIOS: usize = 2;
pub const MAX_COMPARISON_SCENARIOS: usize = 5;

/// side-by-side comparison of several loan scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// calculation results in input order
    pub mortgages: Vec<CalculationResult>,
    pub comparison_summary: ComparisonSummary,
    pub comparison_id: String,
}

impl ComparisonResult {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// best values across all scenarios plus detailed first-pair differences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub best_monthly_payment: Money,
    pub best_total_interest: Money,
    /// metric differences between the first two scenarios only
    pub differences: Vec<MetricDifference>,
}

/// named metric compared between two scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDifference {
    pub metric: String,
    pub mortgage1: Money,
    pub mortgage2: Money,
    pub difference: Money,
    /// absolute difference relative to the second value, zero when the
    /// second value is zero
    pub percentage_difference: Decimal,
}

/// calculate and compare between two and five scenarios
///
/// every scenario is validated before any calculation runs; results keep
/// the input order
pub fn compare(scenarios: &[LoanTerms], time: &SafeTimeProvider) -> Result<ComparisonResult> {
    tracing::info!("comparing {} mortgage options", scenarios.len());

    if scenarios.len() < MIN_COMPARISON_SCENARIOS || scenarios.len() > MAX_COMPARISON_SCENARIOS {
        return Err(CalculationError::ComparisonSizeOutOfRange {
            count: scenarios.len(),
            min: MIN_COMPARISON_SCENARIOS,
            max: MAX_COMPARISON_SCENARIOS,
        });
    }

    for terms in scenarios {
        terms.validate()?;
    }

    let start_date = time.now().date_naive();
    let mortgages: Vec<CalculationResult> = scenarios
        .iter()
        .map(|terms| calculate_validated(terms, start_date))
        .collect();

    let comparison_summary = build_summary(&mortgages);

    Ok(ComparisonResult {
        mortgages,
        comparison_summary,
        comparison_id: new_calculation_id(),
    })
}

fn build_summary(calculations: &[CalculationResult]) -> ComparisonSummary {
    let best_monthly_payment = calculations
        .iter()
        .map(|c| c.monthly_payment)
        .min()
        .unwrap_or(Money::ZERO);

    let best_total_interest = calculations
        .iter()
        .map(|c| c.total_interest)
        .min()
        .unwrap_or(Money::ZERO);

    // detailed differences cover the first pair only, not a full matrix
    let mut differences = Vec::new();
    if calculations.len() >= 2 {
        let first = &calculations[0];
        let second = &calculations[1];

        differences.push(metric_difference(
            "Monthly Payment",
            first.monthly_payment,
            second.monthly_payment,
        ));
        differences.push(metric_difference(
            "Total Interest",
            first.total_interest,
            second.total_interest,
        ));
        differences.push(metric_difference(
            "Total Amount Paid",
            first.summary.total_amount_paid,
            second.summary.total_amount_paid,
        ));
    }

    ComparisonSummary {
        best_monthly_payment,
        best_total_interest,
        differences,
    }
}

fn metric_difference(metric: &str, value1: Money, value2: Money) -> MetricDifference {
    let difference = (value1 - value2).abs();
    let percentage_difference = if value2.is_zero() {
        Decimal::ZERO
    } else {
        round_half_up(
            difference.as_decimal() / value2.as_decimal() * Decimal::ONE_HUNDRED,
            2,
        )
    };

    MetricDifference {
        metric: metric.to_string(),
        mortgage1: value1,
        mortgage2: value2,
        difference,
        percentage_difference,
    }
}
