pub mod buydown;
pub mod calculator;
pub mod comparison;
pub mod decimal;
pub mod errors;
pub mod payment;
pub mod schedule;
pub mod terms;
pub mod types;

// re-export key types
pub use buydown::Buydown;
pub use calculator::{calculate, new_calculation_id, CalculationResult, LoanSummary};
pub use comparison::{
    compare, ComparisonResult, ComparisonSummary, MetricDifference, MAX_COMPARISON_SCENARIOS,
    MIN_COMPARISON_SCENARIOS,
};
pub use decimal::{Money, Rate};
pub use errors::{CalculationError, Result};
pub use payment::periodic_payment;
pub use schedule::{build_schedule, AmortizationEntry};
pub use terms::LoanTerms;
pub use types::{AdditionalPaymentFrequency, BuydownType, MortgageType, PaymentFrequency};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
