use thiserror::Error;

use crate::decimal::{Money, Rate};

/// input validation failures, the only errors the engine raises
///
/// every calculation either fully succeeds or fails here before any
/// arithmetic begins; there is no partial-failure state and nothing to retry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("loan amount out of range: {amount} (allowed {min} to {max})")]
    LoanAmountOutOfRange {
        amount: Money,
        min: Money,
        max: Money,
    },

    #[error("interest rate out of range: {rate} (allowed {min} to {max})")]
    InterestRateOutOfRange {
        rate: Rate,
        min: Rate,
        max: Rate,
    },

    #[error("loan term out of range: {years} years (allowed {min} to {max})")]
    LoanTermOutOfRange {
        years: u32,
        min: u32,
        max: u32,
    },

    #[error("down payment cannot be negative: {amount}")]
    NegativeDownPayment {
        amount: Money,
    },

    #[error("property value cannot be negative: {amount}")]
    NegativePropertyValue {
        amount: Money,
    },

    #[error("additional principal payment cannot be negative: {amount}")]
    NegativeAdditionalPrincipal {
        amount: Money,
    },

    #[error("down payment {down_payment} cannot be greater than property value {property_value}")]
    DownPaymentExceedsPropertyValue {
        down_payment: Money,
        property_value: Money,
    },

    #[error("loan amount {loan_amount} should equal property value minus down payment ({expected})")]
    LoanAmountMismatch {
        loan_amount: Money,
        expected: Money,
    },

    #[error("can compare between {min} and {max} mortgages, {count} provided")]
    ComparisonSizeOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, CalculationError>;
