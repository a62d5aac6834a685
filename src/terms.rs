use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculationError, Result};
use crate::types::{AdditionalPaymentFrequency, BuydownType, MortgageType, PaymentFrequency};

/// allowed loan amount bounds
pub const MIN_LOAN_AMOUNT: Decimal = dec!(1000);
pub const MAX_LOAN_AMOUNT: Decimal = dec!(10_000_000);

/// allowed annual interest rate bounds, in percent
pub const MIN_INTEREST_RATE: Decimal = dec!(0.1);
pub const MAX_INTEREST_RATE: Decimal = dec!(30.0);

/// allowed loan term bounds, in whole years
pub const MIN_TERM_YEARS: u32 = 1;
pub const MAX_TERM_YEARS: u32 = 50;

/// tolerance for loan amount vs property value minus down payment
pub const LOAN_AMOUNT_TOLERANCE: Decimal = dec!(100);

/// validated input for a single loan scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    pub loan_amount: Money,
    pub interest_rate: Rate,
    pub loan_term_years: u32,
    #[serde(default)]
    pub down_payment: Option<Money>,
    #[serde(default)]
    pub property_value: Option<Money>,
    pub mortgage_type: MortgageType,
    pub payment_frequency: PaymentFrequency,
    #[serde(default)]
    pub buydown_type: BuydownType,
    #[serde(default)]
    pub additional_principal_payment: Money,
    #[serde(default)]
    pub additional_payment_frequency: AdditionalPaymentFrequency,
}

impl LoanTerms {
    /// create terms with no buydown and no additional principal
    pub fn new(
        loan_amount: Money,
        interest_rate: Rate,
        loan_term_years: u32,
        mortgage_type: MortgageType,
        payment_frequency: PaymentFrequency,
    ) -> Self {
        Self {
            loan_amount,
            interest_rate,
            loan_term_years,
            down_payment: None,
            property_value: None,
            mortgage_type,
            payment_frequency,
            buydown_type: BuydownType::None,
            additional_principal_payment: Money::ZERO,
            additional_payment_frequency: AdditionalPaymentFrequency::Monthly,
        }
    }

    pub fn with_buydown(mut self, buydown_type: BuydownType) -> Self {
        self.buydown_type = buydown_type;
        self
    }

    pub fn with_additional_principal(
        mut self,
        amount: Money,
        frequency: AdditionalPaymentFrequency,
    ) -> Self {
        self.additional_principal_payment = amount;
        self.additional_payment_frequency = frequency;
        self
    }

    pub fn with_property(mut self, property_value: Money, down_payment: Money) -> Self {
        self.property_value = Some(property_value);
        self.down_payment = Some(down_payment);
        self
    }

    /// theoretical payment count over the full term
    pub fn total_periods(&self) -> u32 {
        self.loan_term_years * self.payment_frequency.payments_per_year()
    }

    /// check bounds and cross-field consistency, first violation wins
    pub fn validate(&self) -> Result<()> {
        let amount = self.loan_amount.as_decimal();
        if amount < MIN_LOAN_AMOUNT || amount > MAX_LOAN_AMOUNT {
            return Err(CalculationError::LoanAmountOutOfRange {
                amount: self.loan_amount,
                min: Money::from_decimal(MIN_LOAN_AMOUNT),
                max: Money::from_decimal(MAX_LOAN_AMOUNT),
            });
        }

        let rate = self.interest_rate.as_percent();
        if rate < MIN_INTEREST_RATE || rate > MAX_INTEREST_RATE {
            return Err(CalculationError::InterestRateOutOfRange {
                rate: self.interest_rate,
                min: Rate::from_percent(MIN_INTEREST_RATE),
                max: Rate::from_percent(MAX_INTEREST_RATE),
            });
        }

        if self.loan_term_years < MIN_TERM_YEARS || self.loan_term_years > MAX_TERM_YEARS {
            return Err(CalculationError::LoanTermOutOfRange {
                years: self.loan_term_years,
                min: MIN_TERM_YEARS,
                max: MAX_TERM_YEARS,
            });
        }

        if let Some(down_payment) = self.down_payment {
            if down_payment.is_negative() {
                return Err(CalculationError::NegativeDownPayment {
                    amount: down_payment,
                });
            }
        }

        if let Some(property_value) = self.property_value {
            if property_value.is_negative() {
                return Err(CalculationError::NegativePropertyValue {
                    amount: property_value,
                });
            }
        }

        if self.additional_principal_payment.is_negative() {
            return Err(CalculationError::NegativeAdditionalPrincipal {
                amount: self.additional_principal_payment,
            });
        }

        if let (Some(down_payment), Some(property_value)) = (self.down_payment, self.property_value)
        {
            if down_payment > property_value {
                return Err(CalculationError::DownPaymentExceedsPropertyValue {
                    down_payment,
                    property_value,
                });
            }
        }

        if let Some(property_value) = self.property_value {
            let expected = property_value - self.down_payment.unwrap_or(Money::ZERO);
            let difference = (self.loan_amount - expected).abs();
            if difference.as_decimal() > LOAN_AMOUNT_TOLERANCE {
                return Err(CalculationError::LoanAmountMismatch {
                    loan_amount: self.loan_amount,
                    expected,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_terms() -> LoanTerms {
        LoanTerms::new(
            Money::from_major(400_000),
            Rate::from_percent(dec!(6.5)),
            30,
            MortgageType::Fixed,
            PaymentFrequency::Monthly,
        )
    }

    #[test]
    fn test_valid_terms_pass() {
        assert!(base_terms().validate().is_ok());
    }

    #[test]
    fn test_total_periods() {
        assert_eq!(base_terms().total_periods(), 360);

        let mut weekly = base_terms();
        weekly.payment_frequency = PaymentFrequency::Weekly;
        assert_eq!(weekly.total_periods(), 1560);
    }

    #[test]
    fn test_loan_amount_bounds() {
        let mut terms = base_terms();
        terms.loan_amount = Money::from_major(999);
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::LoanAmountOutOfRange { .. })
        ));

        terms.loan_amount = Money::from_major(10_000_001);
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::LoanAmountOutOfRange { .. })
        ));

        terms.loan_amount = Money::from_major(1000);
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_interest_rate_bounds() {
        let mut terms = base_terms();
        terms.interest_rate = Rate::from_percent(dec!(0.05));
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::InterestRateOutOfRange { .. })
        ));

        terms.interest_rate = Rate::from_percent(dec!(30.5));
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::InterestRateOutOfRange { .. })
        ));

        terms.interest_rate = Rate::from_percent(dec!(0.1));
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_term_bounds() {
        let mut terms = base_terms();
        terms.loan_term_years = 0;
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::LoanTermOutOfRange { .. })
        ));

        terms.loan_term_years = 51;
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::LoanTermOutOfRange { .. })
        ));

        terms.loan_term_years = 50;
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_down_payment_exceeds_property_value() {
        let terms = base_terms()
            .with_property(Money::from_major(500_000), Money::from_major(600_000));
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::DownPaymentExceedsPropertyValue { .. })
        ));
    }

    #[test]
    fn test_loan_amount_mismatch_tolerance() {
        // expected loan is 400,000; a $50 gap is inside the $100 tolerance
        let close = base_terms()
            .with_property(Money::from_major(500_000), Money::from_str_exact("100050").unwrap());
        assert!(close.validate().is_ok());

        let off = base_terms()
            .with_property(Money::from_major(500_000), Money::from_major(99_000));
        assert!(matches!(
            off.validate(),
            Err(CalculationError::LoanAmountMismatch { .. })
        ));
    }

    #[test]
    fn test_negative_additional_principal() {
        let terms = base_terms().with_additional_principal(
            Money::from_decimal(dec!(-100)),
            AdditionalPaymentFrequency::Monthly,
        );
        assert!(matches!(
            terms.validate(),
            Err(CalculationError::NegativeAdditionalPrincipal { .. })
        ));
    }

    #[test]
    fn test_wire_input_deserializes() {
        let json = r#"{
            "loanAmount": "400000",
            "interestRate": "6.5",
            "loanTermYears": 30,
            "downPayment": "100000",
            "propertyValue": "500000",
            "mortgageType": "FIXED",
            "paymentFrequency": "MONTHLY",
            "buydownType": "TWO_ONE",
            "additionalPrincipalPayment": "500",
            "additionalPaymentFrequency": "ONE_TIME"
        }"#;
        let terms: LoanTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms.loan_amount, Money::from_major(400_000));
        assert_eq!(terms.interest_rate, Rate::from_percent(dec!(6.5)));
        assert_eq!(terms.buydown_type, BuydownType::TwoOne);
        assert!(terms.additional_payment_frequency.is_one_time());
        assert!(terms.validate().is_ok());
    }

    #[test]
    fn test_wire_input_defaults_optional_fields() {
        let json = r#"{
            "loanAmount": "250000",
            "interestRate": "5.0",
            "loanTermYears": 15,
            "mortgageType": "FIXED",
            "paymentFrequency": "MONTHLY"
        }"#;
        let terms: LoanTerms = serde_json::from_str(json).unwrap();
        assert_eq!(terms.down_payment, None);
        assert_eq!(terms.property_value, None);
        assert_eq!(terms.buydown_type, BuydownType::None);
        assert_eq!(terms.additional_principal_payment, Money::ZERO);
        assert_eq!(
            terms.additional_payment_frequency,
            AdditionalPaymentFrequency::Monthly
        );
    }
}
