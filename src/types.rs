use serde::{Deserialize, Serialize};

/// mortgage product types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MortgageType {
    /// fixed rate, standard amortizing payments
    Fixed,
    /// variable rate, amortizes like fixed at the stated rate
    Variable,
    /// interest-only payments, principal due in full at maturity
    InterestOnly,
}

impl MortgageType {
    pub fn display_name(&self) -> &'static str {
        match self {
            MortgageType::Fixed => "Fixed Rate Mortgage",
            MortgageType::Variable => "Variable Rate Mortgage",
            MortgageType::InterestOnly => "Interest Only Mortgage",
        }
    }
}

/// regular payment frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::BiWeekly => "Bi-weekly",
            PaymentFrequency::Weekly => "Weekly",
        }
    }
}

/// temporary rate buydown types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuydownType {
    /// no buydown, stated rate applies from period one
    #[default]
    None,
    /// 2-1: two points off in year one, one point off in year two
    TwoOne,
    /// 3-2-1: three, two, then one point off over the first three years
    ThreeTwoOne,
}

impl BuydownType {
    pub fn display_name(&self) -> &'static str {
        match self {
            BuydownType::None => "No Buydown",
            BuydownType::TwoOne => "2-1 Buydown",
            BuydownType::ThreeTwoOne => "3-2-1 Buydown",
        }
    }
}

/// frequency of additional principal payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdditionalPaymentFrequency {
    #[default]
    Monthly,
    BiWeekly,
    Quarterly,
    SemiAnnually,
    Annually,
    /// single payment, applied once on the first eligible period
    OneTime,
}

impl AdditionalPaymentFrequency {
    /// additional payments per year (0 for one-time)
    pub fn payments_per_year(&self) -> u32 {
        match self {
            AdditionalPaymentFrequency::Monthly => 12,
            AdditionalPaymentFrequency::BiWeekly => 26,
            AdditionalPaymentFrequency::Quarterly => 4,
            AdditionalPaymentFrequency::SemiAnnually => 2,
            AdditionalPaymentFrequency::Annually => 1,
            AdditionalPaymentFrequency::OneTime => 0,
        }
    }

    pub fn is_one_time(&self) -> bool {
        matches!(self, AdditionalPaymentFrequency::OneTime)
    }

    /// regular payment periods between additional payments (0 for one-time)
    ///
    /// falls back to once per year when the regular frequency is not evenly
    /// divisible by this one
    pub fn payment_interval(&self, regular: PaymentFrequency) -> u32 {
        if self.is_one_time() {
            return 0;
        }

        let regular_per_year = regular.payments_per_year();
        let per_year = self.payments_per_year();

        if per_year == 0 || regular_per_year % per_year != 0 {
            return regular_per_year;
        }

        regular_per_year / per_year
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AdditionalPaymentFrequency::Monthly => "Monthly",
            AdditionalPaymentFrequency::BiWeekly => "Bi-Weekly",
            AdditionalPaymentFrequency::Quarterly => "Quarterly",
            AdditionalPaymentFrequency::SemiAnnually => "Semi-Annually",
            AdditionalPaymentFrequency::Annually => "Annually",
            AdditionalPaymentFrequency::OneTime => "One-Time Payment",
        }
    }
}
