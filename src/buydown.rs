use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::types::BuydownType;

/// temporary rate schedule covering the first years of a loan
///
/// immutable once derived from a standard rate; years beyond the duration
/// silently fall through to the permanent rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buydown {
    duration_years: u32,
    first_year_rate: Rate,
    second_year_rate: Option<Rate>,
    third_year_rate: Option<Rate>,
    permanent_rate: Rate,
}

impl Buydown {
    /// 2-1 buydown: two points off in year one, one point off in year two
    pub fn two_one(standard_rate: Rate) -> Self {
        Self {
            duration_years: 2,
            first_year_rate: standard_rate.less_points(dec!(2)),
            second_year_rate: Some(standard_rate.less_points(dec!(1))),
            third_year_rate: None,
            permanent_rate: standard_rate,
        }
    }

    /// 3-2-1 buydown: three, two, then one point off over the first three years
    pub fn three_two_one(standard_rate: Rate) -> Self {
        Self {
            duration_years: 3,
            first_year_rate: standard_rate.less_points(dec!(3)),
            second_year_rate: Some(standard_rate.less_points(dec!(2))),
            third_year_rate: Some(standard_rate.less_points(dec!(1))),
            permanent_rate: standard_rate,
        }
    }

    /// derive the schedule for a buydown type, `None` when there is no buydown
    pub fn for_type(buydown_type: BuydownType, standard_rate: Rate) -> Option<Self> {
        match buydown_type {
            BuydownType::None => None,
            BuydownType::TwoOne => Some(Self::two_one(standard_rate)),
            BuydownType::ThreeTwoOne => Some(Self::three_two_one(standard_rate)),
        }
    }

    pub fn duration_years(&self) -> u32 {
        self.duration_years
    }

    pub fn permanent_rate(&self) -> Rate {
        self.permanent_rate
    }

    /// effective annual rate for a 1-based payment year
    pub fn rate_for_year(&self, year: u32) -> Rate {
        match year {
            1 => self.first_year_rate,
            2 => self.second_year_rate.unwrap_or(self.permanent_rate),
            3 => self.third_year_rate.unwrap_or(self.permanent_rate),
            _ => self.permanent_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_one_rates() {
        let buydown = Buydown::two_one(Rate::from_percent(dec!(6.5)));
        assert_eq!(buydown.duration_years(), 2);
        assert_eq!(buydown.rate_for_year(1), Rate::from_percent(dec!(4.5)));
        assert_eq!(buydown.rate_for_year(2), Rate::from_percent(dec!(5.5)));
        assert_eq!(buydown.rate_for_year(3), Rate::from_percent(dec!(6.5)));
        assert_eq!(buydown.rate_for_year(30), Rate::from_percent(dec!(6.5)));
    }

    #[test]
    fn test_three_two_one_rates() {
        let buydown = Buydown::three_two_one(Rate::from_percent(dec!(7.0)));
        assert_eq!(buydown.duration_years(), 3);
        assert_eq!(buydown.rate_for_year(1), Rate::from_percent(dec!(4.0)));
        assert_eq!(buydown.rate_for_year(2), Rate::from_percent(dec!(5.0)));
        assert_eq!(buydown.rate_for_year(3), Rate::from_percent(dec!(6.0)));
        assert_eq!(buydown.rate_for_year(4), Rate::from_percent(dec!(7.0)));
    }

    #[test]
    fn test_for_type() {
        let rate = Rate::from_percent(dec!(6.5));
        assert!(Buydown::for_type(BuydownType::None, rate).is_none());

        let two_one = Buydown::for_type(BuydownType::TwoOne, rate).unwrap();
        assert_eq!(two_one.duration_years(), 2);
        assert_eq!(two_one.permanent_rate(), rate);

        let three_two_one = Buydown::for_type(BuydownType::ThreeTwoOne, rate).unwrap();
        assert_eq!(three_two_one.duration_years(), 3);
    }
}
