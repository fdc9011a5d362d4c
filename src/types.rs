use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// months in a year, used for both the monthly rate and the payment count
pub const MONTHS_PER_YEAR: u32 = 12;

/// term lengths offered on the input screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermPreset {
    TenYears,
    FifteenYears,
    ThirtyYears,
}

impl TermPreset {
    pub const ALL: [TermPreset; 3] = [
        TermPreset::TenYears,
        TermPreset::FifteenYears,
        TermPreset::ThirtyYears,
    ];

    pub fn years(&self) -> u32 {
        match self {
            TermPreset::TenYears => 10,
            TermPreset::FifteenYears => 15,
            TermPreset::ThirtyYears => 30,
        }
    }

    pub fn from_years(years: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.years() == years)
    }
}

/// loan parameters as plain data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    pub term_years: u32,
    pub annual_rate: Rate,
}

impl Default for LoanTerms {
    fn default() -> Self {
        Self {
            principal: Money::from_decimal(dec!(100000.00)),
            term_years: TermPreset::ThirtyYears.years(),
            annual_rate: Rate::from_decimal(dec!(0.035)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let years: Vec<u32> = TermPreset::ALL.iter().map(|p| p.years()).collect();
        assert_eq!(years, vec![10, 15, 30]);
        assert_eq!(TermPreset::from_years(15), Some(TermPreset::FifteenYears));
        assert_eq!(TermPreset::from_years(20), None);
    }

    #[test]
    fn test_default_terms() {
        let terms = LoanTerms::default();
        assert_eq!(terms.principal, Money::from_major(100_000));
        assert_eq!(terms.term_years, 30);
        assert_eq!(terms.annual_rate, Rate::from_bps(350));
    }
}
