//! serialization support for calculator results
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::MortgageCalculator;
use crate::decimal::Money;
use crate::errors::Result;

/// inputs and results as shown on the results screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageSummary {
    pub amount: Money,
    pub years: u32,
    pub rate_percentage: Decimal,
    pub payment_count: u64,
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub formatted_amount: String,
    pub formatted_monthly_payment: String,
    pub formatted_total_payment: String,
}

impl MortgageSummary {
    pub fn from_calculator(calc: &MortgageCalculator) -> Result<Self> {
        let monthly_payment = calc.monthly_payment()?;
        let total_payment = calc.total_payment()?;
        let format = calc.currency_format();

        Ok(MortgageSummary {
            amount: calc.amount(),
            years: calc.years(),
            rate_percentage: calc.rate().as_percentage(),
            payment_count: calc.payment_count(),
            monthly_payment,
            total_payment,
            formatted_amount: format.format(calc.amount()),
            formatted_monthly_payment: format.format(monthly_payment),
            formatted_total_payment: format.format(total_payment),
        })
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl MortgageCalculator {
    pub fn summary(&self) -> Result<MortgageSummary> {
        MortgageSummary::from_calculator(self)
    }

    /// pretty json of the current summary
    pub fn json(&self) -> Result<String> {
        self.summary()?.to_json_pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MortgageError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_summary_of_defaults() {
        let summary = MortgageCalculator::new().summary().unwrap();
        assert_eq!(summary.years, 30);
        assert_eq!(summary.rate_percentage, dec!(3.5));
        assert_eq!(summary.payment_count, 360);
        assert_eq!(summary.formatted_amount, "$100,000.00");
        assert_eq!(summary.formatted_monthly_payment, "$449.04");
        assert_eq!(summary.formatted_total_payment, "$161,654.40");
    }

    #[test]
    fn test_json_fields() {
        let json = MortgageCalculator::new().json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["monthly_payment"], "449.04");
        assert_eq!(value["formatted_total_payment"], "$161,654.40");
        assert_eq!(value["years"], 30);
    }

    #[test]
    fn test_json_amounts_carry_cents() {
        let mut calc = MortgageCalculator::new();
        calc.update(Money::from_major(120_000), 10, crate::decimal::Rate::ZERO);
        let value: serde_json::Value = serde_json::from_str(&calc.json().unwrap()).unwrap();
        assert_eq!(value["monthly_payment"], "1000.00");
        assert_eq!(value["total_payment"], "120000.00");
    }

    #[test]
    fn test_summary_propagates_invalid_term() {
        let mut calc = MortgageCalculator::new();
        calc.set_years(0);
        assert!(matches!(calc.summary(), Err(MortgageError::InvalidTerm { .. })));
        assert!(calc.json().is_err());
    }
}
