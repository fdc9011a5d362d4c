use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::MortgageCalculator;
use crate::decimal::{Money, Rate};

/// raw text of the input form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MortgageInput {
    pub amount: String,
    pub years: String,
    pub rate: String,
}

/// form values after lenient parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInput {
    pub amount: Money,
    pub years: i64,
    pub rate: Rate,
}

impl MortgageInput {
    pub fn new(amount: impl Into<String>, years: impl Into<String>, rate: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            years: years.into(),
            rate: rate.into(),
        }
    }

    /// pre-fill the form from the calculator's current values
    pub fn from_calculator(calc: &MortgageCalculator) -> Self {
        Self {
            amount: calc.amount().to_string(),
            years: calc.years().to_string(),
            rate: calc.rate().as_decimal().to_string(),
        }
    }

    /// parse every field; text that does not parse counts as zero
    pub fn parse(&self) -> ParsedInput {
        ParsedInput {
            amount: Money::from_decimal(parse_decimal("amount", &clean_amount(&self.amount))),
            years: parse_years(&self.years),
            rate: Rate::from_decimal(parse_decimal("rate", self.rate.trim())),
        }
    }

    /// parse and push the values into the calculator
    pub fn apply(&self, calc: &mut MortgageCalculator) -> ParsedInput {
        let parsed = self.parse();
        calc.update(parsed.amount, parsed.years, parsed.rate);
        parsed
    }
}

fn clean_amount(text: &str) -> String {
    let trimmed = text.trim();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);
    format!("{}{}", sign, rest.replace(',', ""))
}

fn parse_decimal(field: &'static str, text: &str) -> Decimal {
    Decimal::from_str(text).unwrap_or_else(|_| {
        debug!(field, text, "unparseable input, using zero");
        Decimal::ZERO
    })
}

fn parse_years(text: &str) -> i64 {
    text.trim().parse().unwrap_or_else(|_| {
        debug!(field = "years", text, "unparseable input, using zero");
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_prefill_round_trips() {
        let calc = MortgageCalculator::new();
        let input = MortgageInput::from_calculator(&calc);
        assert_eq!(input.years, "30");
        assert_eq!(input.rate, "0.035");

        let parsed = input.parse();
        assert_eq!(parsed.amount, calc.amount());
        assert_eq!(parsed.years, 30);
        assert_eq!(parsed.rate, calc.rate());
    }

    #[test]
    fn test_currency_decorations_in_amount() {
        let parsed = MortgageInput::new(" $250,000.50 ", "15", "0.05").parse();
        assert_eq!(parsed.amount, Money::from_decimal(dec!(250000.50)));
        assert_eq!(parsed.years, 15);
        assert_eq!(parsed.rate, Rate::from_decimal(dec!(0.05)));
    }

    #[test]
    fn test_garbage_becomes_zero() {
        let parsed = MortgageInput::new("lots", "", "abc").parse();
        assert_eq!(parsed.amount, Money::ZERO);
        assert_eq!(parsed.years, 0);
        assert_eq!(parsed.rate, Rate::ZERO);
    }

    #[test]
    fn test_apply_updates_calculator() {
        let mut calc = MortgageCalculator::new();
        MortgageInput::new("120000", "10", "0").apply(&mut calc);
        assert_eq!(calc.formatted_monthly_payment().unwrap(), "$1,000.00");
    }

    #[test]
    fn test_apply_ignores_negative_fields() {
        let mut calc = MortgageCalculator::new();
        let parsed = MortgageInput::new("-$5", "-3", "0.04").apply(&mut calc);
        assert_eq!(parsed.amount, Money::from_major(-5));
        assert_eq!(calc.amount(), Money::from_major(100_000));
        assert_eq!(calc.years(), 30);
        assert_eq!(calc.rate(), Rate::from_decimal(dec!(0.04)));
    }
}
