use rust_decimal::Decimal;
use tracing::debug;

use crate::config::MortgageConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{MortgageError, Result};
use crate::format::CurrencyFormat;
use crate::types::{LoanTerms, TermPreset, MONTHS_PER_YEAR};

/// fixed-rate mortgage calculator
///
/// Holds principal, term and annual rate. Every field stays non-negative:
/// the setters ignore negative input instead of failing. Payments are
/// derived on demand from the current values.
#[derive(Debug, Clone, PartialEq)]
pub struct MortgageCalculator {
    principal: Money,
    term_years: u32,
    annual_rate: Rate,
    format: CurrencyFormat,
}

impl Default for MortgageCalculator {
    fn default() -> Self {
        let terms = LoanTerms::default();
        Self {
            principal: terms.principal,
            term_years: terms.term_years,
            annual_rate: terms.annual_rate,
            format: CurrencyFormat::default(),
        }
    }
}

impl MortgageCalculator {
    /// calculator with $100,000 over 30 years at 3.5%
    pub fn new() -> Self {
        Self::default()
    }

    /// builder with strict validation
    pub fn builder() -> MortgageCalculatorBuilder {
        MortgageCalculatorBuilder::new()
    }

    /// start from configured defaults and currency format
    pub fn from_config(config: &MortgageConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            principal: config.defaults.principal,
            term_years: config.defaults.term_years,
            annual_rate: config.defaults.annual_rate,
            format: config.currency.clone(),
        })
    }

    pub fn set_amount(&mut self, amount: Money) {
        if amount.is_negative() {
            debug!(requested = %amount, retained = %self.principal, "ignoring negative principal");
            return;
        }
        self.principal = amount;
    }

    /// set the term in whole years; negative or oversized values are ignored
    pub fn set_years(&mut self, years: i64) {
        match u32::try_from(years) {
            Ok(years) => self.term_years = years,
            Err(_) => {
                debug!(requested = years, retained = self.term_years, "ignoring out of range term");
            }
        }
    }

    pub fn set_rate(&mut self, rate: Rate) {
        if rate.is_negative() {
            debug!(requested = %rate, retained = %self.annual_rate, "ignoring negative rate");
            return;
        }
        self.annual_rate = rate;
    }

    pub fn set_term(&mut self, preset: TermPreset) {
        self.term_years = preset.years();
    }

    /// apply all three setters, each one independently
    pub fn update(&mut self, amount: Money, years: i64, rate: Rate) {
        self.set_amount(amount);
        self.set_years(years);
        self.set_rate(rate);
    }

    pub fn amount(&self) -> Money {
        self.principal
    }

    pub fn years(&self) -> u32 {
        self.term_years
    }

    pub fn rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.format
    }

    /// number of monthly payments over the term
    pub fn payment_count(&self) -> u64 {
        u64::from(self.term_years) * u64::from(MONTHS_PER_YEAR)
    }

    /// level monthly payment, rounded to cents
    pub fn monthly_payment(&self) -> Result<Money> {
        let n = self.payment_count();
        if n == 0 {
            debug!(principal = %self.principal, rate = %self.annual_rate, "no payments for zero term");
            return Err(MortgageError::InvalidTerm {
                years: self.term_years,
            });
        }

        let principal = self.principal.as_decimal();
        let payment = if self.annual_rate.is_zero() {
            principal / Decimal::from(n)
        } else {
            level_payment(principal, self.annual_rate, n)?
        };

        Ok(Money::from_decimal(payment).round_to_cents())
    }

    /// rounded monthly payment times the payment count
    pub fn total_payment(&self) -> Result<Money> {
        let monthly = self.monthly_payment()?;
        let n = self.payment_count();
        monthly.checked_mul_count(n).ok_or_else(|| MortgageError::Overflow {
            message: format!("total of {} payments of {}", n, monthly),
        })
    }

    pub fn formatted_monthly_payment(&self) -> Result<String> {
        Ok(self.format.format(self.monthly_payment()?))
    }

    pub fn formatted_total_payment(&self) -> Result<String> {
        Ok(self.format.format(self.total_payment()?))
    }
}

/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
fn level_payment(principal: Decimal, annual_rate: Rate, n: u64) -> Result<Decimal> {
    let overflow = || MortgageError::Overflow {
        message: format!(
            "payment on {} at annual rate {} over {} months",
            principal, annual_rate, n
        ),
    };

    let monthly_rate = annual_rate.monthly_rate().as_decimal();
    let base = Decimal::ONE.checked_add(monthly_rate).ok_or_else(overflow)?;
    if base == Decimal::ONE {
        // rate below decimal precision
        return Ok(principal / Decimal::from(n));
    }

    // P * r with the division by 12 last, so exact half cents stay exact
    let interest = principal
        .checked_mul(annual_rate.as_decimal())
        .ok_or_else(overflow)?
        / Decimal::from(MONTHS_PER_YEAR);

    // past the decimal range c / (c - 1) is exactly 1 at this precision
    let factor = match checked_pow(base, n) {
        Some(compound) => compound
            .checked_div(compound - Decimal::ONE)
            .ok_or_else(overflow)?,
        None => Decimal::ONE,
    };

    interest.checked_mul(factor).ok_or_else(overflow)
}

/// `base^exp` by square-and-multiply, `None` once the value leaves decimal range
fn checked_pow(base: Decimal, mut exp: u64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut square = base;
    loop {
        if exp & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        exp >>= 1;
        if exp == 0 {
            return Some(result);
        }
        square = square.checked_mul(square)?;
    }
}

/// builder that rejects invalid values rather than ignoring them
#[derive(Debug, Default)]
pub struct MortgageCalculatorBuilder {
    amount: Option<Money>,
    years: Option<u32>,
    rate: Option<Rate>,
    format: Option<CurrencyFormat>,
}

impl MortgageCalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn years(mut self, years: u32) -> Self {
        self.years = Some(years);
        self
    }

    pub fn term(mut self, preset: TermPreset) -> Self {
        self.years = Some(preset.years());
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn currency_format(mut self, format: CurrencyFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// unset values fall back to the defaults
    pub fn build(self) -> Result<MortgageCalculator> {
        let defaults = LoanTerms::default();

        let principal = self.amount.unwrap_or(defaults.principal);
        if principal.is_negative() {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("amount must not be negative: {}", principal),
            });
        }

        let annual_rate = self.rate.unwrap_or(defaults.annual_rate);
        if annual_rate.is_negative() {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("rate must not be negative: {}", annual_rate),
            });
        }

        Ok(MortgageCalculator {
            principal,
            term_years: self.years.unwrap_or(defaults.term_years),
            annual_rate,
            format: self.format.unwrap_or_default(),
        })
    }
}
