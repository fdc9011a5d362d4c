use serde::{Deserialize, Serialize};

use crate::errors::{MortgageError, Result};
use crate::format::CurrencyFormat;
use crate::types::{LoanTerms, TermPreset};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageConfig {
    /// values a fresh calculator starts from
    pub defaults: LoanTerms,
    /// term lengths (years) offered for selection
    pub term_options: Vec<u32>,
    pub currency: CurrencyFormat,
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            defaults: LoanTerms::default(),
            term_options: TermPreset::ALL.iter().map(|p| p.years()).collect(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl MortgageConfig {
    /// parse and validate a json document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: MortgageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// check defaults and options are usable
    pub fn validate(&self) -> Result<()> {
        if self.defaults.principal.is_negative() {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("default principal is negative: {}", self.defaults.principal),
            });
        }

        if self.defaults.annual_rate.is_negative() {
            return Err(MortgageError::InvalidConfiguration {
                message: format!("default rate is negative: {}", self.defaults.annual_rate),
            });
        }

        if self.defaults.term_years == 0 {
            return Err(MortgageError::InvalidConfiguration {
                message: "default term must be at least one year".to_string(),
            });
        }

        if self.term_options.is_empty() {
            return Err(MortgageError::InvalidConfiguration {
                message: "at least one term option required".to_string(),
            });
        }

        if self.term_options.contains(&0) {
            return Err(MortgageError::InvalidConfiguration {
                message: "term options must be at least one year".to_string(),
            });
        }

        if self.currency.fraction_digits > 28 {
            return Err(MortgageError::InvalidConfiguration {
                message: format!(
                    "currency fraction digits out of range: {}",
                    self.currency.fraction_digits
                ),
            });
        }

        Ok(())
    }

    /// whether `years` is one of the selectable terms
    pub fn is_term_option(&self, years: u32) -> bool {
        self.term_options.contains(&years)
    }
}
