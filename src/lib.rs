pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod input;
pub mod serialization;
pub mod types;

// re-export key types
pub use calculator::{MortgageCalculator, MortgageCalculatorBuilder};
pub use config::MortgageConfig;
pub use decimal::{Money, Rate};
pub use errors::{MortgageError, Result};
pub use format::CurrencyFormat;
pub use input::{MortgageInput, ParsedInput};
pub use serialization::MortgageSummary;
pub use types::{LoanTerms, TermPreset, MONTHS_PER_YEAR};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
