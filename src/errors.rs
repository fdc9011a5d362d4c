use thiserror::Error;

#[derive(Error, Debug)]
pub enum MortgageError {
    #[error("invalid term: {years} years gives no monthly payments")]
    InvalidTerm {
        years: u32,
    },

    #[error("calculation overflow: {message}")]
    Overflow {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MortgageError>;
