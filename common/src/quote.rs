use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuoteError {
    #[error("quote provider unavailable: {0}")]
    Unavailable(String),
}

/// Source of the greeting printed by the entry point.
pub trait QuoteProvider {
    fn hello(&self) -> Result<String, QuoteError>;
}
