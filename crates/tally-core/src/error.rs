//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Client input that cannot become an expense, or an unknown report period name
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True when the error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
