use thiserror::Error;

/// Rejected user input. Every variant is shown to the user as an input error.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InvalidInput {
    #[error("'{0}' is not an integer number")]
    NotAnInteger(String),
    #[error("values cannot be negative: {0}")]
    Negative(String),
    #[error("value is too large: {0}")]
    TooLarge(String),
    #[error("minutes must be between 0 and 59")]
    MinutesOutOfRange,
    #[error("workday cannot be zero minutes")]
    ZeroWorkday,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("an unexpected error occurred: {0}")]
    Unexpected(String),
}

pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    /// Title of the notice presenting this error.
    pub fn title(&self) -> &'static str {
        match self {
            CalcError::InvalidInput(_) => "Input Error",
            CalcError::Unexpected(_) => "Error",
        }
    }
}
