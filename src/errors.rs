use num_rational::BigRational;
use thiserror::Error;

/// Evaluation failure. Its message is what the result line shows.
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Failed to convert '{0}' to float")]
    StrToFloat(String),
    #[error("Failed to convert '{0}' to integer")]
    StrToInt(String),
    #[error("Failed to convert fraction {0} to float")]
    RatioToFloat(BigRational),
    #[error("Failed to convert float {0} to ratio")]
    FloatToRatio(f64),
    #[error("'{0}' divided by zero")]
    DividedByZero(String),
    #[error("Result is not a finite number: {0}")]
    NotFinite(f64),

    #[error("Nor value neither operator found")]
    EmptyValue,
    #[error("Invalid operator '{0}'")]
    InvalidOp(String),
    #[error("Too many operators")]
    TooManyOps,
    #[error("Too many numbers")]
    InsufficientOps,
    #[error("Nothing to calculate")]
    EmptyExpression,

    #[error("Unknown button '{0}'")]
    UnknownKey(String),

    #[error("Invalid expression: {0}")]
    ParseFailed(String),

    #[error("unreachable")]
    Unreachable,
}

/// Shorthand used across the crate
pub type CalcResult<T> = Result<T, CalcError>;
