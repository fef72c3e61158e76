// src/integer_math/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("the start of the range must not be greater than the end ({start} > {stop})")]
    InvalidRange { start: i64, stop: i64 },

    #[error("a positive step is required (got {0})")]
    NonPositiveStep(i64),

    #[error("a positive integer is required")]
    NotPositive,

    #[error("at least one number is required")]
    Empty,

    #[error("index out of range")]
    IndexOutOfRange,
}
