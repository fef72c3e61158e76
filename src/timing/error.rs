// src/timing/error.rs

use std::time::Duration;
use thiserror::Error;

/// Lets the harness tell memory exhaustion apart from every other callee error.
pub trait CalleeError: std::error::Error + 'static {
    fn is_memory_exhaustion(&self) -> bool {
        false
    }
}

impl CalleeError for std::collections::TryReserveError {
    fn is_memory_exhaustion(&self) -> bool {
        true
    }
}

/// Rejected stopping budgets.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BudgetError {
    #[error("at least one termination condition must be used")]
    NoLimits,

    #[error("max_executions must be positive")]
    ZeroExecutions,

    #[error("timeout must be positive")]
    ZeroTimeout,

    #[error("{name} must be a finite, non-negative number of seconds (got {value})")]
    InvalidSeconds { name: &'static str, value: f64 },
}

/// Why a callee failed, keeping the callee's own error as the error source.
#[derive(Debug, Error)]
pub enum CalleeFailure<E> {
    #[error("callee returned an error")]
    Error(#[source] E),

    #[error("callee panicked: {0}")]
    Panic(String),
}

impl<E> CalleeFailure<E> {
    /// The callee's own error, if it returned one instead of panicking.
    pub fn cause(&self) -> Option<&E> {
        match self {
            CalleeFailure::Error(e) => Some(e),
            CalleeFailure::Panic(_) => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum TimingError<E> {
    #[error("invalid stopping budget: {0}")]
    Configuration(#[from] BudgetError),

    #[error("timed out after {elapsed:?} (limit {limit:?})")]
    Timeout { elapsed: Duration, limit: Duration },

    /// The callee's memory exhaustion error, passed through unchanged.
    #[error("callee exhausted memory: {0}")]
    MemoryExhausted(E),

    #[error(transparent)]
    CalleeFailed(CalleeFailure<E>),
}

impl<E: CalleeError> TimingError<E> {
    /// Sort an error returned by the callee into memory exhaustion or failure.
    pub fn from_callee(error: E) -> Self {
        if error.is_memory_exhaustion() {
            TimingError::MemoryExhausted(error)
        } else {
            TimingError::CalleeFailed(CalleeFailure::Error(error))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error)]
    #[error("bad value")]
    struct BadValue;

    impl CalleeError for BadValue {}

    #[test]
    fn test_plain_callee_error_is_wrapped() {
        let err = TimingError::from_callee(BadValue);
        match &err {
            TimingError::CalleeFailed(failure) => assert!(failure.cause().is_some()),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.source().map(|s| s.to_string()), Some("bad value".to_string()));
    }

    #[test]
    fn test_try_reserve_error_is_memory_exhaustion() {
        let reserve_err = Vec::<u8>::new().try_reserve(usize::MAX).unwrap_err();
        let err = TimingError::from_callee(reserve_err.clone());
        match err {
            TimingError::MemoryExhausted(inner) => assert_eq!(inner, reserve_err),
            other => panic!("unexpected {:?}", other),
        }
    }
}
