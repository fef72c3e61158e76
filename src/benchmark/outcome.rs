// src/benchmark/outcome.rs
//
// Short fixed labels for everything that can happen to a solver, and the
// dotted two-column line they are printed in.

use std::time::Duration;
use crate::problems::{Answer, SolveError, SOLVER_NAME_MAX_LEN};
use crate::timing::TimingError;

pub const CORRECT: &str = "correct";
pub const INCORRECT: &str = "incorrect";
pub const MEMORY_ERROR: &str = "memory error";
pub const OVERFLOW: &str = "overflow";
pub const FAILED: &str = "failed";
pub const TIMEOUT: &str = "timeout";
pub const BAD_BUDGET: &str = "bad budget";
pub const TOO_LONG_TO_PRINT: &str = "number too long";

const ALL_LABELS: [&str; 8] = [
    CORRECT,
    INCORRECT,
    MEMORY_ERROR,
    OVERFLOW,
    FAILED,
    TIMEOUT,
    BAD_BUDGET,
    TOO_LONG_TO_PRINT,
];

/// Width of the outcome column: wide enough for every label and for typical
/// answers, narrow enough to keep the table readable.
pub fn outcome_max_len() -> usize {
    ALL_LABELS.iter().map(|label| label.len()).max().unwrap_or(0)
}

/// `name.........outcome`, with the name padded to [`SOLVER_NAME_MAX_LEN`].
pub fn format_outcome_line(name: &str, outcome: &str) -> String {
    format!(
        "{name:.<name_width$}..{outcome:.>outcome_width$}",
        name = name,
        name_width = SOLVER_NAME_MAX_LEN,
        outcome = outcome,
        outcome_width = outcome_max_len(),
    )
}

pub fn format_millis(duration: Duration, decimals: usize) -> String {
    format!("{:.*}ms", decimals, duration.as_secs_f64() * 1000.0)
}

pub fn solve_error_label(error: &SolveError) -> &'static str {
    match error {
        SolveError::OutOfMemory(_) => MEMORY_ERROR,
        SolveError::Overflow => OVERFLOW,
        SolveError::Math(_) | SolveError::Unsupported(_) => FAILED,
    }
}

pub fn timing_error_label(error: &TimingError<SolveError>) -> &'static str {
    match error {
        TimingError::Configuration(_) => BAD_BUDGET,
        TimingError::Timeout { .. } => TIMEOUT,
        TimingError::MemoryExhausted(_) => MEMORY_ERROR,
        TimingError::CalleeFailed(_) => FAILED,
    }
}

/// `correct` if the answer matches the known solution, otherwise the answer
/// itself when it fits the outcome column.
pub fn answer_outcome(answer: &Answer, solution: Option<&Answer>) -> String {
    if solution == Some(answer) {
        return CORRECT.to_string();
    }
    let text = answer.to_string();
    if text.len() > outcome_max_len() {
        TOO_LONG_TO_PRINT.to_string()
    } else {
        text
    }
}
