// src/integer_math/series.rs

use crate::integer_math::error::MathError;

/// Sum of every integer in `start..stop` taken in increments of `step`.
///
/// Evaluated in closed form, so huge ranges cost no more than small ones.
pub fn arithmetic_series(start: i64, stop: i64, step: i64) -> Result<i128, MathError> {
    if start > stop {
        return Err(MathError::InvalidRange { start, stop });
    }
    if step <= 0 {
        return Err(MathError::NonPositiveStep(step));
    }
    if start == stop {
        return Ok(0);
    }

    let (start, stop, step) = (start as i128, stop as i128, step as i128);
    let num_elements = (stop - start - 1) / step + 1;
    let first = start;
    let last = start + (num_elements - 1) * step;

    // The average element equals the average of the first and the last one.
    Ok(num_elements * (first + last) / 2)
}

/// Sum of `0..stop`.
pub fn arithmetic_series_to(stop: i64) -> Result<i128, MathError> {
    arithmetic_series(0, stop, 1)
}
