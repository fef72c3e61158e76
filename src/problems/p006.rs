// src/problems/p006.rs
//
// Difference between the square of the sum and the sum of the squares of the
// numbers from 1 to `max`.

use num::BigUint;
use crate::integer_math::series::arithmetic_series_to;
use crate::problems::{Answer, Problem, SolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumSquareDifferenceArgs {
    pub max: u64,
}

pub fn problem() -> Problem<SumSquareDifferenceArgs> {
    let actual = SumSquareDifferenceArgs { max: 100 };
    Problem::new(6, actual.clone())
        .with_solution(25_164_150u32)
        .with_tests(vec![actual, SumSquareDifferenceArgs { max: 1_000_000 }])
        .list_as_solver("series_and_loop", series_and_loop)
        .list_as_solver("closed_form", closed_form)
}

fn series_and_loop(args: &SumSquareDifferenceArgs) -> Result<Answer, SolveError> {
    let stop = i64::try_from(args.max).ok().and_then(|m| m.checked_add(1)).ok_or(SolveError::Overflow)?;
    let sum = BigUint::try_from(arithmetic_series_to(stop)?).map_err(|_| SolveError::Overflow)?;
    let sum_of_squares: BigUint = (1..=args.max).map(|n| BigUint::from(n) * n).sum();
    Ok(&sum * &sum - sum_of_squares)
}

/// sum(n)^2 - sum(n^2) = n(n + 1)(n - 1)(3n + 2) / 12
fn closed_form(args: &SumSquareDifferenceArgs) -> Result<Answer, SolveError> {
    if args.max == 0 {
        return Ok(BigUint::from(0u32));
    }
    let n = BigUint::from(args.max);
    let difference = &n * (&n + 1u32) * (&n - 1u32) * (&n * 3u32 + 2u32) / 12u32;
    Ok(difference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::{Input, ProblemEntry};

    #[test]
    fn test_every_solver_finds_solution() {
        let problem = problem();
        for index in 0..problem.solvers.len() {
            let answer = problem.solve(index, Input::Actual).unwrap().unwrap();
            assert_eq!(Some(&answer), problem.solution());
        }
    }

    #[test]
    fn test_small_limits() {
        for (max, expected) in [(0u64, 0u64), (1, 0), (2, 4), (10, 2640)] {
            let args = SumSquareDifferenceArgs { max };
            for solver in &problem().solvers {
                assert_eq!((solver.func)(&args).unwrap(), BigUint::from(expected), "{} with max {}", solver.name, max);
            }
        }
    }

    #[test]
    fn test_solvers_agree_on_larger_input() {
        let args = SumSquareDifferenceArgs { max: 12_345 };
        let problem = problem();
        assert_eq!((problem.solvers[0].func)(&args).unwrap(), (problem.solvers[1].func)(&args).unwrap());
    }
}
