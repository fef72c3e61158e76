// src/problems/p005.rs
//
// Smallest positive number evenly divisible by every number from 1 to `max`.

use num::BigUint;
use crate::integer_math::factorization::{counter_union, prime_factor_counts};
use crate::integer_math::sequence::product;
use crate::integer_math::GCD;
use crate::problems::{Answer, Problem, SolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmallestMultipleArgs {
    pub max: u64,
}

pub fn problem() -> Problem<SmallestMultipleArgs> {
    let actual = SmallestMultipleArgs { max: 20 };
    Problem::new(5, actual.clone())
        .with_solution(232_792_560u32)
        .with_tests(vec![actual, SmallestMultipleArgs { max: 2_000 }])
        .list_as_solver("factor_union", factor_union)
        .list_as_solver("lcm_fold", lcm_fold)
}

/// Take every prime factor with the highest multiplicity it has in any n <= max.
fn factor_union(args: &SmallestMultipleArgs) -> Result<Answer, SolveError> {
    let counters = (1..=args.max)
        .map(prime_factor_counts)
        .collect::<Result<Vec<_>, _>>()?;
    let factors = counter_union(counters);
    Ok(product(
        factors
            .into_iter()
            .map(|(factor, count)| num::pow(BigUint::from(factor), count as usize)),
    ))
}

fn lcm_fold(args: &SmallestMultipleArgs) -> Result<Answer, SolveError> {
    if args.max == 0 {
        return Ok(BigUint::from(1u32));
    }
    Ok(GCD::find_lcm((1..=args.max).map(BigUint::from))?)
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
        for (max, expected) in [(0u64, 1u64), (1, 1), (2, 2), (10, 2520)] {
            let args = SmallestMultipleArgs { max };
            for solver in &problem().solvers {
                assert_eq!((solver.func)(&args).unwrap(), BigUint::from(expected), "{} with max {}", solver.name, max);
            }
        }
    }

    #[test]
    fn test_solvers_agree_beyond_u64() {
        let args = SmallestMultipleArgs { max: 100 };
        let problem = problem();
        assert_eq!((problem.solvers[0].func)(&args).unwrap(), (problem.solvers[1].func)(&args).unwrap());
    }
}
