// src/problems/p003.rs
//
// Largest prime factor of `number`.

use num::BigUint;
use crate::integer_math::factorization::prime_factors;
use crate::integer_math::primes::primes;
use crate::integer_math::sequence::nth_item;
use crate::integer_math::MathError;
use crate::problems::{Answer, Problem, SolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargestPrimeFactorArgs {
    pub number: u64,
}

pub fn problem() -> Problem<LargestPrimeFactorArgs> {
    let actual = LargestPrimeFactorArgs { number: 600_851_475_143 };
    Problem::new(3, actual.clone())
        .with_solution(6857u32)
        .with_tests(vec![
            actual,
            // 2^3 * 3^5 * 7919 * 104729
            LargestPrimeFactorArgs { number: 1_612_254_360_744 },
        ])
        .list_as_solver("last_prime_factor", last_prime_factor)
        .list_as_solver("divide_out_primes", divide_out_primes)
}

fn last_prime_factor(args: &LargestPrimeFactorArgs) -> Result<Answer, SolveError> {
    let largest = nth_item(prime_factors(args.number)?, -1)?;
    Ok(BigUint::from(largest))
}

/// Divide out each prime from the incremental generator until the cofactor is prime.
fn divide_out_primes(args: &LargestPrimeFactorArgs) -> Result<Answer, SolveError> {
    match args.number {
        0 => return Err(MathError::NotPositive.into()),
        1 => return Err(MathError::IndexOutOfRange.into()),
        _ => {}
    }
    let mut remaining = args.number;
    let mut largest = 1;
    for p in primes() {
        if p.saturating_mul(p) > remaining {
            break;
        }
        while remaining % p == 0 {
            remaining /= p;
            largest = p;
        }
    }
    if remaining > 1 {
        largest = remaining;
    }
    Ok(BigUint::from(largest))
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
    fn test_small_numbers() {
        for (number, expected) in [(2u64, 2u64), (12, 3), (13, 13), (13_195, 29), (1024, 2)] {
            let args = LargestPrimeFactorArgs { number };
            for solver in &problem().solvers {
                assert_eq!((solver.func)(&args).unwrap(), BigUint::from(expected), "{} on {}", solver.name, number);
            }
        }
    }

    #[test]
    fn test_one_and_zero() {
        let problem = problem();
        let one = LargestPrimeFactorArgs { number: 1 };
        // 1 has no prime factors at all.
        for solver in &problem.solvers {
            assert!(matches!((solver.func)(&one), Err(SolveError::Math(MathError::IndexOutOfRange))));
        }

        let zero = LargestPrimeFactorArgs { number: 0 };
        for solver in &problem.solvers {
            assert!(matches!((solver.func)(&zero), Err(SolveError::Math(MathError::NotPositive))));
        }
    }
}
