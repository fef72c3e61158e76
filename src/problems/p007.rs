// src/problems/p007.rs
//
// The `ordinal`-th prime number, counting 2 as the first.

use num::BigUint;
use crate::integer_math::primes::{nth_prime_upper_bound, primes, primes_below};
use crate::integer_math::sequence::nth_item;
use crate::integer_math::MathError;
use crate::problems::{Answer, Problem, SolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NthPrimeArgs {
    pub ordinal: u64,
}

impl NthPrimeArgs {
    fn index(&self) -> Result<usize, SolveError> {
        if self.ordinal == 0 {
            return Err(MathError::NotPositive.into());
        }
        usize::try_from(self.ordinal - 1).map_err(|_| SolveError::Overflow)
    }
}

pub fn problem() -> Problem<NthPrimeArgs> {
    let actual = NthPrimeArgs { ordinal: 10_001 };
    Problem::new(7, actual.clone())
        .with_solution(104_743u32)
        .with_tests(vec![actual, NthPrimeArgs { ordinal: 100_000 }])
        .list_as_solver("trial_division", trial_division)
        .list_as_solver("bounded_sieve", bounded_sieve)
}

fn trial_division(args: &NthPrimeArgs) -> Result<Answer, SolveError> {
    let index = args.index()?;
    let index = isize::try_from(index).map_err(|_| SolveError::Overflow)?;
    Ok(BigUint::from(nth_item(primes(), index)?))
}

/// Sieve up to a proven upper bound for the nth prime, then index into it.
fn bounded_sieve(args: &NthPrimeArgs) -> Result<Answer, SolveError> {
    let index = args.index()?;
    let limit = nth_prime_upper_bound(args.ordinal)
        .checked_add(1)
        .ok_or(SolveError::Overflow)?;
    let primes = primes_below(limit)?;
    let nth = primes.get(index).copied().ok_or(MathError::IndexOutOfRange)?;
    Ok(BigUint::from(nth))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problems::{Input, ProblemEntry};
    use crate::timing::{measure_minimum, SingleArgTimer, StoppingBudget, TimingError};

    #[test]
    fn test_every_solver_finds_solution() {
        let problem = problem();
        for index in 0..problem.solvers.len() {
            let answer = problem.solve(index, Input::Actual).unwrap().unwrap();
            assert_eq!(Some(&answer), problem.solution());
        }
    }

    #[test]
    fn test_first_ordinals() {
        for (ordinal, expected) in [(1u64, 2u64), (2, 3), (6, 13), (100, 541)] {
            let args = NthPrimeArgs { ordinal };
            for solver in &problem().solvers {
                assert_eq!((solver.func)(&args).unwrap(), BigUint::from(expected), "{} for #{}", solver.name, ordinal);
            }
        }
    }

    #[test]
    fn test_zeroth_prime_is_rejected() {
        let args = NthPrimeArgs { ordinal: 0 };
        for solver in &problem().solvers {
            assert!(matches!((solver.func)(&args), Err(SolveError::Math(MathError::NotPositive))));
        }
    }

    #[test]
    fn test_sieve_too_large_for_memory() {
        let args = NthPrimeArgs { ordinal: 10u64.pow(15) };
        assert!(matches!(bounded_sieve(&args), Err(SolveError::OutOfMemory(_))));

        let mut timer = SingleArgTimer::new(bounded_sieve, args)
            .with_reclamation_pause(false);
        let result = measure_minimum(&mut timer, &StoppingBudget::new().max_executions(1));
        assert!(matches!(result, Err(TimingError::MemoryExhausted(SolveError::OutOfMemory(_)))));
    }
}
