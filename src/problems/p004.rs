// src/problems/p004.rs
//
// Largest palindrome made from the product of two `num_digits`-digit numbers.

use num::BigUint;
use crate::integer_math::digits::is_decimal_palindrome;
use crate::problems::{Answer, Problem, SolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeProductArgs {
    pub num_digits: u32,
}

impl PalindromeProductArgs {
    /// The range `start..stop` of factors with exactly `num_digits` digits.
    fn factor_range(&self) -> Result<(u64, u64), SolveError> {
        if self.num_digits == 0 || self.num_digits > 9 {
            return Err(SolveError::Unsupported(format!("{} digit factors", self.num_digits)));
        }
        Ok((10u64.pow(self.num_digits - 1), 10u64.pow(self.num_digits)))
    }
}

pub fn problem() -> Problem<PalindromeProductArgs> {
    let actual = PalindromeProductArgs { num_digits: 3 };
    Problem::new(4, actual.clone())
        .with_solution(906_609u32)
        .with_tests(vec![actual, PalindromeProductArgs { num_digits: 4 }])
        .list_as_solver("all_products", all_products)
        .list_as_solver("descending_search", descending_search)
}

fn all_products(args: &PalindromeProductArgs) -> Result<Answer, SolveError> {
    let (start, stop) = args.factor_range()?;
    let largest = (start..stop)
        .flat_map(|a| (a..stop).map(move |b| a * b))
        .filter(|&n| is_decimal_palindrome(n))
        .max()
        .ok_or_else(|| SolveError::Unsupported("no palindromic product".to_string()))?;
    Ok(BigUint::from(largest))
}

/// Walk both factors downwards and stop as soon as no remaining product can
/// beat the best palindrome found so far.
fn descending_search(args: &PalindromeProductArgs) -> Result<Answer, SolveError> {
    let (start, stop) = args.factor_range()?;
    let mut best: Option<u64> = None;
    for a in (start..stop).rev() {
        if best.is_some_and(|best| a * (stop - 1) <= best) {
            break;
        }
        for b in (a..stop).rev() {
            let product = a * b;
            if best.is_some_and(|best| product <= best) {
                break;
            }
            if is_decimal_palindrome(product) {
                best = Some(product);
                break;
            }
        }
    }
    best.map(BigUint::from)
        .ok_or_else(|| SolveError::Unsupported("no palindromic product".to_string()))
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
    fn test_smaller_digit_counts() {
        for (num_digits, expected) in [(1u32, 9u64), (2, 9009)] {
            let args = PalindromeProductArgs { num_digits };
            for solver in &problem().solvers {
                assert_eq!((solver.func)(&args).unwrap(), BigUint::from(expected), "{}", solver.name);
            }
        }
    }

    #[test]
    fn test_unsupported_digit_counts() {
        for num_digits in [0, 10] {
            let args = PalindromeProductArgs { num_digits };
            for solver in &problem().solvers {
                assert!(matches!((solver.func)(&args), Err(SolveError::Unsupported(_))));
            }
        }
    }
}
