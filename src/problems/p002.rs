// src/problems/p002.rs
//
// Even Fibonacci numbers: sum the even Fibonacci numbers not exceeding `max`.
//
// A Fibonacci number is even iff its index is divisible by three.

use num::{BigUint, Integer, Zero};
use crate::integer_math::fibonacci::fibonacci_numbers;
use crate::problems::{Answer, Problem, SolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvenFibonacciArgs {
    pub max: BigUint,
}

pub fn problem() -> Problem<EvenFibonacciArgs> {
    let actual = EvenFibonacciArgs { max: BigUint::from(4_000_000u32) };
    Problem::new(2, actual.clone())
        .with_solution(4_613_732u32)
        .with_tests(vec![
            actual,
            EvenFibonacciArgs { max: num::pow(BigUint::from(10u32), 5000) },
        ])
        .list_as_solver("check_parity", check_parity)
        .list_as_solver("every_third", every_third)
        .list_as_solver("without_summation", without_summation)
}

fn check_parity(args: &EvenFibonacciArgs) -> Result<Answer, SolveError> {
    Ok(fibonacci_numbers()
        .take_while(|fib| fib <= &args.max)
        .filter(|fib| fib.is_even())
        .sum())
}

fn every_third(args: &EvenFibonacciArgs) -> Result<Answer, SolveError> {
    Ok(fibonacci_numbers()
        .take_while(|fib| fib <= &args.max)
        .step_by(3)
        .sum())
}

/// F(3n + 2) = F(3n + 1) + F(3n) = 2F(3n) + F(3n - 1) = ... = 2(F(3n) + F(3n - 3) + ... + F(3)) + 1,
/// so F(3n + 2) / 2 is the sum of the even Fibonacci numbers up to F(3n).
fn without_summation(args: &EvenFibonacciArgs) -> Result<Answer, SolveError> {
    let mut fibs = fibonacci_numbers();
    let mut double_sum = BigUint::zero();
    while let Some(fib) = fibs.next() {
        if fib > args.max {
            break;
        }
        fibs.next();
        if let Some(next) = fibs.next() {
            double_sum = next;
        }
    }
    Ok(double_sum / 2u32)
}
