// src/integer_math/fibonacci.rs

use num::{BigUint, One, Zero};

/// The Fibonacci sequence 0, 1, 1, 2, 3, 5, ... without an upper bound.
pub fn fibonacci_numbers() -> Fibonacci {
    Fibonacci {
        current: BigUint::zero(),
        next: BigUint::one(),
    }
}

pub struct Fibonacci {
    current: BigUint,
    next: BigUint,
}

impl Iterator for Fibonacci {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let following = &self.current + &self.next;
        let next = std::mem::replace(&mut self.next, following);
        Some(std::mem::replace(&mut self.current, next))
    }
}
