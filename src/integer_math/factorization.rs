// src/integer_math/factorization.rs

use std::collections::BTreeMap;
use crate::integer_math::error::MathError;
use crate::integer_math::primes::least_divisor_limit;

/// Prime factors of `n` in ascending order, with multiplicity.
///
/// `n = 1` has no prime factors; `n = 0` is rejected.
pub fn prime_factors(n: u64) -> Result<PrimeFactors, MathError> {
    if n == 0 {
        return Err(MathError::NotPositive);
    }
    Ok(PrimeFactors {
        remaining: n,
        divisor: 2,
        limit: least_divisor_limit(n),
    })
}

/// Trial division, dividing each factor out of the remainder as it is found.
pub struct PrimeFactors {
    remaining: u64,
    divisor: u64,
    limit: u64,
}

impl Iterator for PrimeFactors {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 1 {
            return None;
        }
        while self.divisor < self.limit {
            if self.remaining % self.divisor == 0 {
                let factor = self.divisor;
                self.remaining /= factor;
                self.limit = least_divisor_limit(self.remaining);
                return Some(factor);
            }
            self.divisor = if self.divisor == 2 { 3 } else { self.divisor + 2 };
        }
        // What is left has no divisor below its square root.
        let last = self.remaining;
        self.remaining = 1;
        Some(last)
    }
}

/// Prime factor → multiplicity.
pub fn prime_factor_counts(n: u64) -> Result<BTreeMap<u64, u32>, MathError> {
    let mut counts = BTreeMap::new();
    for factor in prime_factors(n)? {
        *counts.entry(factor).or_insert(0) += 1;
    }
    Ok(counts)
}

/// Merge factor counts, keeping the largest multiplicity seen for each factor.
pub fn counter_union<I>(counters: I) -> BTreeMap<u64, u32>
where
    I: IntoIterator<Item = BTreeMap<u64, u32>>,
{
    let mut union = BTreeMap::new();
    for counter in counters {
        for (factor, count) in counter {
            let entry = union.entry(factor).or_insert(0);
            *entry = (*entry).max(count);
        }
    }
    union
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_factors() {
        assert_eq!(prime_factors(60).unwrap().collect::<Vec<_>>(), vec![2, 2, 3, 5]);
        assert_eq!(prime_factors(97).unwrap().collect::<Vec<_>>(), vec![97]);
        assert_eq!(prime_factors(64).unwrap().collect::<Vec<_>>(), vec![2; 6]);
        assert_eq!(prime_factors(143).unwrap().collect::<Vec<_>>(), vec![11, 13]);
    }

    #[test]
    fn test_prime_factors_of_one_and_zero() {
        assert_eq!(prime_factors(1).unwrap().count(), 0);
        assert!(matches!(prime_factors(0), Err(MathError::NotPositive)));
    }

    #[test]
    fn test_prime_factors_of_project_euler_number() {
        let factors: Vec<u64> = prime_factors(600_851_475_143).unwrap().collect();
        assert_eq!(factors, vec![71, 839, 1471, 6857]);
    }

    #[test]
    fn test_prime_factors_multiply_back() {
        for n in 1u64..2000 {
            let product: u64 = prime_factors(n).unwrap().product();
            assert_eq!(product, n);
        }
    }

    #[test]
    fn test_prime_factor_counts() {
        let counts = prime_factor_counts(360).unwrap();
        assert_eq!(counts, BTreeMap::from([(2, 3), (3, 2), (5, 1)]));
    }

    #[test]
    fn test_counter_union_takes_max() {
        let union = counter_union(vec![
            BTreeMap::from([(2, 3), (3, 1)]),
            BTreeMap::from([(2, 1), (5, 2)]),
        ]);
        assert_eq!(union, BTreeMap::from([(2, 3), (3, 1), (5, 2)]));
    }
}
