// src/integer_math/primes.rs

use std::collections::TryReserveError;
use log::debug;
use num::integer::Roots;

/// Unbounded ascending prime iterator.
///
/// Every odd candidate is tested against the odd divisors below its square
/// root, so this is only meant for the first few hundred thousand primes. Use
/// [`primes_below`] when an upper bound is known.
pub fn primes() -> Primes {
    Primes { next_candidate: 2 }
}

pub struct Primes {
    next_candidate: u64,
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next_candidate == 2 {
            self.next_candidate = 3;
            return Some(2);
        }
        loop {
            let n = self.next_candidate;
            self.next_candidate = n.checked_add(2)?;
            if is_odd_prime(n) {
                return Some(n);
            }
        }
    }
}

fn is_odd_prime(n: u64) -> bool {
    let limit = least_divisor_limit(n);
    (3..limit).step_by(2).all(|d| n % d != 0)
}

/// Exclusive upper limit for the least non-trivial divisor of `n`.
pub(crate) fn least_divisor_limit(n: u64) -> u64 {
    n.sqrt() + 1
}

/// All primes below `limit`, by a sieve of Eratosthenes over odd numbers.
///
/// Bit `i` of the cull buffer stands for the odd number `2i + 3`; a set bit
/// marks a composite. Both the buffer and the result are reserved up front,
/// so a limit too large for the available memory is an error, not an abort.
pub fn primes_below(limit: u64) -> Result<Vec<u64>, TryReserveError> {
    if limit <= 2 {
        return Ok(Vec::new());
    }

    let buffer_bits = ((limit - 3) / 2 + 1) as usize;
    let buffer_words = buffer_bits.div_ceil(32);
    let mut cull_buffer: Vec<u32> = Vec::new();
    cull_buffer.try_reserve_exact(buffer_words)?;
    cull_buffer.resize(buffer_words, 0);
    debug!("Sieving primes below {} with {} bits", limit, buffer_bits);

    let mut i = 0usize;
    loop {
        let p = 2 * i + 3;
        let square = p * p;
        if square as u64 >= limit {
            break;
        }
        if cull_buffer[i >> 5] & (1 << (i & 31)) == 0 {
            let mut j = (square - 3) >> 1;
            while j < buffer_bits {
                cull_buffer[j >> 5] |= 1 << (j & 31);
                j += p;
            }
        }
        i += 1;
    }

    let culled = &cull_buffer;
    let odd_primes = move || {
        (0..buffer_bits)
            .filter(move |&j| culled[j >> 5] & (1 << (j & 31)) == 0)
            .map(|j| 2 * j as u64 + 3)
            .filter(move |&p| p < limit)
    };
    let mut result = Vec::new();
    result.try_reserve_exact(odd_primes().count() + 1)?;
    result.push(2);
    result.extend(odd_primes());
    Ok(result)
}

/// Upper bound for the value of the `n`th prime (1-based), for sizing sieves.
pub fn nth_prime_upper_bound(n: u64) -> u64 {
    if n < 6 {
        return 15;
    }
    let fn_ = n as f64;
    let flogn = fn_.ln();
    let flog2n = flogn.ln();
    (fn_ * (flogn + flog2n)).ceil() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_primes() {
        let first: Vec<u64> = primes().take(10).collect();
        assert_eq!(first, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_sieve_matches_iterator() {
        let sieved = primes_below(10_000).unwrap();
        let iterated: Vec<u64> = primes().take_while(|&p| p < 10_000).collect();
        assert_eq!(sieved, iterated);
        assert_eq!(sieved.len(), 1229);
    }

    #[test]
    fn test_sieve_small_limits() {
        assert!(primes_below(0).unwrap().is_empty());
        assert!(primes_below(2).unwrap().is_empty());
        assert_eq!(primes_below(3).unwrap(), vec![2]);
        assert_eq!(primes_below(4).unwrap(), vec![2, 3]);
        assert_eq!(primes_below(10).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(primes_below(11).unwrap(), vec![2, 3, 5, 7]);
        assert_eq!(primes_below(12).unwrap(), vec![2, 3, 5, 7, 11]);
    }

    #[test]
    fn test_sieve_excludes_odd_squares() {
        let primes = primes_below(200).unwrap();
        for square in [9u64, 25, 49, 121, 169] {
            assert!(!primes.contains(&square));
        }
    }

    #[test]
    fn test_sieve_reports_exhausted_memory() {
        assert!(primes_below(u64::MAX).is_err());
    }

    #[test]
    fn test_nth_prime_upper_bound() {
        for n in [1u64, 5, 6, 100, 10_001] {
            let nth = primes().nth((n - 1) as usize).unwrap();
            assert!(nth_prime_upper_bound(n) >= nth, "bound too small for n = {}", n);
        }
    }
}
