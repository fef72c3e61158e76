// src/integer_math/digits.rs

use std::fmt::Display;

/// Whether `n` reads the same forwards and backwards in base ten.
pub fn is_decimal_palindrome<T: Display>(n: T) -> bool {
    let digits = n.to_string();
    digits.bytes().eq(digits.bytes().rev())
}

/// Number of decimal digits in `n`.
pub fn decimal_len<T: Display>(n: T) -> usize {
    n.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palindromes() {
        assert!(is_decimal_palindrome(0u64));
        assert!(is_decimal_palindrome(7u64));
        assert!(is_decimal_palindrome(9009u64));
        assert!(is_decimal_palindrome(906_609u64));
        assert!(!is_decimal_palindrome(10u64));
        assert!(!is_decimal_palindrome(906_608u64));
    }

    #[test]
    fn test_decimal_len() {
        assert_eq!(decimal_len(0u64), 1);
        assert_eq!(decimal_len(233_168u64), 6);
    }
}
