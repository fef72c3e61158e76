// src/integer_math/sequence.rs

use std::collections::VecDeque;
use std::ops::Mul;
use num::One;
use crate::integer_math::error::MathError;

/// The item of `iter` at `index`, for iterators that cannot be indexed.
///
/// Negative indices count from the end like slice indexing in most scripting
/// languages: `-1` is the last item. Only the last `|index|` items are kept in
/// memory while the iterator is drained.
pub fn nth_item<I>(iter: I, index: isize) -> Result<I::Item, MathError>
where
    I: IntoIterator,
{
    if index >= 0 {
        return iter.into_iter().nth(index as usize).ok_or(MathError::IndexOutOfRange);
    }

    let keep = index.unsigned_abs();
    let mut tail = VecDeque::with_capacity(keep.min(1024));
    for item in iter {
        if tail.len() == keep {
            tail.pop_front();
        }
        tail.push_back(item);
    }
    if tail.len() < keep {
        return Err(MathError::IndexOutOfRange);
    }
    tail.pop_front().ok_or(MathError::IndexOutOfRange)
}

/// Product of all items; the empty product is one.
pub fn product<T, I>(iter: I) -> T
where
    T: One + Mul<Output = T>,
    I: IntoIterator<Item = T>,
{
    iter.into_iter().fold(T::one(), |acc, x| acc * x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_index() {
        assert_eq!(nth_item(10..20, 0), Ok(10));
        assert_eq!(nth_item(10..20, 9), Ok(19));
        assert_eq!(nth_item(10..20, 10), Err(MathError::IndexOutOfRange));
    }

    #[test]
    fn test_negative_index() {
        assert_eq!(nth_item(10..20, -1), Ok(19));
        assert_eq!(nth_item(10..20, -10), Ok(10));
        assert_eq!(nth_item(10..20, -11), Err(MathError::IndexOutOfRange));
        assert_eq!(nth_item(std::iter::empty::<u8>(), -1), Err(MathError::IndexOutOfRange));
    }

    #[test]
    fn test_product() {
        assert_eq!(product(1u64..=5), 120);
        assert_eq!(product(Vec::<u64>::new()), 1);
    }
}
