// src/integer_math/gcd.rs

use num::Integer;
use crate::integer_math::error::MathError;

pub struct GCD;

impl GCD {
    pub fn find_lcm<T, I>(numbers: I) -> Result<T, MathError>
    where
        T: Integer + Clone,
        I: IntoIterator<Item = T>,
    {
        numbers
            .into_iter()
            .reduce(|acc, x| Self::find_lcm_pair(&acc, &x))
            .ok_or(MathError::Empty)
    }

    /// Divides before multiplying so the intermediate never exceeds the result.
    pub fn find_lcm_pair<T: Integer + Clone>(left: &T, right: &T) -> T {
        if left.is_zero() || right.is_zero() {
            return T::zero();
        }
        left.clone() / Self::find_gcd_pair(left, right) * right.clone()
    }

    pub fn find_gcd<T, I>(numbers: I) -> Result<T, MathError>
    where
        T: Integer + Clone,
        I: IntoIterator<Item = T>,
    {
        numbers
            .into_iter()
            .reduce(|acc, x| Self::find_gcd_pair(&acc, &x))
            .ok_or(MathError::Empty)
    }

    pub fn find_gcd_pair<T: Integer>(left: &T, right: &T) -> T {
        left.gcd(right)
    }

    pub fn are_coprime<T, I>(numbers: I) -> bool
    where
        T: Integer + Clone,
        I: IntoIterator<Item = T>,
    {
        Self::find_gcd(numbers).map(|g| g.is_one()).unwrap_or(false)
    }
}
