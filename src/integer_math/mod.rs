// src/integer_math/mod.rs

pub mod digits;
pub mod error;
pub mod factorization;
pub mod fibonacci;
pub mod gcd;
pub mod primes;
pub mod sequence;
pub mod series;

pub use error::MathError;
pub use gcd::GCD;
