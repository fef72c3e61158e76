// src/lib.rs

pub mod actions;
pub mod benchmark;
pub mod cli;
pub mod config;
pub mod integer_math;
pub mod problems;
pub mod timing;
