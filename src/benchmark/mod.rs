// src/benchmark/mod.rs

pub mod outcome;
pub mod system_info;
pub mod results;
pub mod runner;

pub use system_info::SystemInfo;
pub use results::{BenchmarkSuite, SolverTiming, TimingOutcome};
pub use runner::BenchmarkRunner;
