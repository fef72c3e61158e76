// src/benchmark/results.rs

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use std::path::Path;
use crate::benchmark::outcome;
use crate::benchmark::system_info::SystemInfo;
use crate::problems::SolveError;
use crate::timing::{Measurement, StoppingBudget, TimingError};

/// How one (solver, test input) session ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TimingOutcome {
    Measured { min_time_ns: u64, executions: u32 },
    Timeout,
    MemoryError,
    Failed { reason: String },
}

impl TimingOutcome {
    pub fn from_result(result: &Result<Measurement, TimingError<SolveError>>) -> Self {
        match result {
            Ok(m) => TimingOutcome::Measured {
                min_time_ns: u64::try_from(m.minimum.as_nanos()).unwrap_or(u64::MAX),
                executions: m.executions,
            },
            Err(TimingError::Timeout { .. }) => TimingOutcome::Timeout,
            Err(TimingError::MemoryExhausted(_)) => TimingOutcome::MemoryError,
            Err(TimingError::CalleeFailed(failure)) => TimingOutcome::Failed {
                reason: failure.cause().map_or_else(|| failure.to_string(), |cause| cause.to_string()),
            },
            Err(e) => TimingOutcome::Failed { reason: e.to_string() },
        }
    }

    pub fn label(&self) -> String {
        match self {
            TimingOutcome::Measured { min_time_ns, .. } => format_duration(*min_time_ns),
            TimingOutcome::Timeout => outcome::TIMEOUT.to_string(),
            TimingOutcome::MemoryError => outcome::MEMORY_ERROR.to_string(),
            TimingOutcome::Failed { .. } => outcome::FAILED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverTiming {
    pub problem_id: u32,
    pub test_index: usize,
    pub solver: String,
    pub outcome: TimingOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub target_time_secs: Option<f64>,
    pub timeout_secs: Option<f64>,
    pub max_executions: Option<u32>,
}

impl From<&StoppingBudget> for BudgetSummary {
    fn from(budget: &StoppingBudget) -> Self {
        BudgetSummary {
            target_time_secs: budget.target_time.map(|d| d.as_secs_f64()),
            timeout_secs: budget.timeout.map(|d| d.as_secs_f64()),
            max_executions: budget.max_executions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSuite {
    pub timestamp: DateTime<Utc>,
    pub system_info: SystemInfo,
    pub budget: BudgetSummary,
    pub timings: Vec<SolverTiming>,
}

impl BenchmarkSuite {
    pub fn new(budget: &StoppingBudget, system_info: SystemInfo) -> Self {
        BenchmarkSuite {
            timestamp: Utc::now(),
            system_info,
            budget: budget.into(),
            timings: Vec::new(),
        }
    }

    pub fn add_timing(&mut self, timing: SolverTiming) {
        self.timings.push(timing);
    }

    pub fn find(&self, problem_id: u32, test_index: usize, solver: &str) -> Option<&SolverTiming> {
        self.timings
            .iter()
            .find(|t| t.problem_id == problem_id && t.test_index == test_index && t.solver == solver)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let suite = serde_json::from_str(&json)?;
        Ok(suite)
    }

    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", "=".repeat(80)));
        out.push_str("BENCHMARK RESULTS\n");
        out.push_str(&format!("{}\n", "=".repeat(80)));
        out.push_str(&format!("Timestamp: {}\n", self.timestamp));
        out.push_str(&self.system_info.to_string_pretty());
        out.push_str(&format!("{}\n", "-".repeat(80)));
        out.push_str(&format!("{:<8} {:<6} {:<28} {:>15} {:>8}\n", "Problem", "Test", "Solver", "Minimum", "Runs"));
        out.push_str(&format!("{}\n", "-".repeat(80)));
        for timing in &self.timings {
            let runs = match timing.outcome {
                TimingOutcome::Measured { executions, .. } => executions.to_string(),
                _ => "-".to_string(),
            };
            out.push_str(&format!(
                "{:<8} {:<6} {:<28} {:>15} {:>8}\n",
                timing.problem_id,
                timing.test_index,
                timing.solver,
                timing.outcome.label(),
                runs
            ));
        }
        out.push_str(&format!("{}\n", "=".repeat(80)));
        out
    }

    /// Side-by-side comparison with an earlier suite, for timings both measured.
    pub fn compare(&self, baseline: &BenchmarkSuite) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Baseline: {} ({})\nCurrent:  {} ({})\n",
            baseline.timestamp,
            baseline.system_info.short_commit(),
            self.timestamp,
            self.system_info.short_commit()
        ));
        out.push_str(&format!("{:<8} {:<6} {:<28} {:>15}\n", "Problem", "Test", "Solver", "Speedup"));
        for timing in &self.timings {
            let TimingOutcome::Measured { min_time_ns: current, .. } = timing.outcome else {
                continue;
            };
            let Some(TimingOutcome::Measured { min_time_ns: before, .. }) = baseline
                .find(timing.problem_id, timing.test_index, &timing.solver)
                .map(|t| &t.outcome)
            else {
                continue;
            };
            if current == 0 || *before == 0 {
                continue;
            }
            let speedup = *before as f64 / current as f64;
            let speedup_str = if speedup >= 1.0 {
                format!("{:.2}x faster", speedup)
            } else {
                format!("{:.2}x slower", 1.0 / speedup)
            };
            out.push_str(&format!(
                "{:<8} {:<6} {:<28} {:>15}\n",
                timing.problem_id, timing.test_index, timing.solver, speedup_str
            ));
        }
        out
    }
}

pub fn format_duration(ns: u64) -> String {
    if ns < 1_000 {
        format!("{} ns", ns)
    } else if ns < 1_000_000 {
        format!("{:.2} µs", ns as f64 / 1_000.0)
    } else if ns < 1_000_000_000 {
        format!("{:.2} ms", ns as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", ns as f64 / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_suite() -> BenchmarkSuite {
        let budget = StoppingBudget::new().target_time(Duration::from_secs(1)).max_executions(10);
        let mut suite = BenchmarkSuite::new(&budget, SystemInfo::unknown());
        suite.add_timing(SolverTiming {
            problem_id: 1,
            test_index: 0,
            solver: "add_each".to_string(),
            outcome: TimingOutcome::Measured { min_time_ns: 2_000_000, executions: 10 },
        });
        suite.add_timing(SolverTiming {
            problem_id: 1,
            test_index: 1,
            solver: "add_each".to_string(),
            outcome: TimingOutcome::Timeout,
        });
        suite
    }

    #[test]
    fn test_save_and_load() {
        let suite = sample_suite();
        let path = std::env::temp_dir().join(format!("euler_suite_test_{}.json", std::process::id()));
        suite.save_to_file(&path).unwrap();
        let loaded = BenchmarkSuite::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, suite);
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(TimingOutcome::Timeout).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "timeout" }));
        let json = serde_json::to_value(TimingOutcome::Measured { min_time_ns: 5, executions: 2 }).unwrap();
        assert_eq!(json["status"], "measured");
        assert_eq!(json["min_time_ns"], 5);
    }

    #[test]
    fn test_outcome_from_result() {
        let measured: Result<Measurement, TimingError<SolveError>> = Ok(Measurement {
            minimum: Duration::from_micros(3),
            executions: 4,
            elapsed: Duration::from_micros(20),
        });
        assert_eq!(
            TimingOutcome::from_result(&measured),
            TimingOutcome::Measured { min_time_ns: 3_000, executions: 4 }
        );
        let failed: Result<Measurement, TimingError<SolveError>> =
            Err(TimingError::CalleeFailed(crate::timing::CalleeFailure::Error(SolveError::Overflow)));
        assert!(matches!(TimingOutcome::from_result(&failed), TimingOutcome::Failed { .. }));
    }

    #[test]
    fn test_compare_reports_speedup() {
        let baseline = sample_suite();
        let mut current = sample_suite();
        current.timings[0].outcome = TimingOutcome::Measured { min_time_ns: 1_000_000, executions: 10 };
        let report = current.compare(&baseline);
        assert!(report.contains("2.00x faster"));
        // The timed-out session has nothing to compare.
        assert_eq!(report.matches("add_each").count(), 1);
    }

    #[test]
    fn test_summary_lists_every_timing() {
        let summary = sample_suite().summary();
        assert!(summary.contains("2.00 ms"));
        assert!(summary.contains("timeout"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(999), "999 ns");
        assert_eq!(format_duration(1_500), "1.50 µs");
        assert_eq!(format_duration(2_000_000), "2.00 ms");
        assert_eq!(format_duration(3_000_000_000), "3.00 s");
    }
}
