// src/benchmark/runner.rs

use std::io::{self, Write};
use log::{debug, info};
use crate::benchmark::outcome::{format_millis, format_outcome_line, timing_error_label};
use crate::benchmark::results::{BenchmarkSuite, SolverTiming, TimingOutcome};
use crate::benchmark::system_info::SystemInfo;
use crate::config::EulerConfig;
use crate::problems::{ProblemEntry, SolverTimer};
use crate::timing::{BudgetError, StoppingBudget};

pub struct BenchmarkRunner {
    suite: BenchmarkSuite,
    budget: StoppingBudget,
    pause_reclamation: bool,
    ms_decimals: usize,
}

impl BenchmarkRunner {
    pub fn new(budget: StoppingBudget, pause_reclamation: bool, ms_decimals: usize, system_info: SystemInfo) -> Self {
        BenchmarkRunner {
            suite: BenchmarkSuite::new(&budget, system_info),
            budget,
            pause_reclamation,
            ms_decimals,
        }
    }

    /// Runner using the configured budget, on the current machine.
    pub fn from_config(config: &EulerConfig) -> Result<Self, BudgetError> {
        let budget = config.timing.budget()?;
        Ok(Self::new(
            budget,
            config.timing.pause_reclamation,
            config.output.ms_decimals,
            SystemInfo::collect(),
        ))
    }

    /// Time the selected solvers of `problem` on each of its test inputs.
    ///
    /// Every solver still in the running is timed on a test before the next
    /// test starts. A solver whose session ends in anything but a measurement
    /// sits out the remaining (usually larger) tests.
    pub fn time_problem<W: Write>(
        &mut self,
        out: &mut W,
        problem: &dyn ProblemEntry,
        solvers: &[usize],
    ) -> io::Result<()> {
        let mut live: Vec<Box<dyn SolverTimer + '_>> = solvers
            .iter()
            .filter_map(|&index| problem.solver_timer(index, self.pause_reclamation))
            .collect();

        info!("Timing {} solver(s) of problem {}", live.len(), problem.id());

        for test in 0..problem.test_count() {
            if live.is_empty() {
                debug!("No solvers left for problem {}", problem.id());
                break;
            }
            writeln!(out, "Performance test {}", test)?;

            let mut survivors = Vec::with_capacity(live.len());
            for mut timer in live {
                let Some(result) = timer.measure_test(test, &self.budget) else {
                    continue;
                };
                let outcome = match &result {
                    Ok(measurement) => format_millis(measurement.minimum, self.ms_decimals),
                    Err(e) => timing_error_label(e).to_string(),
                };
                writeln!(out, "{}", format_outcome_line(timer.solver_name(), &outcome))?;

                self.suite.add_timing(SolverTiming {
                    problem_id: problem.id(),
                    test_index: test,
                    solver: timer.solver_name().to_string(),
                    outcome: TimingOutcome::from_result(&result),
                });

                if result.is_ok() {
                    survivors.push(timer);
                } else {
                    debug!("Dropping {} after test {}", timer.solver_name(), test);
                }
            }
            live = survivors;
        }
        Ok(())
    }

    pub fn suite(&self) -> &BenchmarkSuite {
        &self.suite
    }

    pub fn into_suite(self) -> BenchmarkSuite {
        self.suite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use crate::problems::{get_problem, Answer, Problem, SolveError};
    use crate::timing::reclamation;

    #[derive(Clone)]
    struct Depth(u32);

    fn quick(args: &Depth) -> Result<Answer, SolveError> {
        Ok(Answer::from(args.0))
    }

    fn gives_up(args: &Depth) -> Result<Answer, SolveError> {
        if args.0 > 1 {
            return Err(SolveError::Overflow);
        }
        Ok(Answer::from(args.0))
    }

    fn toy_problem() -> Problem<Depth> {
        Problem::new(1, Depth(1))
            .with_tests(vec![Depth(1), Depth(2), Depth(3)])
            .list_as_solver("quick", quick)
            .list_as_solver("gives_up", gives_up)
    }

    fn runner() -> BenchmarkRunner {
        let budget = StoppingBudget::new().max_executions(3).timeout(Duration::from_secs(5));
        BenchmarkRunner::new(budget, true, 3, SystemInfo::unknown())
    }

    #[test]
    fn test_failed_solver_is_dropped() {
        let _guard = reclamation::test_guard();
        let problem = toy_problem();
        let mut runner = runner();
        let mut out = Vec::new();
        runner.time_problem(&mut out, &problem, &[0, 1]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("Performance test").count(), 3);
        assert_eq!(text.matches("gives_up").count(), 2);
        assert_eq!(text.matches("quick").count(), 3);
        assert!(text.contains(".failed"));

        let suite = runner.into_suite();
        assert_eq!(suite.timings.len(), 5);
        assert_eq!(
            suite.find(1, 1, "gives_up").map(|t| &t.outcome),
            Some(&TimingOutcome::Failed { reason: "arithmetic overflow".to_string() })
        );
        assert!(matches!(
            suite.find(1, 2, "quick").map(|t| &t.outcome),
            Some(TimingOutcome::Measured { executions: 3, .. })
        ));
    }

    #[test]
    fn test_stops_when_no_solver_is_left() {
        let _guard = reclamation::test_guard();
        let problem = toy_problem();
        let mut runner = runner();
        let mut out = Vec::new();
        runner.time_problem(&mut out, &problem, &[1]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("Performance test").count(), 2);
    }

    #[test]
    fn test_real_problem_timing() {
        let _guard = reclamation::test_guard();
        let problem = get_problem(6).unwrap();
        let mut runner = runner();
        let mut out = Vec::new();
        runner.time_problem(&mut out, problem.as_ref(), &[1]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("closed_form"));
        assert!(text.trim_end().ends_with("ms"));
        assert_eq!(runner.suite().timings.len(), problem.test_count());
    }
}
