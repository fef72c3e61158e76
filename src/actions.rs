// src/actions.rs
//
// The things the `euler` binary can do to a problem's solvers. Every action
// writes its report to the given writer.

use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use clap::ValueEnum;
use log::{debug, warn};
use crate::benchmark::outcome::{self, answer_outcome, format_outcome_line, solve_error_label};
use crate::benchmark::{BenchmarkRunner, BenchmarkSuite};
use crate::problems::{find_solvers, get_problem, Answer, Input, ProblemEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Action {
    /// Solve the problem with each solver
    #[default]
    Solve,
    /// List the available solvers
    List,
    /// Check that the solvers agree with each other and the known solution
    Test,
    /// Measure each solver's minimum run time
    Time,
}

/// Print `== Problem N ==`, then the output of `action` on the solvers
/// matching `prefixes` (all solvers for `None`), then a blank line.
///
/// A missing problem or an unmatched prefix is reported in the output, not
/// returned as an error.
pub fn print_action<W: Write>(
    out: &mut W,
    problem_id: u32,
    action: Action,
    prefixes: Option<&[String]>,
    runner: &mut BenchmarkRunner,
) -> io::Result<()> {
    writeln!(out, "== Problem {} ==", problem_id)?;

    match get_problem(problem_id) {
        Err(e) => {
            warn!("Problem {} unavailable: {}", problem_id, e);
            writeln!(out, "Cannot load problem: {}.", e)?;
        }
        Ok(problem) => {
            let (solvers, unmatched) = find_solvers(problem.as_ref(), prefixes);
            for prefix in &unmatched {
                writeln!(out, "There is no solver starting with {:?}.", prefix)?;
            }
            if !solvers.is_empty() {
                match action {
                    Action::Solve => print_solutions(out, problem.as_ref(), &solvers)?,
                    Action::List => print_solvers(out, problem.as_ref(), &solvers)?,
                    Action::Test => print_correctness_tests(out, problem.as_ref(), &solvers)?,
                    Action::Time => runner.time_problem(out, problem.as_ref(), &solvers)?,
                }
            }
        }
    }

    writeln!(out)
}

pub fn print_solutions<W: Write>(out: &mut W, problem: &dyn ProblemEntry, solvers: &[usize]) -> io::Result<()> {
    if let Some(solution) = problem.solution() {
        writeln!(out, "Solution: {}", solution)?;
    }
    let names = problem.solver_names();
    for &index in solvers {
        let outcome = match run_solver(problem, index, Input::Actual) {
            Some(Ok(answer)) => answer_outcome(&answer, problem.solution()),
            Some(Err(label)) => label.to_string(),
            None => continue,
        };
        writeln!(out, "{}", format_outcome_line(names[index], &outcome))?;
    }
    Ok(())
}

pub fn print_solvers<W: Write>(out: &mut W, problem: &dyn ProblemEntry, solvers: &[usize]) -> io::Result<()> {
    let names = problem.solver_names();
    for &index in solvers {
        writeln!(out, "{}", names[index])?;
    }
    Ok(())
}

/// Compare each solver with the known solution on the actual arguments, and
/// with the problem's first solver on every test input.
pub fn print_correctness_tests<W: Write>(
    out: &mut W,
    problem: &dyn ProblemEntry,
    solvers: &[usize],
) -> io::Result<()> {
    let names = problem.solver_names();

    if let Some(solution) = problem.solution() {
        writeln!(out, "Actual arguments")?;
        for &index in solvers {
            let outcome = check_answer(run_solver(problem, index, Input::Actual), Some(solution));
            if let Some(outcome) = outcome {
                writeln!(out, "{}", format_outcome_line(names[index], &outcome))?;
            }
        }
    }

    for test in 0..problem.test_count() {
        writeln!(out, "Correctness test {}", test)?;
        let reference = match run_solver(problem, 0, Input::Test(test)) {
            Some(Ok(answer)) => Some(answer),
            other => {
                debug!("No reference answer for test {} of problem {}: {:?}", test, problem.id(), other.map(|r| r.err()));
                None
            }
        };
        for &index in solvers {
            let result = run_solver(problem, index, Input::Test(test));
            let outcome = match &reference {
                Some(reference) => check_answer(result, Some(reference)),
                // Without a reference the answer itself is the outcome.
                None => result.map(|r| match r {
                    Ok(answer) => answer_outcome(&answer, None),
                    Err(label) => label.to_string(),
                }),
            };
            if let Some(outcome) = outcome {
                writeln!(out, "{}", format_outcome_line(names[index], &outcome))?;
            }
        }
    }
    Ok(())
}

/// The summary table of a timing suite, followed by the speedups against
/// `baseline` when one is given.
pub fn print_timing_report<W: Write>(
    out: &mut W,
    suite: &BenchmarkSuite,
    baseline: Option<&BenchmarkSuite>,
) -> io::Result<()> {
    write!(out, "{}", suite.summary())?;
    if let Some(baseline) = baseline {
        writeln!(out)?;
        write!(out, "{}", suite.compare(baseline))?;
    }
    Ok(())
}

fn check_answer(result: Option<Result<Answer, &'static str>>, expected: Option<&Answer>) -> Option<String> {
    let outcome = match result? {
        Ok(answer) if Some(&answer) == expected => outcome::CORRECT,
        Ok(_) => outcome::INCORRECT,
        Err(label) => label,
    };
    Some(outcome.to_string())
}

/// Run a solver, turning its errors and panics into outcome labels.
fn run_solver(problem: &dyn ProblemEntry, solver: usize, input: Input) -> Option<Result<Answer, &'static str>> {
    match panic::catch_unwind(AssertUnwindSafe(|| problem.solve(solver, input))) {
        Ok(result) => result.map(|r| r.map_err(|e| solve_error_label(&e))),
        Err(_) => {
            warn!("Solver {} of problem {} panicked", solver, problem.id());
            Some(Err(outcome::FAILED))
        }
    }
}
