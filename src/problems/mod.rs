// src/problems/mod.rs
//
// Project Euler problems, each with its arguments, known solution and a
// collection of independent solvers.
//
// Problems are generalized: solvers take the problem's parameters as input so
// they can be checked and timed on inputs other than the official one.

pub mod p001;
pub mod p002;
pub mod p003;
pub mod p004;
pub mod p005;
pub mod p006;
pub mod p007;

use std::collections::TryReserveError;
use num::BigUint;
use thiserror::Error;
use crate::integer_math::MathError;
use crate::timing::{measure_minimum, CalleeError, Measurement, SingleArgTimer, StoppingBudget, TimingError};

/// Highest problem ID the toolkit knows about.
pub const LAST_PROBLEM_ID: u32 = 8;

/// Solver names must fit the name column of the outcome table.
pub const SOLVER_NAME_MAX_LEN: usize = 26;

pub type Answer = BigUint;

pub type SolverFn<A> = fn(&A) -> Result<Answer, SolveError>;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("arithmetic overflow")]
    Overflow,

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("unsupported input: {0}")]
    Unsupported(String),
}

impl CalleeError for SolveError {
    fn is_memory_exhaustion(&self) -> bool {
        matches!(self, SolveError::OutOfMemory(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    #[error("no module for problem {0}")]
    NotFound(u32),

    #[error("the module for problem {requested} contains problem {found}")]
    WrongProblem { requested: u32, found: u32 },
}

pub struct Solver<A> {
    pub name: &'static str,
    pub func: SolverFn<A>,
}

/// A problem with arguments of type `A`.
///
/// `tests` holds the inputs used for correctness and performance checks; the
/// actual arguments normally come first.
pub struct Problem<A> {
    pub id: u32,
    pub actual_args: A,
    pub solution: Option<Answer>,
    pub solvers: Vec<Solver<A>>,
    pub tests: Vec<A>,
}

impl<A: Clone> Problem<A> {
    pub fn new(id: u32, actual_args: A) -> Self {
        Problem {
            id,
            actual_args,
            solution: None,
            solvers: Vec::new(),
            tests: Vec::new(),
        }
    }

    pub fn with_solution(mut self, solution: impl Into<Answer>) -> Self {
        self.solution = Some(solution.into());
        self
    }

    pub fn with_tests(mut self, tests: Vec<A>) -> Self {
        self.tests = tests;
        self
    }

    pub fn list_as_solver(mut self, name: &'static str, func: SolverFn<A>) -> Self {
        debug_assert!(name.len() <= SOLVER_NAME_MAX_LEN, "solver name {:?} is too long", name);
        self.solvers.push(Solver { name, func });
        self
    }
}

/// Which arguments a solver should be run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Actual,
    Test(usize),
}

/// Object-safe view of a [`Problem`], whatever its argument type.
pub trait ProblemEntry {
    fn id(&self) -> u32;

    fn solution(&self) -> Option<&Answer>;

    fn solver_names(&self) -> Vec<&'static str>;

    fn test_count(&self) -> usize;

    /// Run solver number `solver` on `input`; `None` if either index is unknown.
    fn solve(&self, solver: usize, input: Input) -> Option<Result<Answer, SolveError>>;

    /// A timer for solver number `solver`, reusable across test inputs.
    fn solver_timer(&self, solver: usize, pause_reclamation: bool) -> Option<Box<dyn SolverTimer + '_>>;
}

pub trait SolverTimer {
    fn solver_name(&self) -> &'static str;

    /// Measure the minimum run time on test input `test`.
    fn measure_test(
        &mut self,
        test: usize,
        budget: &StoppingBudget,
    ) -> Option<Result<Measurement, TimingError<SolveError>>>;
}

impl<A: Clone> ProblemEntry for Problem<A> {
    fn id(&self) -> u32 {
        self.id
    }

    fn solution(&self) -> Option<&Answer> {
        self.solution.as_ref()
    }

    fn solver_names(&self) -> Vec<&'static str> {
        self.solvers.iter().map(|s| s.name).collect()
    }

    fn test_count(&self) -> usize {
        self.tests.len()
    }

    fn solve(&self, solver: usize, input: Input) -> Option<Result<Answer, SolveError>> {
        let solver = self.solvers.get(solver)?;
        let args = match input {
            Input::Actual => &self.actual_args,
            Input::Test(index) => self.tests.get(index)?,
        };
        Some((solver.func)(args))
    }

    fn solver_timer(&self, solver: usize, pause_reclamation: bool) -> Option<Box<dyn SolverTimer + '_>> {
        let solver = self.solvers.get(solver)?;
        let timer = SingleArgTimer::new(solver.func, self.actual_args.clone())
            .with_reclamation_pause(pause_reclamation);
        Some(Box::new(ProblemSolverTimer {
            name: solver.name,
            tests: &self.tests,
            timer,
        }))
    }
}

struct ProblemSolverTimer<'a, A> {
    name: &'static str,
    tests: &'a [A],
    timer: SingleArgTimer<SolverFn<A>, A, Answer, SolveError>,
}

impl<A: Clone> SolverTimer for ProblemSolverTimer<'_, A> {
    fn solver_name(&self) -> &'static str {
        self.name
    }

    fn measure_test(
        &mut self,
        test: usize,
        budget: &StoppingBudget,
    ) -> Option<Result<Measurement, TimingError<SolveError>>> {
        let args = self.tests.get(test)?.clone();
        self.timer.set_arg(args);
        Some(measure_minimum(&mut self.timer, budget))
    }
}

/// Look up a problem by its Project Euler ID.
pub fn get_problem(problem_id: u32) -> Result<Box<dyn ProblemEntry>, ProblemError> {
    let problem: Box<dyn ProblemEntry> = match problem_id {
        1 => Box::new(p001::problem()),
        2 => Box::new(p002::problem()),
        3 => Box::new(p003::problem()),
        4 => Box::new(p004::problem()),
        5 => Box::new(p005::problem()),
        6 => Box::new(p006::problem()),
        7 => Box::new(p007::problem()),
        _ => return Err(ProblemError::NotFound(problem_id)),
    };

    if problem.id() != problem_id {
        return Err(ProblemError::WrongProblem {
            requested: problem_id,
            found: problem.id(),
        });
    }
    Ok(problem)
}

/// Find the solvers whose names start with one of `prefixes`.
///
/// Returns the indices of matching solvers, in the order they were first
/// matched and without duplicates, together with the prefixes that matched
/// nothing. `None` selects every solver.
pub fn find_solvers(problem: &dyn ProblemEntry, prefixes: Option<&[String]>) -> (Vec<usize>, Vec<String>) {
    let names = problem.solver_names();
    let Some(prefixes) = prefixes else {
        return ((0..names.len()).collect(), Vec::new());
    };

    let mut matching = Vec::new();
    let mut unmatched = Vec::new();
    for prefix in prefixes {
        let mut found = false;
        for (index, name) in names.iter().enumerate() {
            if name.starts_with(prefix.as_str()) {
                found = true;
                if !matching.contains(&index) {
                    matching.push(index);
                }
            }
        }
        if !found {
            unmatched.push(prefix.clone());
        }
    }
    (matching, unmatched)
}
