// src/cli.rs

use std::path::PathBuf;
use clap::Parser;
use crate::actions::Action;
use crate::problems::LAST_PROBLEM_ID;

/// Examine solver functions for Project Euler problems.
#[derive(Debug, Parser)]
#[command(name = "euler", version)]
pub struct Cli {
    /// Desired action
    #[arg(value_enum, default_value_t = Action::Solve)]
    pub action: Action,

    /// ID of the problem to be examined (default: all problems)
    #[arg(value_name = "PROBLEM", value_parser = parse_problem_id)]
    pub problem: Option<u32>,

    /// Prefixes of the desired solvers (default: all solvers)
    #[arg(value_name = "SOLVER")]
    pub solvers: Vec<String>,

    /// Configuration file (default: euler.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the timings of the `time` action to a JSON file
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Compare the timings with an earlier JSON report
    #[arg(long, value_name = "PATH")]
    pub baseline: Option<PathBuf>,
}

impl Cli {
    pub fn problem_ids(&self) -> Vec<u32> {
        match self.problem {
            Some(id) => vec![id],
            None => (1..=LAST_PROBLEM_ID).collect(),
        }
    }

    pub fn solver_prefixes(&self) -> Option<&[String]> {
        if self.solvers.is_empty() {
            None
        } else {
            Some(&self.solvers)
        }
    }
}

fn parse_problem_id(s: &str) -> Result<u32, String> {
    let id: u32 = s.parse().map_err(|_| format!("{:?} is not a problem ID", s))?;
    if (1..=LAST_PROBLEM_ID).contains(&id) {
        Ok(id)
    } else {
        Err(format!("problem ID must be between 1 and {}", LAST_PROBLEM_ID))
    }
}
