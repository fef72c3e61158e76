// src/timing/mod.rs

pub mod budget;
pub mod clock;
pub mod error;
pub mod reclamation;
pub mod timer;

pub use budget::StoppingBudget;
pub use clock::{Clock, MonotonicClock};
pub use error::{BudgetError, CalleeError, CalleeFailure, TimingError};
pub use reclamation::ReclamationPause;
pub use timer::{measure_minimum, measure_minimum_with, Measurement, NoArgTimer, SingleArgTimer, TimedRun};
