// src/timing/timer.rs

use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;
use log::{debug, warn};
use crate::timing::budget::StoppingBudget;
use crate::timing::clock::{Clock, MonotonicClock};
use crate::timing::error::{CalleeError, CalleeFailure, TimingError};
use crate::timing::reclamation::{self, ReclamationPause};

/// Something that can be executed and timed once.
///
/// Implementors only provide a single timed run; the sampling loop lives in
/// [`measure_minimum`] and is shared by every timer.
pub trait TimedRun {
    type Error: CalleeError;

    /// Execute once and return how long it took according to `clock`.
    fn single_run_duration(&mut self, clock: &dyn Clock) -> Result<Duration, TimingError<Self::Error>>;

    /// Whether reclamation should be paused while sampling.
    fn pauses_reclamation(&self) -> bool {
        true
    }

    /// Release the result held back while reclamation was paused.
    fn reclaim(&mut self) {}
}

/// Outcome of a successful measurement session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Fastest single run observed.
    pub minimum: Duration,
    /// Number of runs performed.
    pub executions: u32,
    /// Wall-clock time of the whole session.
    pub elapsed: Duration,
}

impl Measurement {
    pub fn min_secs(&self) -> f64 {
        self.minimum.as_secs_f64()
    }
}

/// Measure the minimum run time of `timer` on the monotonic clock.
pub fn measure_minimum<T>(timer: &mut T, budget: &StoppingBudget) -> Result<Measurement, TimingError<T::Error>>
where
    T: TimedRun + ?Sized,
{
    measure_minimum_with(timer, budget, &MonotonicClock::new())
}

/// Measure the minimum run time of `timer`, reading time from `clock`.
///
/// Runs are repeated until the budget says stop. The first run always
/// happens. After every run the timeout is checked first, then the execution
/// cap, then the target time: sampling stops once the elapsed session time plus
/// half of the last run exceeds `target_time`.
pub fn measure_minimum_with<T, C>(
    timer: &mut T,
    budget: &StoppingBudget,
    clock: &C,
) -> Result<Measurement, TimingError<T::Error>>
where
    T: TimedRun + ?Sized,
    C: Clock,
{
    budget.validate()?;

    let start = clock.now();
    debug!("Measurement session started with budget {:?}", budget);

    let outcome = {
        let _pause = ReclamationPause::engage_if(timer.pauses_reclamation());
        sample(timer, budget, clock, start)
    };
    timer.reclaim();

    match &outcome {
        Ok(m) => debug!(
            "Measurement session finished: {} runs, minimum {:?}, elapsed {:?}",
            m.executions, m.minimum, m.elapsed
        ),
        Err(TimingError::Timeout { elapsed, limit }) => {
            warn!("Measurement session timed out after {:?} (limit {:?})", elapsed, limit)
        }
        Err(e) => debug!("Measurement session aborted: {}", e),
    }
    outcome
}

fn sample<T, C>(
    timer: &mut T,
    budget: &StoppingBudget,
    clock: &C,
    start: Duration,
) -> Result<Measurement, TimingError<T::Error>>
where
    T: TimedRun + ?Sized,
    C: Clock,
{
    let mut minimum = Duration::MAX;
    let mut executions: u32 = 0;

    loop {
        let run = timer.single_run_duration(clock)?;
        executions += 1;
        minimum = minimum.min(run);

        let elapsed = clock.now().saturating_sub(start);

        if let Some(limit) = budget.timeout {
            if elapsed > limit {
                return Err(TimingError::Timeout { elapsed, limit });
            }
        }
        if budget.max_executions.is_some_and(|max| executions >= max) {
            return Ok(Measurement { minimum, executions, elapsed });
        }
        if let Some(target) = budget.target_time {
            if elapsed + run / 2 > target {
                return Ok(Measurement { minimum, executions, elapsed });
            }
        }
    }
}

/// Time one call, translating callee errors and panics.
fn timed_call<R, E>(
    clock: &dyn Clock,
    call: impl FnOnce() -> Result<R, E>,
) -> Result<(Duration, R), TimingError<E>>
where
    E: CalleeError,
{
    let start = clock.now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(call));
    let end = clock.now();

    match outcome {
        Ok(Ok(value)) => Ok((end.saturating_sub(start), value)),
        Ok(Err(e)) => Err(TimingError::from_callee(e)),
        Err(payload) => Err(TimingError::CalleeFailed(CalleeFailure::Panic(panic_message(payload)))),
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// The callee's latest return value, held back while reclamation is paused.
///
/// Only one value is ever kept: storing a new one drops its predecessor,
/// which happens after the clock has stopped for the run that produced it.
struct Retained<R> {
    last: Option<R>,
}

impl<R> Retained<R> {
    fn new() -> Self {
        Retained { last: None }
    }

    fn keep(&mut self, value: R) {
        if reclamation::is_enabled() {
            return;
        }
        self.last = Some(value);
    }

    fn release(&mut self) {
        self.last = None;
    }
}

/// Times a function that takes no arguments.
pub struct NoArgTimer<F, R, E> {
    func: F,
    pause_reclamation: bool,
    retained: Retained<R>,
    _error: PhantomData<fn() -> E>,
}

impl<F, R, E> NoArgTimer<F, R, E>
where
    F: FnMut() -> Result<R, E>,
    E: CalleeError,
{
    pub fn new(func: F) -> Self {
        NoArgTimer {
            func,
            pause_reclamation: true,
            retained: Retained::new(),
            _error: PhantomData,
        }
    }

    pub fn with_reclamation_pause(mut self, pause: bool) -> Self {
        self.pause_reclamation = pause;
        self
    }

    pub fn func(&self) -> &F {
        &self.func
    }
}

impl<F, R, E> TimedRun for NoArgTimer<F, R, E>
where
    F: FnMut() -> Result<R, E>,
    E: CalleeError,
{
    type Error = E;

    fn single_run_duration(&mut self, clock: &dyn Clock) -> Result<Duration, TimingError<E>> {
        let func = &mut self.func;
        let (duration, value) = timed_call(clock, || func())?;
        self.retained.keep(value);
        Ok(duration)
    }

    fn pauses_reclamation(&self) -> bool {
        self.pause_reclamation
    }

    fn reclaim(&mut self) {
        self.retained.release();
    }
}

/// Times a function that takes a single argument by reference.
///
/// The same argument is passed on every run; swap it with [`set_arg`] between
/// sessions to time the same function on another input.
///
/// [`set_arg`]: SingleArgTimer::set_arg
pub struct SingleArgTimer<F, A, R, E> {
    func: F,
    arg: A,
    pause_reclamation: bool,
    retained: Retained<R>,
    _error: PhantomData<fn() -> E>,
}

impl<F, A, R, E> SingleArgTimer<F, A, R, E>
where
    F: FnMut(&A) -> Result<R, E>,
    E: CalleeError,
{
    pub fn new(func: F, arg: A) -> Self {
        SingleArgTimer {
            func,
            arg,
            pause_reclamation: true,
            retained: Retained::new(),
            _error: PhantomData,
        }
    }

    pub fn with_reclamation_pause(mut self, pause: bool) -> Self {
        self.pause_reclamation = pause;
        self
    }

    pub fn arg(&self) -> &A {
        &self.arg
    }

    /// Replace the argument, returning the previous one.
    pub fn set_arg(&mut self, arg: A) -> A {
        std::mem::replace(&mut self.arg, arg)
    }

    pub fn func(&self) -> &F {
        &self.func
    }
}

impl<F, A, R, E> TimedRun for SingleArgTimer<F, A, R, E>
where
    F: FnMut(&A) -> Result<R, E>,
    E: CalleeError,
{
    type Error = E;

    fn single_run_duration(&mut self, clock: &dyn Clock) -> Result<Duration, TimingError<E>> {
        let func = &mut self.func;
        let arg = &self.arg;
        let (duration, value) = timed_call(clock, || func(arg))?;
        self.retained.keep(value);
        Ok(duration)
    }

    fn pauses_reclamation(&self) -> bool {
        self.pause_reclamation
    }

    fn reclaim(&mut self) {
        self.retained.release();
    }
}
