// src/timing/budget.rs

use std::time::Duration;
use crate::timing::error::BudgetError;

/// Limits that decide when a measurement session stops sampling.
///
/// `target_time` stops the session once another run would overshoot it by more
/// than half a run, `timeout` fails the session once exceeded and
/// `max_executions` caps the number of runs. At least one has to be set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StoppingBudget {
    pub target_time: Option<Duration>,
    pub timeout: Option<Duration>,
    pub max_executions: Option<u32>,
}

impl StoppingBudget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_time(mut self, target_time: Duration) -> Self {
        self.target_time = Some(target_time);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn max_executions(mut self, max_executions: u32) -> Self {
        self.max_executions = Some(max_executions);
        self
    }

    /// Build a budget from optional second counts, as they appear in config files.
    pub fn from_secs(
        target_time: Option<f64>,
        timeout: Option<f64>,
        max_executions: Option<u32>,
    ) -> Result<Self, BudgetError> {
        let budget = StoppingBudget {
            target_time: target_time.map(|s| secs("target_time", s)).transpose()?,
            timeout: timeout.map(|s| secs("timeout", s)).transpose()?,
            max_executions,
        };
        budget.validate()?;
        Ok(budget)
    }

    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.target_time.is_none() && self.timeout.is_none() && self.max_executions.is_none() {
            return Err(BudgetError::NoLimits);
        }
        if self.max_executions == Some(0) {
            return Err(BudgetError::ZeroExecutions);
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(BudgetError::ZeroTimeout);
        }
        Ok(())
    }
}

fn secs(name: &'static str, value: f64) -> Result<Duration, BudgetError> {
    Duration::try_from_secs_f64(value).map_err(|_| BudgetError::InvalidSeconds { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_budget_is_rejected() {
        assert_eq!(StoppingBudget::new().validate(), Err(BudgetError::NoLimits));
    }

    #[test]
    fn test_zero_limits_are_rejected() {
        assert_eq!(
            StoppingBudget::new().max_executions(0).validate(),
            Err(BudgetError::ZeroExecutions)
        );
        assert_eq!(
            StoppingBudget::new().timeout(Duration::ZERO).validate(),
            Err(BudgetError::ZeroTimeout)
        );
        // A zero target time is legal: it means "run once".
        assert!(StoppingBudget::new().target_time(Duration::ZERO).validate().is_ok());
    }

    #[test]
    fn test_from_secs() {
        let budget = StoppingBudget::from_secs(Some(1.0), Some(4.0), Some(100)).unwrap();
        assert_eq!(budget.target_time, Some(Duration::from_secs(1)));
        assert_eq!(budget.timeout, Some(Duration::from_secs(4)));
        assert_eq!(budget.max_executions, Some(100));

        assert!(matches!(
            StoppingBudget::from_secs(Some(-1.0), None, None),
            Err(BudgetError::InvalidSeconds { name: "target_time", .. })
        ));
        assert!(matches!(
            StoppingBudget::from_secs(None, Some(f64::NAN), None),
            Err(BudgetError::InvalidSeconds { name: "timeout", .. })
        ));
        assert_eq!(StoppingBudget::from_secs(None, None, None), Err(BudgetError::NoLimits));
    }
}
