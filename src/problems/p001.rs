// src/problems/p001.rs
//
// Multiples of 3 or 5: sum the natural numbers below `stop` that are
// multiples of at least one of `divisors`.

use std::collections::{BTreeSet, HashSet};
use num::BigUint;
use crate::integer_math::{MathError, GCD};
use crate::problems::{Answer, Problem, SolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplesArgs {
    pub divisors: BTreeSet<u64>,
    pub stop: u64,
}

impl MultiplesArgs {
    pub fn new(divisors: &[u64], stop: u64) -> Self {
        MultiplesArgs {
            divisors: divisors.iter().copied().collect(),
            stop,
        }
    }

    fn validate(&self) -> Result<(), SolveError> {
        if self.divisors.contains(&0) {
            return Err(MathError::NotPositive.into());
        }
        Ok(())
    }

    fn is_multiple(&self, n: u64) -> bool {
        self.divisors.iter().any(|d| n % d == 0)
    }
}

pub fn problem() -> Problem<MultiplesArgs> {
    let actual = MultiplesArgs::new(&[3, 5], 1000);
    Problem::new(1, actual.clone())
        .with_solution(233_168u32)
        .with_tests(vec![
            actual,
            MultiplesArgs::new(&[2, 3, 17, 101], 100_000),
            MultiplesArgs::new(&[3, 4, 14, 19, 34, 49, 101], 10_000_000),
        ])
        .list_as_solver("iterator_based", iterator_based)
        .list_as_solver("add_each", add_each)
        .list_as_solver("set_based", set_based)
        .list_as_solver("cycle_based", cycle_based)
        .list_as_solver("inclusion_exclusion", inclusion_exclusion)
}

fn iterator_based(args: &MultiplesArgs) -> Result<Answer, SolveError> {
    args.validate()?;
    let total: u128 = (0..args.stop)
        .filter(|&n| args.is_multiple(n))
        .map(u128::from)
        .sum();
    Ok(BigUint::from(total))
}

fn add_each(args: &MultiplesArgs) -> Result<Answer, SolveError> {
    args.validate()?;
    let mut total: u128 = 0;
    for n in 0..args.stop {
        if args.is_multiple(n) {
            total += u128::from(n);
        }
    }
    Ok(BigUint::from(total))
}

fn set_based(args: &MultiplesArgs) -> Result<Answer, SolveError> {
    args.validate()?;
    let capacity = args
        .divisors
        .iter()
        .try_fold(0u64, |total, d| total.checked_add(args.stop.div_ceil(*d)))
        .ok_or(SolveError::Overflow)?;
    let capacity = usize::try_from(capacity).map_err(|_| SolveError::Overflow)?;

    let mut multiples = HashSet::new();
    multiples.try_reserve(capacity)?;
    for &divisor in &args.divisors {
        multiples.extend((0..args.stop).step_by(divisor as usize));
    }
    let total: u128 = multiples.into_iter().map(u128::from).sum();
    Ok(BigUint::from(total))
}

/// Multiples repeat with a period of lcm(divisors): sum whole periods in
/// closed form and add the leftover part of the last one.
fn cycle_based(args: &MultiplesArgs) -> Result<Answer, SolveError> {
    args.validate()?;
    if args.divisors.is_empty() || args.stop == 0 {
        return Ok(BigUint::from(0u32));
    }

    let period = checked_lcm(&args.divisors)?;
    let num_periods = u128::from(args.stop / period);
    let leftover = args.stop % period;

    // Only residues below `span` are ever needed.
    let span = period.min(args.stop);
    let span_bits = usize::try_from(span).map_err(|_| SolveError::Overflow)?;
    let mut is_multiple = Vec::new();
    is_multiple.try_reserve_exact(span_bits)?;
    is_multiple.resize(span_bits, false);
    for &divisor in &args.divisors {
        for r in (0..span_bits).step_by(divisor as usize) {
            is_multiple[r] = true;
        }
    }

    let (mut count, mut sum) = (0u128, 0u128);
    let (mut leftover_count, mut leftover_sum) = (0u128, 0u128);
    for (r, &multiple) in is_multiple.iter().enumerate() {
        if !multiple {
            continue;
        }
        let r = r as u128;
        count += 1;
        sum += r;
        if r < u128::from(leftover) {
            leftover_count += 1;
            leftover_sum += r;
        }
    }

    let period = u128::from(period);
    let periods_sum = count * period * (num_periods * num_periods.saturating_sub(1) / 2) + num_periods * sum;
    let leftover_total = leftover_count * num_periods * period + leftover_sum;
    Ok(BigUint::from(periods_sum) + BigUint::from(leftover_total))
}

/// Add the multiples of every divisor, subtract those of every pairwise lcm,
/// add back those of every triple, and so on.
fn inclusion_exclusion(args: &MultiplesArgs) -> Result<Answer, SolveError> {
    args.validate()?;
    let divisors: Vec<u64> = args.divisors.iter().copied().collect();
    if divisors.len() >= 64 {
        return Err(SolveError::Unsupported(format!("{} divisors", divisors.len())));
    }
    if args.stop == 0 {
        return Ok(BigUint::from(0u32));
    }

    let last = u128::from(args.stop - 1);
    let (mut added, mut removed) = (BigUint::from(0u32), BigUint::from(0u32));
    for subset in 1u64..(1 << divisors.len()) {
        let mut step: u128 = 1;
        for (i, &d) in divisors.iter().enumerate() {
            if subset & (1 << i) != 0 {
                step = GCD::find_lcm_pair(&step, &u128::from(d));
                if step > last {
                    break;
                }
            }
        }
        if step > last {
            continue;
        }
        let n = last / step;
        let contribution = BigUint::from(step) * BigUint::from(n) * BigUint::from(n + 1) / 2u32;
        if subset.count_ones() % 2 == 1 {
            added += contribution;
        } else {
            removed += contribution;
        }
    }
    Ok(added - removed)
}

fn checked_lcm(divisors: &BTreeSet<u64>) -> Result<u64, SolveError> {
    divisors.iter().try_fold(1u64, |acc, &d| {
        let g = GCD::find_gcd_pair(&acc, &d);
        (acc / g).checked_mul(d).ok_or(SolveError::Overflow)
    })
}
