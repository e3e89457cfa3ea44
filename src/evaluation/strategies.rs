//! Baseline assignments built from a flat task list.
//!
//! Both baselines spread the same tasks over the same machines as the
//! assignment under evaluation; only the grouping differs.
//!
//! # Strategies
//!
//! | Strategy | Rule | Sorts tasks |
//! |----------|------|-------------|
//! | Uniform | task `i` → machine `i mod m` | no |
//! | Greedy (LPT) | longest task → least-loaded machine | descending, stable |
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use log::debug;

use crate::error::Result;
use crate::models::{Assignment, MachineId};
use crate::validation::validate_machine_ids;

/// Round-robin redistribution.
///
/// Task at position `i` goes to `machine_ids[i % m]`, keeping the input
/// order within each machine. Every listed machine appears in the result,
/// even if it receives no task.
///
/// # Errors
/// Validation error if durations are negative or non-finite, machine ids
/// repeat, or there are tasks but no machines.
pub fn build_uniform_assignment(tasks: &[f64], machine_ids: &[MachineId]) -> Result<Assignment> {
    validate_machine_ids(tasks, machine_ids)?;

    let mut assignment = Assignment::with_machines(machine_ids.iter().cloned());
    for (idx, &duration) in tasks.iter().enumerate() {
        assignment.push(&machine_ids[idx % machine_ids.len()], duration);
    }
    Ok(assignment)
}

/// Longest-processing-time-first greedy assignment.
///
/// # Algorithm
/// 1. Stable-sort tasks by duration, descending (equal durations keep
///    their input order).
/// 2. Put each task on the machine with the smallest accumulated load.
///    Ties go to the machine listed first in `machine_ids`.
///
/// # Complexity
/// O(n log n + n·m)
///
/// # Errors
/// Same as [`build_uniform_assignment`].
pub fn build_greedy_assignment(tasks: &[f64], machine_ids: &[MachineId]) -> Result<Assignment> {
    validate_machine_ids(tasks, machine_ids)?;

    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let mut assignment = Assignment::with_machines(machine_ids.iter().cloned());
    let loads = sorted.iter().fold(
        vec![0.0; machine_ids.len()],
        |mut loads, &duration| {
            let target = least_loaded(&loads);
            loads[target] += duration;
            assignment.push(&machine_ids[target], duration);
            loads
        },
    );
    debug!("greedy loads: {loads:?}");

    Ok(assignment)
}

/// Index of the least-loaded machine; the lowest index wins ties.
fn least_loaded(loads: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &load) in loads.iter().enumerate().skip(1) {
        if load < loads[best] {
            best = idx;
        }
    }
    best
}
