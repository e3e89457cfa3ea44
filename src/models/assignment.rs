//! Task-to-machine assignment model.
//!
//! An assignment maps each machine to the ordered list of processing times
//! it runs. Machines keep the order in which they were first seen, which
//! is also the order used for round-robin slots and greedy tie-breaks.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! (Parallel Machine Models)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::TaskRecord;

/// Machine identifier as it appears in the source file.
pub type MachineId = String;

/// A task-to-machine assignment.
///
/// Built once (from records or with the builder methods) and then only
/// read. Every task belongs to exactly one machine.
///
/// # Example
///
/// ```
/// use u_makespan::models::Assignment;
///
/// let assignment = Assignment::new()
///     .with_machine("A", vec![30.0])
///     .with_machine("B", vec![10.0, 10.0, 10.0]);
///
/// assert_eq!(assignment.machine_count(), 2);
/// assert_eq!(assignment.load("B"), Some(30.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    machines: IndexMap<MachineId, Vec<f64>>,
}

impl Assignment {
    /// Creates an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assignment with the given machines and no tasks.
    pub fn with_machines<I, S>(machine_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MachineId>,
    {
        Self {
            machines: machine_ids
                .into_iter()
                .map(|id| (id.into(), Vec::new()))
                .collect(),
        }
    }

    /// Groups records by machine, keeping row order within each machine.
    pub fn from_records(records: &[TaskRecord]) -> Self {
        let mut assignment = Self::new();
        for record in records {
            assignment.push(&record.machine, record.processing_time);
        }
        assignment
    }

    /// Appends tasks to a machine, creating it if needed.
    pub fn with_machine(mut self, machine_id: impl Into<MachineId>, durations: Vec<f64>) -> Self {
        self.machines
            .entry(machine_id.into())
            .or_default()
            .extend(durations);
        self
    }

    pub(crate) fn push(&mut self, machine_id: &str, duration: f64) {
        match self.machines.get_mut(machine_id) {
            Some(tasks) => tasks.push(duration),
            None => {
                self.machines.insert(machine_id.to_string(), vec![duration]);
            }
        }
    }

    /// Machine identifiers in first-encountered order.
    pub fn machine_ids(&self) -> Vec<MachineId> {
        self.machines.keys().cloned().collect()
    }

    /// Tasks on a machine, in assignment order.
    pub fn durations(&self, machine_id: &str) -> Option<&[f64]> {
        self.machines.get(machine_id).map(Vec::as_slice)
    }

    /// Total processing time on a machine.
    pub fn load(&self, machine_id: &str) -> Option<f64> {
        self.machines.get(machine_id).map(|tasks| tasks.iter().sum::<f64>())
    }

    /// `(machine, load)` pairs in machine order.
    pub fn loads(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.machines
            .iter()
            .map(|(id, tasks)| (id.as_str(), tasks.iter().sum::<f64>()))
    }

    /// `(machine, tasks)` pairs in machine order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.machines
            .iter()
            .map(|(id, tasks)| (id.as_str(), tasks.as_slice()))
    }

    /// Every duration, machine by machine.
    pub fn all_durations(&self) -> Vec<f64> {
        self.machines.values().flatten().copied().collect()
    }

    /// Sum of all durations.
    pub fn total_load(&self) -> f64 {
        self.machines.values().flatten().sum()
    }

    /// Number of machines (including idle ones).
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// Number of tasks across all machines.
    pub fn task_count(&self) -> usize {
        self.machines.values().map(Vec::len).sum()
    }

    /// Whether there are no machines.
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}
