//! Machine load indicators.
//!
//! Summarises how evenly an assignment spreads work over its machines.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Largest machine load |
//! | Total load | Sum of all durations |
//! | Mean load | Total load / machines |
//! | Load std dev | Population standard deviation of machine loads |
//! | Lower bound | max(total / m, longest task) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5.1: The Makespan without Preemptions

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, MachineId};

/// Load of a single machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineLoad {
    /// Machine identifier.
    pub machine_id: MachineId,
    /// Number of tasks on the machine.
    pub task_count: usize,
    /// Sum of the machine's durations.
    pub load: f64,
}

/// Load indicators of an assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadKpi {
    /// Per-machine loads, in machine order.
    pub machines: Vec<MachineLoad>,
    /// Largest machine load.
    pub makespan: f64,
    /// Sum of all durations.
    pub total_load: f64,
    /// Mean machine load.
    pub mean_load: f64,
    /// Population standard deviation of machine loads.
    pub load_std_dev: f64,
    /// No assignment of these tasks to this many machines can do better.
    pub lower_bound: f64,
}

impl LoadKpi {
    /// Computes load indicators for an assignment.
    pub fn calculate(assignment: &Assignment) -> Self {
        let machines: Vec<MachineLoad> = assignment
            .iter()
            .map(|(id, tasks)| MachineLoad {
                machine_id: id.to_string(),
                task_count: tasks.len(),
                load: tasks.iter().sum(),
            })
            .collect();

        if machines.is_empty() {
            return Self {
                machines,
                makespan: 0.0,
                total_load: 0.0,
                mean_load: 0.0,
                load_std_dev: 0.0,
                lower_bound: 0.0,
            };
        }

        let m = machines.len() as f64;
        let total_load: f64 = machines.iter().map(|ml| ml.load).sum();
        let makespan = machines.iter().map(|ml| ml.load).fold(0.0, f64::max);
        let mean_load = total_load / m;
        let variance = machines
            .iter()
            .map(|ml| (ml.load - mean_load).powi(2))
            .sum::<f64>()
            / m;
        let longest = assignment.all_durations().into_iter().fold(0.0, f64::max);

        Self {
            machines,
            makespan,
            total_load,
            mean_load,
            load_std_dev: variance.sqrt(),
            lower_bound: mean_load.max(longest),
        }
    }

    /// Makespan relative to the lower bound (1.0 = provably optimal).
    ///
    /// Returns `None` when the lower bound is zero.
    pub fn gap_ratio(&self) -> Option<f64> {
        if self.lower_bound <= 0.0 {
            None
        } else {
            Some(self.makespan / self.lower_bound)
        }
    }

    /// Whether the makespan meets the lower bound.
    pub fn is_provably_optimal(&self) -> bool {
        self.makespan <= self.lower_bound * (1.0 + super::MAKESPAN_EPSILON)
    }
}
