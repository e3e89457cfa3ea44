//! Makespan evaluation and baseline comparison.
//!
//! Scores an externally produced assignment and compares it with two
//! baselines over the same tasks and machines.
//!
//! # Algorithm
//!
//! - **Uniform**: round-robin, task `i` on machine `i mod m`.
//! - **Greedy**: LPT list scheduling, longest task first onto the
//!   least-loaded machine (first-listed machine wins ties).
//!
//! Neither baseline is optimal; together they give a cheap sanity check
//! for a heuristic's output.
//!
//! # KPI
//!
//! `LoadKpi` reports per-machine loads, spread, and a lower bound on the
//! makespan.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod compare;
mod kpi;
mod makespan;
mod strategies;

pub use compare::{compare_strategies, evaluate_records, Strategy, StrategyComparison, Verdict};
pub use kpi::{LoadKpi, MachineLoad};
pub use makespan::{compute_makespan, makespans_equal, MAKESPAN_EPSILON};
pub use strategies::{build_greedy_assignment, build_uniform_assignment};
