//! Makespan evaluation for externally produced schedules.
//!
//! Reads the task-to-machine assignment written by a scheduling heuristic,
//! scores it, and checks it against two cheap baselines built from the
//! same tasks: round-robin and greedy longest-processing-time-first.
//! This crate does not schedule anything itself.
//!
//! # Modules
//!
//! - **`models`**: `Assignment`, `TaskRecord`, `ExperimentRecord`
//! - **`evaluation`**: makespan, baselines, strategy comparison, load KPIs
//! - **`validation`**: input integrity checks (durations, machine lists)
//! - **`io`**: CSV readers and task file discovery
//! - **`plot`**: SVG load charts and iteration charts
//! - **`config`**: column layout and chart settings
//!
//! # Example
//!
//! ```
//! use u_makespan::evaluation::{evaluate_records, Verdict};
//! use u_makespan::models::TaskRecord;
//!
//! let records = vec![
//!     TaskRecord::new("A", 30.0),
//!     TaskRecord::new("B", 10.0),
//!     TaskRecord::new("B", 10.0),
//!     TaskRecord::new("B", 10.0),
//! ];
//! let comparison = evaluate_records(&records).unwrap();
//! assert_eq!(comparison.original, 30.0);
//! assert_eq!(comparison.uniform, 40.0);
//! assert_eq!(comparison.verdict, Verdict::Optimal);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod plot;
pub mod validation;

pub use error::{Error, Result};
