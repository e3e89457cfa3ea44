//! Makespan evaluation domain models.
//!
//! Provides the data types for task assignments read from heuristic
//! output and for the experiment result rows that accompany them.
//!
//! # Domain Mappings
//!
//! | u-makespan | Heuristic output | Parallel machines |
//! |------------|------------------|-------------------|
//! | TaskRecord | CSV row | Job p_j on machine i |
//! | Assignment | Task file | Schedule on P‖C_max |
//! | ExperimentRecord | Results row | Run statistics |

mod assignment;
mod record;

pub use assignment::{Assignment, MachineId};
pub use record::{durations_of, ExperimentRecord, TaskRecord};
