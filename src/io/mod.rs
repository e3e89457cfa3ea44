//! CSV input and file discovery.
//!
//! - **`tasks`**: task assignment files (`Machine,TaskProcessingTime`)
//! - **`experiments`**: experiment result files (one row per replication)
//! - **`discover`**: task files of a search type under a data directory

mod discover;
mod experiments;
mod tasks;

pub use discover::{discover_task_files, plot_dir};
pub use experiments::{load_experiment_file, read_experiment_records};
pub use tasks::{load_task_file, read_task_records};
