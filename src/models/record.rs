//! Flat input records.
//!
//! `TaskRecord` is one row of a task assignment file. `ExperimentRecord`
//! is one row of the experiment results file written by the heuristic
//! runner; its column names are kept exactly as the runner writes them.

use serde::{Deserialize, Serialize};

/// One task on one machine, as read from an assignment file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Machine identifier.
    pub machine: String,
    /// Task processing time.
    pub processing_time: f64,
}

impl TaskRecord {
    /// Creates a record.
    pub fn new(machine: impl Into<String>, processing_time: f64) -> Self {
        Self {
            machine: machine.into(),
            processing_time,
        }
    }
}

/// Flat task list in source order.
pub fn durations_of(records: &[TaskRecord]) -> Vec<f64> {
    records.iter().map(|r| r.processing_time).collect()
}

/// One replication of one heuristic run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    /// Heuristic name (e.g. `searchLocalBestImprovement`).
    #[serde(rename = "Heuristica")]
    pub heuristic: String,
    /// Number of tasks.
    #[serde(rename = "N")]
    pub tasks: u64,
    /// Number of machines.
    #[serde(rename = "M")]
    pub machines: u64,
    /// Replication index (1-based).
    #[serde(rename = "Replicação")]
    pub replication: u32,
    /// Wall-clock time of the run, in seconds.
    #[serde(rename = "Tempo")]
    pub elapsed_secs: f64,
    /// Improvement steps taken.
    #[serde(rename = "Iterações")]
    pub iterations: u64,
    /// Free-form value column.
    #[serde(rename = "Valor", default)]
    pub value: String,
    /// Heuristic parameter, `N/A` when the heuristic has none.
    #[serde(rename = "Parametro", default)]
    pub parameter: String,
}

impl ExperimentRecord {
    /// Parameter as a number, if the heuristic has one.
    pub fn parameter_value(&self) -> Option<f64> {
        self.parameter.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_of_keeps_order() {
        let records = vec![
            TaskRecord::new("B", 3.0),
            TaskRecord::new("A", 1.0),
            TaskRecord::new("B", 2.0),
        ];
        assert_eq!(durations_of(&records), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_experiment_record_json_names() {
        let record = ExperimentRecord {
            heuristic: "searchLocalBestImprovement".into(),
            tasks: 31,
            machines: 10,
            replication: 1,
            elapsed_secs: 0.25,
            iterations: 42,
            value: "teste".into(),
            parameter: "N/A".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Replicação"], 1);
        assert_eq!(json["Iterações"], 42);
        assert_eq!(record.parameter_value(), None);
    }

    #[test]
    fn test_parameter_value() {
        let mut record = ExperimentRecord {
            heuristic: "ils".into(),
            tasks: 100,
            machines: 10,
            replication: 2,
            elapsed_secs: 1.0,
            iterations: 7,
            value: String::new(),
            parameter: "0.100000".into(),
        };
        assert_eq!(record.parameter_value(), Some(0.1));
        record.parameter = "N/A".into();
        assert_eq!(record.parameter_value(), None);
    }
}
