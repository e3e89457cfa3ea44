//! Comparison of an assignment against the uniform and greedy baselines.
//!
//! "Optimal" in the verdict means no worse than the two baselines built
//! from the same tasks. It says nothing about the global optimum.

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::makespan::{compute_makespan, makespans_equal};
use super::strategies::{build_greedy_assignment, build_uniform_assignment};
use crate::error::Result;
use crate::models::{durations_of, Assignment, MachineId, TaskRecord};
use crate::validation::{validate_machines_listed, validate_records, validate_same_tasks};

/// An assignment strategy taking part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The assignment produced by the external heuristic.
    Original,
    /// Round-robin redistribution.
    Uniform,
    /// Longest-processing-time-first on the least-loaded machine.
    Greedy,
}

impl Strategy {
    /// All strategies in report order.
    pub const ALL: [Strategy; 3] = [Strategy::Original, Strategy::Uniform, Strategy::Greedy];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Original => "original",
            Strategy::Uniform => "uniform",
            Strategy::Greedy => "greedy",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the original assignment reached the best compared makespan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No worse than either baseline.
    Optimal,
    /// At least one baseline does better.
    Suboptimal,
}

/// Result of comparing the three strategies over one task set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Makespan of the given assignment.
    pub original: f64,
    /// Makespan of the round-robin baseline.
    pub uniform: f64,
    /// Makespan of the greedy LPT baseline.
    pub greedy: f64,
    /// Smallest of the three.
    pub best: f64,
    /// Strategies achieving `best`, in report order.
    pub winners: Vec<Strategy>,
    /// Verdict on the original assignment.
    pub verdict: Verdict,
}

impl StrategyComparison {
    fn from_makespans(original: f64, uniform: f64, greedy: f64) -> Self {
        let best = original.min(uniform).min(greedy);
        let winners: Vec<Strategy> = Strategy::ALL
            .into_iter()
            .zip([original, uniform, greedy])
            .filter(|&(_, makespan)| makespans_equal(makespan, best))
            .map(|(strategy, _)| strategy)
            .collect();
        let verdict = if winners.contains(&Strategy::Original) {
            Verdict::Optimal
        } else {
            Verdict::Suboptimal
        };

        Self {
            original,
            uniform,
            greedy,
            best,
            winners,
            verdict,
        }
    }

    /// Makespan of one strategy.
    pub fn makespan_of(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Original => self.original,
            Strategy::Uniform => self.uniform,
            Strategy::Greedy => self.greedy,
        }
    }

    /// Whether the original assignment is among the winners.
    pub fn is_original_optimal(&self) -> bool {
        self.verdict == Verdict::Optimal
    }
}

impl fmt::Display for StrategyComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Makespan of the given assignment: {}", self.original)?;
        writeln!(f, "Makespan of uniform round-robin:  {}", self.uniform)?;
        writeln!(f, "Makespan of greedy LPT:           {}", self.greedy)?;
        let winners: Vec<&str> = self.winners.iter().map(Strategy::name).collect();
        writeln!(f, "Best makespan: {} ({})", self.best, winners.join(", "))?;
        match self.verdict {
            Verdict::Optimal => write!(
                f,
                "OPTIMAL: the given assignment is no worse than both baselines"
            ),
            Verdict::Suboptimal => write!(
                f,
                "SUBOPTIMAL: a baseline beats the given assignment"
            ),
        }
    }
}

/// Compares an assignment with the uniform and greedy baselines.
///
/// `tasks` is the flat task list in source order and must hold exactly the
/// durations of `original`. `machine_ids` fixes slot order for the uniform
/// baseline and tie-break order for the greedy one.
///
/// # Errors
/// Validation error if `tasks` and `original` disagree, if `original` uses
/// a machine missing from `machine_ids`, or if the baselines reject
/// `tasks`/`machine_ids`.
pub fn compare_strategies(
    original: &Assignment,
    tasks: &[f64],
    machine_ids: &[MachineId],
) -> Result<StrategyComparison> {
    validate_same_tasks(original, tasks)?;
    validate_machines_listed(original, machine_ids)?;

    let uniform = build_uniform_assignment(tasks, machine_ids)?;
    let greedy = build_greedy_assignment(tasks, machine_ids)?;

    let comparison = StrategyComparison::from_makespans(
        compute_makespan(original),
        compute_makespan(&uniform),
        compute_makespan(&greedy),
    );
    debug!(
        "makespans: original={} uniform={} greedy={}",
        comparison.original, comparison.uniform, comparison.greedy
    );
    Ok(comparison)
}

/// Builds the original assignment from records and compares it.
///
/// Machines are taken in first-encountered order and tasks in row order.
pub fn evaluate_records(records: &[TaskRecord]) -> Result<StrategyComparison> {
    validate_records(records)?;

    let original = Assignment::from_records(records);
    let tasks = durations_of(records);
    let machine_ids = original.machine_ids();
    info!(
        "evaluating {} task(s) on {} machine(s)",
        tasks.len(),
        machine_ids.len()
    );

    compare_strategies(&original, &tasks, &machine_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_balanced_assignment_optimal() {
        let original = Assignment::new()
            .with_machine("A", vec![10.0, 10.0])
            .with_machine("B", vec![10.0, 10.0]);
        let c = compare_strategies(&original, &[10.0; 4], &ids(&["A", "B"])).unwrap();

        assert_eq!(c.original, 20.0);
        assert_eq!(c.uniform, 20.0);
        assert_eq!(c.greedy, 20.0);
        assert_eq!(c.verdict, Verdict::Optimal);
        assert_eq!(c.winners, Strategy::ALL.to_vec());
    }

    #[test]
    fn test_original_ties_greedy() {
        let original = Assignment::new()
            .with_machine("A", vec![30.0])
            .with_machine("B", vec![10.0, 10.0, 10.0]);
        let c = compare_strategies(&original, &[30.0, 10.0, 10.0, 10.0], &ids(&["A", "B"]))
            .unwrap();

        assert_eq!(c.original, 30.0);
        assert_eq!(c.uniform, 40.0);
        assert_eq!(c.greedy, 30.0);
        assert_eq!(c.best, 30.0);
        assert_eq!(c.winners, vec![Strategy::Original, Strategy::Greedy]);
        assert!(c.is_original_optimal());
    }

    #[test]
    fn test_empty_is_trivially_optimal() {
        let c = compare_strategies(&Assignment::new(), &[], &[]).unwrap();
        assert_eq!(c.original, 0.0);
        assert_eq!(c.uniform, 0.0);
        assert_eq!(c.greedy, 0.0);
        assert_eq!(c.verdict, Verdict::Optimal);
    }

    #[test]
    fn test_suboptimal_original() {
        let records = vec![
            TaskRecord::new("1", 10.0),
            TaskRecord::new("1", 10.0),
            TaskRecord::new("1", 10.0),
            TaskRecord::new("2", 10.0),
        ];
        let c = evaluate_records(&records).unwrap();

        assert_eq!(c.original, 30.0);
        assert_eq!(c.uniform, 20.0);
        assert_eq!(c.greedy, 20.0);
        assert_eq!(c.verdict, Verdict::Suboptimal);
        assert_eq!(c.winners, vec![Strategy::Uniform, Strategy::Greedy]);
        assert_eq!(c.makespan_of(Strategy::Original), 30.0);
    }

    #[test]
    fn test_evaluate_records_empty() {
        let c = evaluate_records(&[]).unwrap();
        assert_eq!(c.best, 0.0);
        assert!(c.is_original_optimal());
    }

    #[test]
    fn test_evaluate_records_rejects_negative() {
        let err = evaluate_records(&[TaskRecord::new("1", -5.0)]).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NegativeDuration
        );
    }

    #[test]
    fn test_mismatched_task_list() {
        let original = Assignment::new().with_machine("A", vec![5.0]);
        let err = compare_strategies(&original, &[5.0, 1.0], &ids(&["A"])).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::TaskSetMismatch
        );
    }

    #[test]
    fn test_overflowing_load_single_machine() {
        let records = vec![TaskRecord::new("A", f64::MAX), TaskRecord::new("A", f64::MAX)];
        let c = evaluate_records(&records).unwrap();

        assert!(c.original.is_infinite());
        assert_eq!(c.winners, Strategy::ALL.to_vec());
        assert_eq!(c.verdict, Verdict::Optimal);
    }

    #[test]
    fn test_original_on_unlisted_machine() {
        let original = Assignment::new().with_machine("C", vec![5.0]);
        let err = compare_strategies(&original, &[5.0], &ids(&["A"])).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::UnknownMachine
        );
    }

    #[test]
    fn test_original_with_idle_listed_machine() {
        let original = Assignment::new().with_machine("A", vec![5.0, 5.0]);
        let c = compare_strategies(&original, &[5.0, 5.0], &ids(&["A", "B"])).unwrap();
        assert_eq!(c.verdict, Verdict::Suboptimal);
        assert_eq!(c.best, 5.0);
    }

    #[test]
    fn test_float_sums_tie() {
        let original = Assignment::new()
            .with_machine("A", vec![0.1, 0.2])
            .with_machine("B", vec![0.3]);
        let c = compare_strategies(&original, &[0.1, 0.2, 0.3], &ids(&["A", "B"])).unwrap();
        assert!(c.is_original_optimal());
    }

    #[test]
    fn test_report_text() {
        let original = Assignment::new().with_machine("A", vec![1.0, 2.0]);
        let c = compare_strategies(&original, &[1.0, 2.0], &ids(&["A"])).unwrap();
        let text = c.to_string();
        assert!(text.contains("Best makespan: 3 (original, uniform, greedy)"));
        assert!(text.ends_with("OPTIMAL: the given assignment is no worse than both baselines"));
    }

    #[test]
    fn test_report_json() {
        let original = Assignment::new()
            .with_machine("A", vec![10.0, 10.0, 10.0])
            .with_machine("B", vec![10.0]);
        let c = compare_strategies(&original, &[10.0; 4], &ids(&["A", "B"])).unwrap();
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["verdict"], "suboptimal");
        assert_eq!(json["winners"][0], "uniform");
    }
}
