//! Input validation for makespan evaluation.
//!
//! Checks the structural integrity of task records and machine lists
//! before any assignment is built. Detects:
//! - Negative or non-finite processing times
//! - Empty machine identifiers
//! - Duplicate machines in a machine list
//! - Tasks with nowhere to go (no machines)
//! - Task sets that differ between two views of the same schedule
//! - Assignments using machines outside the compared machine list
//!
//! All checks collect every problem instead of stopping at the first one.

use std::collections::HashSet;

use crate::models::{Assignment, TaskRecord};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A processing time is below zero.
    NegativeDuration,
    /// A processing time is NaN or infinite.
    NonFiniteDuration,
    /// A processing time could not be parsed as a number.
    NonNumericDuration,
    /// A required CSV column is absent.
    MissingColumn,
    /// A row has no machine identifier.
    EmptyMachineId,
    /// The same machine appears twice in a machine list.
    DuplicateMachine,
    /// Tasks were given but no machine to put them on.
    NoMachines,
    /// Two task lists that must hold the same durations do not.
    TaskSetMismatch,
    /// An assignment uses a machine missing from the machine list.
    UnknownMachine,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks a single processing time.
///
/// `context` prefixes the message (e.g. `"row 4"`).
pub fn check_duration(context: &str, duration: f64) -> Option<ValidationError> {
    if !duration.is_finite() {
        Some(ValidationError::new(
            ValidationErrorKind::NonFiniteDuration,
            format!("{context}: processing time {duration} is not finite"),
        ))
    } else if duration < 0.0 {
        Some(ValidationError::new(
            ValidationErrorKind::NegativeDuration,
            format!("{context}: processing time {duration} is negative"),
        ))
    } else {
        None
    }
}

/// Validates task records read from a source file.
///
/// Checks:
/// 1. Every processing time is finite and non-negative
/// 2. Every machine identifier is non-empty
///
/// Row numbers in messages are 1-based data rows (header excluded).
pub fn validate_records(records: &[TaskRecord]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, record) in records.iter().enumerate() {
        let context = format!("row {}", idx + 1);
        if record.machine.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyMachineId,
                format!("{context}: machine identifier is empty"),
            ));
        }
        if let Some(err) = check_duration(&context, record.processing_time) {
            errors.push(err);
        }
    }

    finish(errors)
}

/// Validates a flat task list against the machines it will be spread over.
///
/// Checks:
/// 1. Every duration is finite and non-negative
/// 2. Machine identifiers are unique
/// 3. At least one machine exists when there are tasks
pub fn validate_machine_ids(tasks: &[f64], machine_ids: &[String]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, &duration) in tasks.iter().enumerate() {
        if let Some(err) = check_duration(&format!("task {idx}"), duration) {
            errors.push(err);
        }
    }

    let mut seen = HashSet::new();
    for id in machine_ids {
        if !seen.insert(id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateMachine,
                format!("Duplicate machine ID: {id}"),
            ));
        }
    }

    if !tasks.is_empty() && machine_ids.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            format!("{} task(s) given but no machines to assign them to", tasks.len()),
        ));
    }

    finish(errors)
}

/// Checks that an assignment holds exactly the given multiset of durations.
pub fn validate_same_tasks(assignment: &Assignment, tasks: &[f64]) -> ValidationResult {
    let mut held = assignment.all_durations();
    let mut expected = tasks.to_vec();
    held.sort_by(f64::total_cmp);
    expected.sort_by(f64::total_cmp);

    if held.len() != expected.len() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::TaskSetMismatch,
            format!(
                "assignment holds {} task(s) but the task list has {}",
                held.len(),
                expected.len()
            ),
        )]);
    }

    if let Some((a, b)) = held.iter().zip(&expected).find(|(a, b)| a != b) {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::TaskSetMismatch,
            format!("assignment and task list differ (first difference: {a} vs {b})"),
        )]);
    }

    Ok(())
}

/// Checks that every machine of an assignment appears in `machine_ids`.
///
/// Listed machines absent from the assignment are fine; they are idle.
pub fn validate_machines_listed(
    assignment: &Assignment,
    machine_ids: &[String],
) -> ValidationResult {
    let listed: HashSet<&str> = machine_ids.iter().map(String::as_str).collect();
    let errors = assignment
        .iter()
        .filter(|(id, _)| !listed.contains(id))
        .map(|(id, _)| {
            ValidationError::new(
                ValidationErrorKind::UnknownMachine,
                format!("assignment uses machine {id} which is not in the machine list"),
            )
        })
        .collect();

    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
