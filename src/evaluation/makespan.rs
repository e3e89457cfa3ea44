//! Makespan of an assignment.

use crate::models::Assignment;

/// Relative tolerance used when comparing makespans.
///
/// Sums of the same durations taken in different orders can differ in the
/// last bits; two makespans within this relative distance are equal.
pub const MAKESPAN_EPSILON: f64 = 1e-9;

/// Makespan (C_max): the largest machine load.
///
/// Returns 0 for an assignment with no machines.
pub fn compute_makespan(assignment: &Assignment) -> f64 {
    assignment
        .loads()
        .map(|(_, load)| load)
        .fold(0.0, f64::max)
}

/// Whether two makespans are equal within [`MAKESPAN_EPSILON`].
///
/// Identical values are always equal, including overflowed sums.
pub fn makespans_equal(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= MAKESPAN_EPSILON * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makespan_is_max_load() {
        let a = Assignment::new()
            .with_machine("A", vec![10.0, 10.0])
            .with_machine("B", vec![30.0])
            .with_machine("C", vec![]);

        let makespan = compute_makespan(&a);
        assert_eq!(makespan, 30.0);
        for (_, load) in a.loads() {
            assert!(makespan >= load);
        }
    }

    #[test]
    fn test_makespan_empty() {
        assert_eq!(compute_makespan(&Assignment::new()), 0.0);
        assert_eq!(compute_makespan(&Assignment::with_machines(["A"])), 0.0);
    }

    #[test]
    fn test_makespan_zero_durations() {
        let a = Assignment::new().with_machine("A", vec![0.0, 0.0, 5.0]);
        assert_eq!(compute_makespan(&a), 5.0);
    }

    #[test]
    fn test_makespan_idempotent() {
        let a = Assignment::new()
            .with_machine("A", vec![1.5, 2.25])
            .with_machine("B", vec![4.0]);
        assert_eq!(compute_makespan(&a), compute_makespan(&a));
    }

    #[test]
    fn test_makespans_equal() {
        assert!(makespans_equal(0.1 + 0.2, 0.3));
        assert!(makespans_equal(0.0, 0.0));
        assert!(!makespans_equal(30.0, 30.001));
        assert!(makespans_equal(f64::INFINITY, f64::INFINITY));
        assert!(!makespans_equal(f64::INFINITY, 1.0));
    }
}
