//! Exact rostering engine: build → solve → decode.
//!
//! Formulates day-assignment as a mixed-integer linear program and
//! solves it exactly. Greedy assignment cannot guarantee coverage,
//! fairness, and availability simultaneously; the MILP formulation
//! detects infeasibility instead of returning a broken roster.
//!
//! Each call is synchronous, stateless, and independent: the model and
//! every constraint row are allocated per call, so concurrent solves
//! share nothing. Inputs are borrowed and never mutated.
//!
//! # References
//!
//! - Wolsey (1998), "Integer Programming"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

mod backend;
mod model;

pub use backend::{BackendError, GoodLpBackend, MilpBackend};
pub use model::{ConstraintRow, RosterModel, RosterModelBuilder};

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use chrono::NaiveDate;

use crate::error::SolveError;
use crate::validation::validate_request;

/// A schedulable calendar day: totally ordered, copyable, with a
/// whole-day distance measure for spacing constraints.
///
/// Implemented for [`chrono::NaiveDate`] and for plain integers
/// (day ordinals), which keep tests and synthetic models terse.
pub trait Day: Copy + Ord + Debug {
    /// Signed number of days from `earlier` to `self`.
    fn days_since(self, earlier: Self) -> i64;
}

impl Day for NaiveDate {
    fn days_since(self, earlier: Self) -> i64 {
        self.signed_duration_since(earlier).num_days()
    }
}

impl Day for i64 {
    fn days_since(self, earlier: Self) -> i64 {
        self - earlier
    }
}

impl Day for i32 {
    fn days_since(self, earlier: Self) -> i64 {
        i64::from(self) - i64::from(earlier)
    }
}

/// Assigns exactly one participant to every day.
///
/// `availability` keys define the participant set; each participant may
/// only be assigned on days in its mapped set. `window`, when greater
/// than 1, additionally forbids assigning a participant twice within
/// any `window` consecutive days.
///
/// Returns `(day, participant)` pairs sorted by day (ties by
/// participant). Guarantees, for every returned solution:
///
/// - every input day appears exactly once;
/// - every pair satisfies the availability mapping;
/// - per-participant counts differ by at most one;
/// - with `window = w`, assigned days of one participant differ by ≥ w.
///
/// # Errors
///
/// [`SolveError::InvalidInput`] on an empty participant set or
/// `window == 0`; [`SolveError::Infeasible`] when no assignment
/// satisfies all constraints; [`SolveError::Solver`] on any other
/// backend failure.
///
/// # Example
///
/// ```
/// use std::collections::{BTreeMap, BTreeSet};
/// use fair_rota::solver::solve;
///
/// let days: BTreeSet<i64> = (0..4).collect();
/// let mut availability: BTreeMap<&str, BTreeSet<i64>> = BTreeMap::new();
/// availability.insert("alice", (0..4).collect());
/// availability.insert("bob", (0..4).collect());
///
/// let roster = solve(&days, &availability, None).unwrap();
/// assert_eq!(roster.len(), 4);
/// ```
pub fn solve<D: Day, P: Clone + Ord>(
    days: &BTreeSet<D>,
    availability: &BTreeMap<P, BTreeSet<D>>,
    window: Option<u32>,
) -> Result<Vec<(D, P)>, SolveError> {
    solve_with(&GoodLpBackend, days, availability, window)
}

/// [`solve`] with an explicit MILP backend.
pub fn solve_with<D: Day, P: Clone + Ord>(
    backend: &impl MilpBackend,
    days: &BTreeSet<D>,
    availability: &BTreeMap<P, BTreeSet<D>>,
    window: Option<u32>,
) -> Result<Vec<(D, P)>, SolveError> {
    if let Err(errors) = validate_request(availability, window) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        return Err(SolveError::InvalidInput(messages.join("; ")));
    }
    if days.is_empty() {
        return Ok(Vec::new());
    }

    let model = RosterModelBuilder::new(days, availability)
        .with_window(window.unwrap_or(1))
        .build();

    let values = backend
        .solve(&model.objective, &model.rows)
        .map_err(|e| match e {
            BackendError::Infeasible(msg) => SolveError::Infeasible(msg),
            BackendError::Failure(msg) => SolveError::Solver(msg),
        })?;

    Ok(decode(model.labels, &values))
}

/// Maps the raw solution vector back to `(day, participant)` pairs.
///
/// Solver output is floating point; anything above 0.5 counts as
/// assigned. A day with zero or two assignees here would mean the
/// coverage rows were wrong — a model bug, asserted by tests rather
/// than handled.
fn decode<D: Day, P: Clone + Ord>(labels: Vec<(D, P)>, values: &[f64]) -> Vec<(D, P)> {
    let mut pairs: Vec<(D, P)> = labels
        .into_iter()
        .zip(values.iter().copied())
        .filter_map(|(label, v)| (v > 0.5).then_some(label))
        .collect();
    pairs.sort();
    pairs
}
