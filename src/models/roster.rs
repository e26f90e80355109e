//! Roster aggregate.
//!
//! The mutable bookkeeping object around the solver: a set of days to
//! cover, per-participant preferred days, and the current assignments.
//! [`Roster::make_assignments`] hands the first two to the engine and
//! replaces the third with the result.
//!
//! All collections are ordered, so serialization and iteration are
//! deterministic and a persisted roster round-trips to an equal value.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::calendar::{business_days, date_range};
use crate::error::SolveError;
use crate::solver;

/// Errors from roster mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RosterError {
    /// A preference was stated for a participant not on the roster.
    #[error("unknown participant '{0}'")]
    UnknownParticipant(String),
}

/// A duty roster: days to cover, participant preferences, assignments.
///
/// Participants are identified by name. Preferences are hard: the
/// solver never assigns a participant outside their preferred days.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fair_rota::models::Roster;
///
/// let jan = |d| NaiveDate::from_ymd_opt(2022, 1, d).unwrap();
/// let mut roster = Roster::over_range(jan(1), jan(5));
/// for day in [jan(1), jan(2), jan(3), jan(4)] {
///     roster.add_participant("foo");
///     roster.add_participant("bar");
///     roster.add_preference("foo", day).unwrap();
///     roster.add_preference("bar", day).unwrap();
/// }
/// roster.make_assignments(None).unwrap();
/// assert_eq!(roster.assignments().len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    days: BTreeSet<NaiveDate>,
    preferences: BTreeMap<String, BTreeSet<NaiveDate>>,
    assignments: BTreeSet<(NaiveDate, String)>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster covering every date in `[start, end)`.
    pub fn over_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            days: date_range(start, end).collect(),
            ..Self::default()
        }
    }

    /// Creates a roster covering the business days in `[start, end)`.
    pub fn over_business_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            days: business_days(start, end).collect(),
            ..Self::default()
        }
    }

    /// Days to cover.
    pub fn days(&self) -> &BTreeSet<NaiveDate> {
        &self.days
    }

    /// Participant → preferred days.
    pub fn preferences(&self) -> &BTreeMap<String, BTreeSet<NaiveDate>> {
        &self.preferences
    }

    /// Current assignments as `(day, participant)` pairs.
    pub fn assignments(&self) -> &BTreeSet<(NaiveDate, String)> {
        &self.assignments
    }

    /// Participant names, in order.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.preferences.keys().map(String::as_str)
    }

    /// Adds a day to cover. Adding an existing day is a no-op.
    pub fn add_day(&mut self, day: NaiveDate) {
        self.days.insert(day);
    }

    /// Removes a day. Removing an absent day is a no-op.
    pub fn remove_day(&mut self, day: NaiveDate) {
        self.days.remove(&day);
    }

    /// Adds a participant with no preferred days yet. Re-adding an
    /// existing participant keeps their preferences.
    pub fn add_participant(&mut self, name: impl Into<String>) {
        self.preferences.entry(name.into()).or_default();
    }

    /// Removes a participant and their preferences.
    pub fn remove_participant(&mut self, name: &str) {
        self.preferences.remove(name);
    }

    /// Marks a day as preferred for a participant.
    ///
    /// # Errors
    /// [`RosterError::UnknownParticipant`] if the participant was never
    /// added.
    pub fn add_preference(&mut self, name: &str, day: NaiveDate) -> Result<(), RosterError> {
        match self.preferences.get_mut(name) {
            Some(days) => {
                days.insert(day);
                Ok(())
            }
            None => Err(RosterError::UnknownParticipant(name.to_string())),
        }
    }

    /// Unmarks a preferred day. No-op for unknown participants or days.
    pub fn remove_preference(&mut self, name: &str, day: NaiveDate) {
        if let Some(days) = self.preferences.get_mut(name) {
            days.remove(&day);
        }
    }

    /// Records an assignment directly, e.g. when loading persisted state.
    pub fn add_assignment(&mut self, day: NaiveDate, name: impl Into<String>) {
        self.assignments.insert((day, name.into()));
    }

    /// Drops all assignments.
    pub fn clear_assignments(&mut self) {
        self.assignments.clear();
    }

    /// Whether any assignments exist.
    pub fn has_assignments(&self) -> bool {
        !self.assignments.is_empty()
    }

    /// Solves the roster and replaces all assignments with the result.
    ///
    /// Prior assignments are cleared before solving, so a failed solve
    /// leaves the roster with no assignments rather than stale or
    /// partial ones.
    ///
    /// # Errors
    /// Propagates [`SolveError`] from the engine unchanged.
    pub fn make_assignments(&mut self, window: Option<u32>) -> Result<(), SolveError> {
        self.assignments.clear();
        let solution = solver::solve(&self.days, &self.preferences, window)?;
        self.assignments.extend(solution);
        Ok(())
    }
}
