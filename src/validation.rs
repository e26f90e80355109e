//! Input validation.
//!
//! Fail-fast checks run before a model is built, and integrity checks
//! for rosters that crossed a persistence boundary. Validators collect
//! every problem they find instead of stopping at the first.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::Roster;

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
    /// A solve was requested with an empty participant set; the fair
    /// share per participant would be undefined.
    NoParticipants,
    /// The spacing window is zero.
    InvalidWindow,
    /// An assignment references a participant with no preference entry.
    UnknownAssignee,
    /// An assignment references a day outside the roster's day set.
    AssignmentOutsideDays,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a solve request before the model is built.
///
/// Checks:
/// 1. At least one participant exists.
/// 2. The spacing window, when given, is at least 1.
///
/// Sparse availability is deliberately not checked here: whether a
/// participant's preferred days suffice is exactly what the solver
/// decides, and it reports infeasibility with a diagnostic.
pub fn validate_request<D, P>(
    availability: &BTreeMap<P, BTreeSet<D>>,
    window: Option<u32>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if availability.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoParticipants,
            "at least one participant is required",
        ));
    }

    if window == Some(0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidWindow,
            "spacing window must be at least 1",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the internal consistency of a roster aggregate.
///
/// Rosters built through the mutation API cannot violate these rules;
/// a deserialized or hand-assembled one can. Checks that every
/// assignment references a known participant and a day in the day set.
///
/// Preference days outside the day set are allowed: participants may
/// state preferences for dates the roster does not (yet) cover.
pub fn validate_roster(roster: &Roster) -> ValidationResult {
    let mut errors = Vec::new();

    for (day, participant) in roster.assignments() {
        if !roster.preferences().contains_key(participant) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownAssignee,
                format!("assignment on {day} references unknown participant '{participant}'"),
            ));
        }
        if !roster.days().contains(day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::AssignmentOutsideDays,
                format!("assignment for '{participant}' on {day} is outside the roster's days"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
