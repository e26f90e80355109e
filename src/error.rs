//! Solve error taxonomy.
//!
//! Errors are raised eagerly and never accompanied by a partial result:
//! a failed solve returns nothing the caller could mistake for a schedule.

use thiserror::Error;

/// Errors produced by [`crate::solver::solve`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The request was rejected before the backend ran
    /// (no participants, or a zero spacing window).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The constraint system admits no assignment. Carries the
    /// backend's diagnostic message.
    #[error("no feasible assignment: {0}")]
    Infeasible(String),

    /// Any other backend-level failure (unbounded model, numerical
    /// trouble). Not expected with binary variables, but guarded.
    #[error("solver failure: {0}")]
    Solver(String),
}
