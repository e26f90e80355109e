//! MILP backend interface and `good_lp` implementation.
//!
//! The engine never implements its own branch-and-bound. The backend
//! trait is the capability boundary: it receives the flat row
//! representation and returns a raw solution vector in the same
//! variable order.

use good_lp::{default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable};

use super::model::ConstraintRow;

/// Backend-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The model was proven infeasible. Carries the solver diagnostic.
    Infeasible(String),
    /// Any other failure (unbounded model, numerical error).
    Failure(String),
}

/// A mixed-integer solver capable of handling the roster model.
///
/// All variables are binary. Implementations must return one value per
/// objective coefficient, in the same order, with assigned variables
/// at (approximately) 1.
pub trait MilpBackend {
    /// Minimizes `objective . x` subject to `rows`, `x` binary.
    fn solve(&self, objective: &[f64], rows: &[ConstraintRow]) -> Result<Vec<f64>, BackendError>;
}

/// Backend over `good_lp`'s bundled branch-and-bound solver.
///
/// Stateless; safe to share across concurrent solves since each call
/// builds its own problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoodLpBackend;

impl MilpBackend for GoodLpBackend {
    fn solve(&self, objective: &[f64], rows: &[ConstraintRow]) -> Result<Vec<f64>, BackendError> {
        let mut vars = variables!();
        let xs: Vec<Variable> = (0..objective.len())
            .map(|_| vars.add(variable().binary()))
            .collect();

        let mut cost = Expression::with_capacity(xs.len());
        for (&c, &x) in objective.iter().zip(&xs) {
            if c != 0.0 {
                cost.add_mul(c, x);
            }
        }

        let mut problem = vars.minimise(cost).using(default_solver);
        for row in rows {
            let mut lhs = Expression::default();
            for (&c, &x) in row.coefficients.iter().zip(&xs) {
                if c != 0.0 {
                    lhs.add_mul(c, x);
                }
            }
            if row.lower == row.upper {
                problem = problem.with(lhs.eq(row.lower));
            } else {
                if row.lower.is_finite() {
                    problem = problem.with(lhs.clone().geq(row.lower));
                }
                if row.upper.is_finite() {
                    problem = problem.with(lhs.leq(row.upper));
                }
            }
        }

        let solution = problem.solve().map_err(|e| match e {
            ResolutionError::Infeasible => BackendError::Infeasible(e.to_string()),
            other => BackendError::Failure(other.to_string()),
        })?;

        Ok(xs.iter().map(|&x| solution.value(x)).collect())
    }
}
