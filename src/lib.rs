//! Fair day-rostering via exact mixed-integer optimization.
//!
//! Assigns participants to calendar days such that every day gets
//! exactly one assignee, hard availability preferences are respected,
//! workload is balanced within one assignment, and (optionally) no
//! participant serves twice inside a minimum-spacing window. The
//! problem is formulated as a MILP and solved exactly; infeasible
//! inputs are detected and reported instead of producing a broken
//! roster.
//!
//! # Modules
//!
//! - **`solver`**: the engine: model construction, backend invocation,
//!   solution decoding
//! - **`models`**: the `Roster` aggregate and calendar helpers
//! - **`validation`**: fail-fast input checks and aggregate integrity checks
//! - **`error`**: the `SolveError` taxonomy
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use fair_rota::Roster;
//!
//! let jan = |d| NaiveDate::from_ymd_opt(2022, 1, d).unwrap();
//! let mut roster = Roster::over_range(jan(1), jan(5));
//! for name in ["foo", "bar"] {
//!     roster.add_participant(name);
//!     for d in 1..5 {
//!         roster.add_preference(name, jan(d)).unwrap();
//!     }
//! }
//! roster.make_assignments(None).unwrap();
//! assert_eq!(roster.assignments().len(), 4);
//! ```
//!
//! # References
//!
//! - Wolsey (1998), "Integer Programming"
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod error;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::SolveError;
pub use models::{Roster, RosterError, WeekdayPattern};
pub use solver::{solve, Day, GoodLpBackend, MilpBackend};
