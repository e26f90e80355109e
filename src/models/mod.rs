//! Rostering domain models.
//!
//! The [`Roster`] aggregate owns the mutable scheduling state — days,
//! participants, preferences, assignments — and delegates the actual
//! assignment to the solver. Calendar helpers seed day sets and expand
//! recurring weekday availability into concrete dates.

mod calendar;
mod roster;

pub use calendar::{business_days, date_range, is_business_day, WeekdayPattern};
pub use roster::{Roster, RosterError};
