//! MILP model construction.
//!
//! Translates a rostering request into a flat mixed-integer model:
//! one binary variable per (participant, day) pair, a placeholder
//! objective, and one [`ConstraintRow`] per constraint.
//!
//! # Variable order
//!
//! The variable vector enumerates participants in their map order
//! (outer) and days in ascending order (inner). [`RosterModel::labels`]
//! records this order once; the decoder walks the same vector, so
//! construction and decoding can never disagree on which variable
//! means what.
//!
//! # Reference
//! Wolsey (1998), "Integer Programming", Ch. 1 (assignment formulations)

use std::collections::{BTreeMap, BTreeSet};

use super::Day;

/// A linear constraint over the full variable vector:
/// `lower <= coefficients . x <= upper`.
#[derive(Debug, Clone)]
pub struct ConstraintRow {
    /// One coefficient per decision variable, in label order.
    pub coefficients: Vec<f64>,
    /// Lower bound (use `f64::NEG_INFINITY` for none).
    pub lower: f64,
    /// Upper bound (use `f64::INFINITY` for none).
    pub upper: f64,
}

impl ConstraintRow {
    fn new(coefficients: Vec<f64>, lower: f64, upper: f64) -> Self {
        Self {
            coefficients,
            lower,
            upper,
        }
    }
}

/// A complete MILP instance for one rostering request.
///
/// All variables are binary; bounds `[0, 1]` and integrality are
/// implied and enforced by the backend.
#[derive(Debug, Clone)]
pub struct RosterModel<D, P> {
    /// `(day, participant)` label per variable, in construction order.
    pub labels: Vec<(D, P)>,
    /// Objective coefficients (minimized). All ones: the objective is
    /// constant under the coverage constraints and only serves to give
    /// the backend something to optimize; which feasible solution is
    /// returned among ties is backend-dependent.
    pub objective: Vec<f64>,
    /// Constraint rows.
    pub rows: Vec<ConstraintRow>,
}

impl<D, P> RosterModel<D, P> {
    /// Number of decision variables.
    pub fn num_vars(&self) -> usize {
        self.labels.len()
    }
}

/// Builds a [`RosterModel`] from days, availability, and a spacing window.
///
/// # Constraint families
///
/// 1. **Coverage** — per day: exactly one assignee.
/// 2. **Fairness** — per participant: between `⌊days/participants⌋`
///    and `⌊days/participants⌋ + 1` assignments.
/// 3. **Availability** — per participant: zero assignments outside the
///    preferred day set (one aggregate row, omitted when every day is
///    preferred).
/// 4. **Spacing** — when `window > 1`, per participant and anchor day:
///    at most one assignment among the days within `window` days at or
///    after the anchor.
pub struct RosterModelBuilder<'a, D, P> {
    days: Vec<D>,
    participants: Vec<&'a P>,
    availability: &'a BTreeMap<P, BTreeSet<D>>,
    window: u32,
}

impl<'a, D: Day, P: Clone + Ord> RosterModelBuilder<'a, D, P> {
    /// Creates a builder. `availability` keys define the participant
    /// set; `days` must be non-empty and `availability` must have at
    /// least one key (checked by the caller, see `validation`).
    pub fn new(days: &'a BTreeSet<D>, availability: &'a BTreeMap<P, BTreeSet<D>>) -> Self {
        Self {
            days: days.iter().copied().collect(),
            participants: availability.keys().collect(),
            availability,
            window: 1,
        }
    }

    /// Sets the minimum spacing window in days (default 1 = no spacing
    /// beyond one-slot-per-day).
    pub fn with_window(mut self, window: u32) -> Self {
        self.window = window;
        self
    }

    /// Builds the full model.
    pub fn build(&self) -> RosterModel<D, P> {
        let mut rows = Vec::new();
        self.coverage_rows(&mut rows);
        self.fairness_rows(&mut rows);
        self.availability_rows(&mut rows);
        if self.window > 1 {
            self.spacing_rows(&mut rows);
        }

        RosterModel {
            labels: self.labels(),
            objective: vec![1.0; self.days.len() * self.participants.len()],
            rows,
        }
    }

    /// The shared variable order: participants outer, days inner.
    fn labels(&self) -> Vec<(D, P)> {
        let mut labels = Vec::with_capacity(self.days.len() * self.participants.len());
        for p in &self.participants {
            for d in &self.days {
                labels.push((*d, (*p).clone()));
            }
        }
        labels
    }

    /// An indicator row: coefficient 1 where `f(participant, day)`
    /// holds, 0 elsewhere, in label order.
    fn indicator(&self, f: impl Fn(&P, D) -> bool) -> Vec<f64> {
        let mut coefficients = Vec::with_capacity(self.days.len() * self.participants.len());
        for p in &self.participants {
            for d in &self.days {
                coefficients.push(if f(p, *d) { 1.0 } else { 0.0 });
            }
        }
        coefficients
    }

    /// Exactly one assignee per day.
    fn coverage_rows(&self, rows: &mut Vec<ConstraintRow>) {
        for day in &self.days {
            rows.push(ConstraintRow::new(
                self.indicator(|_, d| d == *day),
                1.0,
                1.0,
            ));
        }
    }

    /// Per-participant assignment count within one of the fair share.
    fn fairness_rows(&self, rows: &mut Vec<ConstraintRow>) {
        let share = (self.days.len() / self.participants.len()) as f64;
        for participant in &self.participants {
            rows.push(ConstraintRow::new(
                self.indicator(|p, _| p == *participant),
                share,
                share + 1.0,
            ));
        }
    }

    /// No assignments on days outside a participant's preferred set.
    fn availability_rows(&self, rows: &mut Vec<ConstraintRow>) {
        for participant in &self.participants {
            let preferred = &self.availability[*participant];
            if self.days.iter().all(|d| preferred.contains(d)) {
                continue;
            }
            rows.push(ConstraintRow::new(
                self.indicator(|p, d| p == *participant && !preferred.contains(&d)),
                0.0,
                0.0,
            ));
        }
    }

    /// At most one assignment per participant within any `window`-day
    /// span anchored at a day. Anchoring at every day makes this
    /// equivalent to requiring any two assigned days of one participant
    /// to differ by at least `window`.
    fn spacing_rows(&self, rows: &mut Vec<ConstraintRow>) {
        let window = i64::from(self.window);
        for participant in &self.participants {
            for anchor in &self.days {
                rows.push(ConstraintRow::new(
                    self.indicator(|p, d| {
                        p == *participant && d >= *anchor && d.days_since(*anchor) < window
                    }),
                    0.0,
                    1.0,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        days: &[i64],
        availability: &[(&str, &[i64])],
    ) -> (BTreeSet<i64>, BTreeMap<String, BTreeSet<i64>>) {
        let days: BTreeSet<i64> = days.iter().copied().collect();
        let availability = availability
            .iter()
            .map(|(p, ds)| (p.to_string(), ds.iter().copied().collect()))
            .collect();
        (days, availability)
    }

    #[test]
    fn test_label_order_participants_outer_days_inner() {
        let (days, avail) = request(&[10, 11], &[("alice", &[10, 11]), ("bob", &[10, 11])]);
        let model = RosterModelBuilder::new(&days, &avail).build();

        let expected = vec![
            (10, "alice".to_string()),
            (11, "alice".to_string()),
            (10, "bob".to_string()),
            (11, "bob".to_string()),
        ];
        assert_eq!(model.labels, expected);
        assert_eq!(model.num_vars(), 4);
        assert_eq!(model.objective, vec![1.0; 4]);
    }

    #[test]
    fn test_coverage_rows_one_per_day() {
        let (days, avail) = request(&[10, 11, 12], &[("alice", &[]), ("bob", &[])]);
        let model = RosterModelBuilder::new(&days, &avail).build();

        // First three rows are coverage: each sums one column per participant.
        let coverage: Vec<_> = model.rows.iter().take(3).collect();
        for (i, row) in coverage.iter().enumerate() {
            assert_eq!(row.lower, 1.0);
            assert_eq!(row.upper, 1.0);
            let ones: Vec<usize> = row
                .coefficients
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == 1.0)
                .map(|(j, _)| j)
                .collect();
            // Day i appears at offset i within each participant's block of 3.
            assert_eq!(ones, vec![i, i + 3]);
        }
    }

    #[test]
    fn test_fairness_bounds_floor_to_floor_plus_one() {
        let (days, avail) = request(&[1, 2, 3], &[("alice", &[]), ("bob", &[])]);
        let model = RosterModelBuilder::new(&days, &avail).build();

        // Rows 3..5 are fairness (after 3 coverage rows).
        for row in &model.rows[3..5] {
            assert_eq!(row.lower, 1.0); // floor(3/2)
            assert_eq!(row.upper, 2.0);
            assert_eq!(row.coefficients.iter().sum::<f64>(), 3.0);
        }
    }

    #[test]
    fn test_availability_row_pins_disallowed_days() {
        let (days, avail) = request(&[1, 2, 3], &[("alice", &[1]), ("bob", &[1, 2, 3])]);
        let model = RosterModelBuilder::new(&days, &avail).build();

        // 3 coverage + 2 fairness + 1 availability (bob is fully available).
        assert_eq!(model.rows.len(), 6);
        let row = &model.rows[5];
        assert_eq!((row.lower, row.upper), (0.0, 0.0));
        // alice block is variables 0..3; days 2 and 3 are disallowed.
        assert_eq!(row.coefficients, vec![0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_no_spacing_rows_for_unit_window() {
        let (days, avail) = request(&[1, 2], &[("alice", &[1, 2])]);
        let model = RosterModelBuilder::new(&days, &avail).with_window(1).build();
        // 2 coverage + 1 fairness, no availability (fully available), no spacing.
        assert_eq!(model.rows.len(), 3);
    }

    #[test]
    fn test_spacing_rows_cover_window_span() {
        let (days, avail) = request(&[1, 2, 3], &[("alice", &[1, 2, 3])]);
        let model = RosterModelBuilder::new(&days, &avail).with_window(2).build();

        // 3 coverage + 1 fairness + 3 spacing anchors.
        assert_eq!(model.rows.len(), 7);
        let anchored_at_1 = &model.rows[4];
        assert_eq!((anchored_at_1.lower, anchored_at_1.upper), (0.0, 1.0));
        // Days 1 and 2 fall in [1, 3); day 3 does not.
        assert_eq!(anchored_at_1.coefficients, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_spacing_respects_day_gaps_not_positions() {
        // Days 1 and 5 are adjacent positions but 4 days apart.
        let (days, avail) = request(&[1, 5], &[("alice", &[1, 5])]);
        let model = RosterModelBuilder::new(&days, &avail).with_window(3).build();

        let anchored_at_1 = &model.rows[3];
        // Day 5 is outside [1, 4): both assignable together.
        assert_eq!(anchored_at_1.coefficients, vec![1.0, 0.0]);
    }
}
