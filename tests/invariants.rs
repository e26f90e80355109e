//! Property tests for the solver's output invariants.
//!
//! Exact output is intentionally under-determined (the objective does
//! not rank feasible solutions), so these tests assert the invariants
//! every returned roster must satisfy, over randomized inputs.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use fair_rota::{solve, SolveError};

const NAMES: [&str; 4] = ["ada", "ben", "cid", "eve"];

fn full_availability(
    n_participants: usize,
    days: &BTreeSet<i64>,
) -> BTreeMap<String, BTreeSet<i64>> {
    NAMES[..n_participants]
        .iter()
        .map(|name| (name.to_string(), days.clone()))
        .collect()
}

/// Asserts the four solution invariants: coverage, availability,
/// fairness, spacing.
fn assert_invariants(
    days: &BTreeSet<i64>,
    availability: &BTreeMap<String, BTreeSet<i64>>,
    window: u32,
    roster: &[(i64, String)],
) -> Result<(), TestCaseError> {
    // Coverage: every day exactly once.
    let covered: Vec<i64> = roster.iter().map(|(d, _)| *d).collect();
    let covered_set: BTreeSet<i64> = covered.iter().copied().collect();
    prop_assert_eq!(covered.len(), days.len());
    prop_assert_eq!(&covered_set, days);

    // Availability: only preferred days.
    for (day, participant) in roster {
        prop_assert!(
            availability[participant].contains(day),
            "{} assigned outside preferences on day {}",
            participant,
            day
        );
    }

    // Fairness: every participant within floor..=ceil of the share.
    let floor = days.len() / availability.len();
    let ceil = days.len().div_ceil(availability.len());
    for participant in availability.keys() {
        let count = roster.iter().filter(|(_, p)| p == participant).count();
        prop_assert!(
            (floor..=ceil).contains(&count),
            "{} has {} assignments, expected {}..={}",
            participant,
            count,
            floor,
            ceil
        );
    }

    // Spacing: assigned days of one participant differ by >= window.
    for participant in availability.keys() {
        let mut assigned: Vec<i64> = roster
            .iter()
            .filter(|(_, p)| p == participant)
            .map(|(d, _)| *d)
            .collect();
        assigned.sort_unstable();
        for pair in assigned.windows(2) {
            prop_assert!(
                pair[1] - pair[0] >= i64::from(window),
                "{} assigned days {} and {} within window {}",
                participant,
                pair[0],
                pair[1],
                window
            );
        }
    }

    Ok(())
}

proptest! {
    /// With everyone available every day and no spacing, a solution
    /// always exists and satisfies all invariants.
    #[test]
    fn full_availability_is_always_solvable(
        n_days in 1i64..=10,
        n_participants in 1usize..=4,
    ) {
        let days: BTreeSet<i64> = (0..n_days).collect();
        let availability = full_availability(n_participants, &days);

        let roster = solve(&days, &availability, None).unwrap();
        assert_invariants(&days, &availability, 1, &roster)?;
    }

    /// Arbitrary availability and window: the solver either returns a
    /// roster satisfying every invariant or reports infeasibility. It
    /// never fails any other way and never returns a partial roster.
    #[test]
    fn solutions_satisfy_all_invariants(
        n_days in 1i64..=8,
        preferred in prop::collection::vec(
            prop::collection::btree_set(0i64..8, 0..=6usize),
            1..=3,
        ),
        window in 1u32..=3,
    ) {
        let days: BTreeSet<i64> = (0..n_days).collect();
        let availability: BTreeMap<String, BTreeSet<i64>> = preferred
            .into_iter()
            .enumerate()
            .map(|(i, ds)| (NAMES[i].to_string(), ds))
            .collect();

        match solve(&days, &availability, Some(window)) {
            Ok(roster) => assert_invariants(&days, &availability, window, &roster)?,
            Err(SolveError::Infeasible(_)) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
        }
    }

    /// Pins the spacing semantics: the anchored sliding window is
    /// equivalent to a pairwise minimum gap between assigned days.
    #[test]
    fn spacing_means_pairwise_minimum_gap(
        n_days in 1i64..=12,
        n_participants in 2usize..=4,
        window in 2u32..=3,
    ) {
        let days: BTreeSet<i64> = (0..n_days).collect();
        let availability = full_availability(n_participants, &days);

        if let Ok(roster) = solve(&days, &availability, Some(window)) {
            assert_invariants(&days, &availability, window, &roster)?;
        }
    }
}
