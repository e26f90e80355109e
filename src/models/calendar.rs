//! Calendar helpers: date ranges and recurring weekday availability.
//!
//! Rosters work over plain calendar dates. This module provides the
//! range iterators used to seed a roster's day set and a per-weekday
//! availability pattern that expands to concrete dates.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Iterates over consecutive dates in the half-open range `[start, end)`.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d < end)
}

/// Like [`date_range`], but skips Saturdays and Sundays.
pub fn business_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    date_range(start, end).filter(|d| is_business_day(*d))
}

/// Whether a date falls on Monday through Friday.
#[inline]
pub fn is_business_day(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() <= 5
}

/// Recurring weekday availability.
///
/// Describes which working weekdays a participant is generally
/// available on; [`WeekdayPattern::dates_in`] expands the pattern to
/// the concrete dates of a range, ready to feed into a roster's
/// preferences. Weekends are never included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayPattern {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
}

impl WeekdayPattern {
    /// No available weekdays.
    pub fn none() -> Self {
        Self::default()
    }

    /// Available Monday through Friday.
    pub fn weekdays() -> Self {
        Self {
            monday: true,
            tuesday: true,
            wednesday: true,
            thursday: true,
            friday: true,
        }
    }

    /// Marks a weekday as available. Saturday and Sunday are ignored.
    pub fn with(mut self, weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => self.monday = true,
            Weekday::Tue => self.tuesday = true,
            Weekday::Wed => self.wednesday = true,
            Weekday::Thu => self.thursday = true,
            Weekday::Fri => self.friday = true,
            Weekday::Sat | Weekday::Sun => {}
        }
        self
    }

    /// Whether the pattern includes the given weekday.
    pub fn allows(&self, weekday: Weekday) -> bool {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat | Weekday::Sun => false,
        }
    }

    /// Concrete dates in `[start, end)` matching the pattern.
    pub fn dates_in(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let pattern = *self;
        date_range(start, end)
            .filter(|d| pattern.allows(d.weekday()))
            .collect()
    }
}
