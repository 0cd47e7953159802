use crate::core::slots::WORKING_HOURS;
use crate::core::types::WorkingDay;
use chrono::{Datelike, Duration, NaiveDate};

/// Monday of the week containing `today`. Sunday belongs to the week that
/// started six days earlier.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let back = today.weekday().num_days_from_monday();
    today - Duration::days(i64::from(back))
}

/// One displayed week, identified by its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekView {
    start: NaiveDate,
}

impl WeekView {
    /// Normalizes any date in the week to its Monday.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: week_start(date),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Friday of this week.
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(4)
    }

    pub fn next(&self) -> Self {
        Self {
            start: self.start + Duration::days(7),
        }
    }

    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Duration::days(7),
        }
    }

    /// Working days paired with their concrete dates.
    pub fn days(&self) -> Vec<(WorkingDay, NaiveDate)> {
        WORKING_HOURS
            .days
            .iter()
            .map(|day| (*day, self.date_of(*day)))
            .collect()
    }

    pub fn date_of(&self, day: WorkingDay) -> NaiveDate {
        self.start + Duration::days(i64::from(day.offset()))
    }

    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.start == week_start(today)
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.start < week_start(today)
    }

    /// `"Oct 19 - Oct 23"`; the year is appended when it differs from today's.
    pub fn range_label(&self, today: NaiveDate) -> String {
        let pattern = if self.start.year() != today.year() {
            "%b %-d, %Y"
        } else {
            "%b %-d"
        };
        format!(
            "{} - {}",
            self.start.format(pattern),
            self.end().format(pattern)
        )
    }
}
