use crate::core::slots::index_to_time;
use crate::core::types::{JobLength, SlotIndex, WorkingDay};
use chrono::NaiveDate;
use std::fmt;

/// A confirmed reservation.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub day: WorkingDay,
    pub date: NaiveDate,
    pub start_index: SlotIndex,
    pub duration: JobLength,
    pub description: Option<String>,
}

impl Booking {
    /// Exclusive end slot of the booking.
    pub fn end_index(&self) -> SlotIndex {
        self.start_index + self.duration.span()
    }

    /// True when the booking sits on this `(day, date)` column.
    pub fn is_on(&self, day: WorkingDay, date: NaiveDate) -> bool {
        self.day == day && self.date == date
    }

    pub fn covers(&self, index: SlotIndex) -> bool {
        index >= self.start_index && index < self.end_index()
    }

    /// `"9:00 AM - 11:00 AM"`.
    pub fn time_label(&self) -> String {
        format!(
            "{} - {}",
            index_to_time(self.start_index),
            index_to_time(self.end_index())
        )
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking(id={}, customer='{}', {} {}, {}, {}h)",
            self.id,
            self.customer_name,
            self.day,
            self.date.format("%Y-%m-%d"),
            self.time_label(),
            self.duration
        )
    }
}

/// The slot range a user has clicked and may confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub day: WorkingDay,
    pub date: NaiveDate,
    pub start_index: SlotIndex,
    pub duration: JobLength,
}

impl Selection {
    pub fn end_index(&self) -> SlotIndex {
        self.start_index + self.duration.span()
    }

    /// Same cell as a click at `(day, date, start_index)`.
    pub fn is_at(&self, day: WorkingDay, date: NaiveDate, start_index: SlotIndex) -> bool {
        self.day == day && self.date == date && self.start_index == start_index
    }

    pub fn time_label(&self) -> String {
        format!(
            "{} - {}",
            index_to_time(self.start_index),
            index_to_time(self.end_index())
        )
    }
}

/// The slot currently under the pointer. Keyed by day only; the date is
/// implied by the grid being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hover {
    pub day: WorkingDay,
    pub start_index: SlotIndex,
}
