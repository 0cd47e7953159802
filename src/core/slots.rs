//! Discretization of the working day into fixed-width slots.
//!
//! Every scheduling computation is done in slot indices; wall-clock time only
//! appears at the edges (labels, user input, seed data).

use crate::core::types::{Meridiem, SlotIndex, WorkingDay};
use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Fixed daily window and slot width.
#[derive(Debug, Clone, Copy)]
pub struct WorkingHours {
    pub start_index: SlotIndex,
    pub end_index: SlotIndex,
    pub interval_minutes: u32,
    pub open_hour: u32,
    pub days: [WorkingDay; 5],
}

pub const WORKING_HOURS: WorkingHours = WorkingHours {
    start_index: 0,
    end_index: 16,
    interval_minutes: 30,
    open_hour: 8,
    days: [
        WorkingDay::Monday,
        WorkingDay::Tuesday,
        WorkingDay::Wednesday,
        WorkingDay::Thursday,
        WorkingDay::Friday,
    ],
};

impl WorkingHours {
    /// Number of slots in one working day.
    pub const fn slots_per_day(&self) -> SlotIndex {
        self.end_index - self.start_index
    }

    pub fn opening_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.open_hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Slot indices of one day, opening to closing.
    pub fn indices(&self) -> std::ops::Range<SlotIndex> {
        self.start_index..self.end_index
    }
}

/// Wall-clock time of a slot boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTime(NaiveTime);

impl SlotTime {
    /// Hour on a 12-hour clock; `12` for both noon and midnight.
    pub fn hour12(&self) -> u32 {
        self.0.hour12().1
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.0.hour12().0 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// `"8:00 AM"`, `"12:30 PM"`.
    pub fn long(&self) -> String {
        format!("{}:{:02} {}", self.hour12(), self.minute(), self.meridiem())
    }

    /// `"8a"`, `"12:30p"`.
    pub fn short(&self) -> String {
        if self.minute() == 0 {
            format!("{}{}", self.hour12(), self.meridiem().short())
        } else {
            format!(
                "{}:{:02}{}",
                self.hour12(),
                self.minute(),
                self.meridiem().short()
            )
        }
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long())
    }
}

/// Time at the start of slot `index`. Wraps past midnight, so indices at or
/// beyond closing (booking end labels) are still defined.
pub fn index_to_time(index: SlotIndex) -> SlotTime {
    let minutes = i64::from(index) * i64::from(WORKING_HOURS.interval_minutes);
    let (time, _) = WORKING_HOURS
        .opening_time()
        .overflowing_add_signed(Duration::minutes(minutes));
    SlotTime(time)
}

/// Fractional hour of day at the start of slot `index` (`8.0`, `8.5`, ...).
pub fn index_to_hour(index: SlotIndex) -> f32 {
    WORKING_HOURS.open_hour as f32
        + index as f32 * WORKING_HOURS.interval_minutes as f32 / 60.0
}

/// Slot index for a fractional hour of day (`14.5` is 2:30 PM). Hours before
/// opening give negative indices.
pub fn hour_to_index(hour: f32) -> SlotIndex {
    let per_hour = 60.0 / WORKING_HOURS.interval_minutes as f32;
    ((hour - WORKING_HOURS.open_hour as f32) * per_hour).round() as SlotIndex
}

/// Slot index for a clock time, or `None` if it is not on a slot boundary.
pub fn time_to_index(time: NaiveTime) -> Option<SlotIndex> {
    if time.second() != 0 || time.minute() % WORKING_HOURS.interval_minutes != 0 {
        return None;
    }
    let minutes = (time - WORKING_HOURS.opening_time()).num_minutes();
    Some((minutes / i64::from(WORKING_HOURS.interval_minutes)) as SlotIndex)
}
