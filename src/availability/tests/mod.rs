
use crate::core::models::Booking;
use crate::core::types::{JobLength, SlotIndex, WorkingDay};
use chrono::NaiveDate;

pub(super) fn sample_date() -> NaiveDate {
    // A Monday.
    NaiveDate::from_ymd_opt(2099, 1, 5).unwrap()
}

pub(super) fn hours(h: f32) -> JobLength {
    JobLength::try_from_hours(h).unwrap()
}

pub(super) fn booking_on(
    day: WorkingDay,
    date: NaiveDate,
    start: SlotIndex,
    duration_hours: f32,
) -> Booking {
    Booking {
        id: format!("B-{day}-{start}"),
        customer_name: "Customer".to_string(),
        day,
        date,
        start_index: start,
        duration: hours(duration_hours),
        description: None,
    }
}

pub(super) fn monday_booking(start: SlotIndex, duration_hours: f32) -> Booking {
    booking_on(WorkingDay::Monday, sample_date(), start, duration_hours)
}
