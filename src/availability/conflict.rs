use crate::core::models::Booking;
use crate::core::slots::{WORKING_HOURS, index_to_time};
use crate::core::types::{JobLength, SlotIndex, WorkingDay};
use chrono::NaiveDate;

/// Half-open `[a_start, a_end)` and `[b_start, b_end)` share at least one slot.
#[inline]
pub fn intervals_overlap(
    a_start: SlotIndex,
    a_end: SlotIndex,
    b_start: SlotIndex,
    b_end: SlotIndex,
) -> bool {
    a_start < b_end && b_start < a_end
}

fn same_column(
    day: WorkingDay,
    date: NaiveDate,
    bookings: &[Booking],
) -> impl Iterator<Item = &Booking> {
    bookings.iter().filter(move |b| b.is_on(day, date))
}

/// Bookings on `(day, date)` that the candidate range would overlap.
pub fn conflicting_bookings<'a>(
    start: SlotIndex,
    duration: JobLength,
    day: WorkingDay,
    date: NaiveDate,
    bookings: &'a [Booking],
) -> Vec<&'a Booking> {
    let end = start + duration.span();
    same_column(day, date, bookings)
        .filter(|b| intervals_overlap(start, end, b.start_index, b.end_index()))
        .collect()
}

/// Any booking on `(day, date)` overlaps `[start, start + duration)`.
/// Other days and dates never interact.
pub fn has_conflict(
    start: SlotIndex,
    duration: JobLength,
    day: WorkingDay,
    date: NaiveDate,
    bookings: &[Booking],
) -> bool {
    let end = start + duration.span();
    same_column(day, date, bookings)
        .any(|b| intervals_overlap(start, end, b.start_index, b.end_index()))
}

/// Range starts before opening or ends after closing.
pub fn exceeds_working_hours(start: SlotIndex, duration: JobLength) -> bool {
    start < WORKING_HOURS.start_index || start + duration.span() > WORKING_HOURS.end_index
}

/// The single gate for previews and selections.
pub fn can_book(
    start: SlotIndex,
    duration: JobLength,
    day: WorkingDay,
    date: NaiveDate,
    bookings: &[Booking],
) -> bool {
    !exceeds_working_hours(start, duration) && !has_conflict(start, duration, day, date, bookings)
}

/// Latest start slot at which `duration` still fits before closing.
pub fn max_start_index_for(duration: JobLength) -> SlotIndex {
    WORKING_HOURS.end_index - duration.span()
}

/// Booking occupying slot `index` on `(day, date)`, if any.
pub fn booking_at(
    day: WorkingDay,
    date: NaiveDate,
    index: SlotIndex,
    bookings: &[Booking],
) -> Option<&Booking> {
    same_column(day, date, bookings).find(|b| b.covers(index))
}

/// Human-readable reason `can_book` would refuse, or `None` when it would not.
pub fn refusal_reason(
    start: SlotIndex,
    duration: JobLength,
    day: WorkingDay,
    date: NaiveDate,
    bookings: &[Booking],
) -> Option<String> {
    if start < WORKING_HOURS.start_index {
        return Some(format!(
            "starts before opening time ({})",
            index_to_time(WORKING_HOURS.start_index)
        ));
    }
    if start + duration.span() > WORKING_HOURS.end_index {
        return Some(format!(
            "a job of {} ending at {} runs past closing time ({}); the latest start is {}",
            duration.label(),
            index_to_time(start + duration.span()),
            index_to_time(WORKING_HOURS.end_index),
            index_to_time(max_start_index_for(duration))
        ));
    }
    let clashes = conflicting_bookings(start, duration, day, date, bookings);
    if clashes.is_empty() {
        return None;
    }
    let names = clashes
        .iter()
        .map(|b| format!("{} ({}, {})", b.id, b.customer_name, b.time_label()))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("overlaps {names}"))
}
