use crate::availability::conflict::{booking_at, exceeds_working_hours};
use crate::core::models::{Booking, Hover, Selection};
use crate::core::types::{JobLength, SlotIndex, SlotStatus, WorkingDay};
use chrono::NaiveDate;

/// Classify one grid cell. First match wins:
///
/// 1. `Booked`: an existing booking on `(day, date)` covers the slot.
/// 2. `Selected`: the selection is on `(day, date)` and covers the slot.
/// 3. `Preview` / `Conflict`: the hover is on `day` and
///    `[hover.start, hover.start + duration)` covers the slot. `Conflict` when
///    this slot lies inside a booking on `(day, date)` or the range runs past
///    closing.
/// 4. `Available`.
pub fn status_of(
    day: WorkingDay,
    date: NaiveDate,
    index: SlotIndex,
    bookings: &[Booking],
    selection: Option<&Selection>,
    hover: Option<&Hover>,
    duration: JobLength,
) -> SlotStatus {
    if bookings
        .iter()
        .any(|b| b.is_on(day, date) && b.covers(index))
    {
        return SlotStatus::Booked;
    }

    if let Some(sel) = selection {
        if sel.day == day
            && sel.date == date
            && index >= sel.start_index
            && index < sel.end_index()
        {
            return SlotStatus::Selected;
        }
    }

    if let Some(hover) = hover {
        let end = hover.start_index + duration.span();
        if hover.day == day && index >= hover.start_index && index < end {
            let blocked = booking_at(day, date, index, bookings).is_some()
                || exceeds_working_hours(hover.start_index, duration);
            return if blocked {
                SlotStatus::Conflict
            } else {
                SlotStatus::Preview
            };
        }
    }

    SlotStatus::Available
}

/// Render-time snapshot: everything `status_of` needs besides the cell
/// coordinates. Built fresh for every frame.
#[derive(Debug, Clone, Copy)]
pub struct SlotQuery<'a> {
    pub bookings: &'a [Booking],
    pub selection: Option<&'a Selection>,
    pub hover: Option<&'a Hover>,
    pub duration: JobLength,
}

impl<'a> SlotQuery<'a> {
    pub fn status(&self, day: WorkingDay, date: NaiveDate, index: SlotIndex) -> SlotStatus {
        status_of(
            day,
            date,
            index,
            self.bookings,
            self.selection,
            self.hover,
            self.duration,
        )
    }
}
