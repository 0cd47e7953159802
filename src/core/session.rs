use crate::availability::{SlotQuery, can_book, refusal_reason};
use crate::core::ledger::{Ledger, NewBooking};
use crate::core::models::{Booking, Hover, Selection};
use crate::core::slots::index_to_time;
use crate::core::types::{JobLength, SlotIndex, WorkingDay};
use crate::core::week::WeekView;
use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Result of clicking a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Selected(Selection),
    Deselected,
    Refused(String),
}

/// Ephemeral interaction state of one session: chosen duration, displayed
/// week, pointer hover and current selection.
#[derive(Debug, Clone)]
pub struct Session {
    duration: JobLength,
    week: WeekView,
    selection: Option<Selection>,
    hover: Option<Hover>,
}

impl Session {
    pub fn new(duration: JobLength, today: NaiveDate) -> Self {
        Self {
            duration,
            week: WeekView::containing(today),
            selection: None,
            hover: None,
        }
    }

    pub fn duration(&self) -> JobLength {
        self.duration
    }

    pub fn week(&self) -> WeekView {
        self.week
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn hovered(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    /// Snapshot for rendering the current frame.
    pub fn query<'a>(&'a self, bookings: &'a [Booking]) -> SlotQuery<'a> {
        SlotQuery {
            bookings,
            selection: self.selection.as_ref(),
            hover: self.hover.as_ref(),
            duration: self.duration,
        }
    }

    /// Changing the duration invalidates any selection. Returns the dropped one.
    pub fn set_duration(&mut self, duration: JobLength) -> Option<Selection> {
        self.duration = duration;
        self.selection.take()
    }

    /// Pointer enters a cell. The preview is kept only when the slot could be
    /// booked with the current duration.
    pub fn hover(
        &mut self,
        day: WorkingDay,
        date: NaiveDate,
        index: SlotIndex,
        bookings: &[Booking],
    ) -> bool {
        self.hover = if can_book(index, self.duration, day, date, bookings) {
            Some(Hover {
                day,
                start_index: index,
            })
        } else {
            None
        };
        self.hover.is_some()
    }

    /// Pointer leaves the grid.
    pub fn leave(&mut self) {
        self.hover = None;
    }

    /// Clicking the selected cell again deselects; clicking a bookable cell
    /// selects it; anything else is refused and leaves state untouched.
    pub fn click(
        &mut self,
        day: WorkingDay,
        date: NaiveDate,
        index: SlotIndex,
        bookings: &[Booking],
    ) -> ClickOutcome {
        if self
            .selection
            .is_some_and(|sel| sel.is_at(day, date, index))
        {
            self.selection = None;
            return ClickOutcome::Deselected;
        }
        if let Some(reason) = refusal_reason(index, self.duration, day, date, bookings) {
            return ClickOutcome::Refused(reason);
        }
        let selection = Selection {
            day,
            date,
            start_index: index,
            duration: self.duration,
        };
        self.selection = Some(selection);
        ClickOutcome::Selected(selection)
    }

    pub fn clear_selection(&mut self) -> Option<Selection> {
        self.selection.take()
    }

    /// Commits the selection as a booking. The slot is checked again against
    /// the ledger before anything is written.
    pub fn confirm(
        &mut self,
        customer_name: &str,
        description: Option<&str>,
        ledger: &mut Ledger,
    ) -> Result<Booking> {
        let sel = self.selection.ok_or(Error::NoSelection)?;
        if !can_book(
            sel.start_index,
            sel.duration,
            sel.day,
            sel.date,
            ledger.as_slice(),
        ) {
            let reason = refusal_reason(
                sel.start_index,
                sel.duration,
                sel.day,
                sel.date,
                ledger.as_slice(),
            )
            .unwrap_or_else(|| "slot is no longer available".to_string());
            return Err(Error::SlotUnavailable {
                day: sel.day.to_string(),
                date: sel.date.format("%Y-%m-%d").to_string(),
                time: index_to_time(sel.start_index).long(),
                reason,
            });
        }
        let booking = ledger
            .create(NewBooking {
                customer_name: customer_name.to_string(),
                date: sel.date,
                start_index: sel.start_index,
                duration: sel.duration,
                description: description.map(str::to_string),
            })?
            .clone();
        self.selection = None;
        self.hover = None;
        Ok(booking)
    }

    /// Booking dialog dismissed without confirming.
    pub fn cancel_booking(&mut self) -> Option<Selection> {
        self.selection.take()
    }

    pub fn next_week(&mut self) -> WeekView {
        self.week = self.week.next();
        self.hover = None;
        self.week
    }

    /// Paging back stops once the view is already in a past week.
    pub fn previous_week(&mut self, today: NaiveDate) -> Option<WeekView> {
        if self.week.is_past(today) {
            return None;
        }
        self.week = self.week.previous();
        self.hover = None;
        Some(self.week)
    }

    pub fn current_week(&mut self, today: NaiveDate) -> WeekView {
        self.go_to(today)
    }

    /// Jump to the week containing `date`.
    pub fn go_to(&mut self, date: NaiveDate) -> WeekView {
        self.week = WeekView::containing(date);
        self.hover = None;
        self.week
    }
}
