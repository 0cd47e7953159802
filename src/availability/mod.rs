//! Decides whether a candidate slot range may be booked, and what every grid
//! cell should show.
//!
//! All functions here are pure: they read a booking snapshot and return a
//! value. Nothing is cached between calls.

mod conflict;
mod status;
#[cfg(test)]
mod tests;

pub use conflict::{
    booking_at, can_book, conflicting_bookings, exceeds_working_hours, has_conflict,
    intervals_overlap, max_start_index_for, refusal_reason,
};
pub use status::{SlotQuery, status_of};
