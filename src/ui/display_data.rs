use crate::availability::{SlotQuery, booking_at};
use crate::core::models::{Booking, Selection};
use crate::core::slots::{WORKING_HOURS, index_to_time};
use crate::core::types::{SlotIndex, SlotStatus, WorkingDay};
use crate::core::week::WeekView;
use crate::ui::ansi::{CELL_BOOKED, CELL_CONFLICT, CELL_PREVIEW, CELL_SELECTED, STYLE_DIM, STYLE_RESET};
use crate::ui::width_util::WidthUtil;
use chrono::NaiveDate;

/// Widest a day column may grow; longer customer names are cut.
pub const DAY_COLUMN_WIDTH: usize = 14;

/// Terminals narrower than this get short `8a` row labels.
pub const COMPACT_BELOW_WIDTH: usize = 100;

/// Headers and rows of the weekly grid, ready for `TablePrinter`.
#[derive(Debug, Clone)]
pub struct GridData {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl GridData {
    pub fn header_refs(&self) -> Vec<&str> {
        self.headers.iter().map(String::as_str).collect()
    }
}

#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder {
    util: WidthUtil,
    plain: bool,
    compact: bool,
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that emits no ANSI styling.
    pub fn plain() -> Self {
        Self {
            util: WidthUtil,
            plain: true,
            compact: false,
        }
    }

    /// Short time labels (`8a`) for narrow terminals.
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// `"MON 10/19"`, with a trailing `*` on today's column.
    pub fn day_header(&self, day: WorkingDay, date: NaiveDate, today: NaiveDate) -> String {
        let mark = if date == today { "*" } else { "" };
        format!("{} {}{mark}", day.abbrev(), date.format("%m/%d"))
    }

    /// Time labels only on the hour; half-hour rows stay blank.
    pub fn time_label(&self, index: SlotIndex) -> String {
        let t = index_to_time(index);
        match (t.minute(), self.compact) {
            (0, true) => t.short(),
            (0, false) => t.long(),
            _ => String::new(),
        }
    }

    pub fn grid(&self, week: WeekView, query: &SlotQuery<'_>, today: NaiveDate) -> GridData {
        let days = week.days();
        let mut headers = vec!["TIME".to_string()];
        headers.extend(days.iter().map(|(d, date)| self.day_header(*d, *date, today)));

        let rows = WORKING_HOURS
            .indices()
            .map(|index| {
                let mut row = vec![self.time_label(index)];
                row.extend(
                    days.iter()
                        .map(|(day, date)| self.cell(*day, *date, index, query)),
                );
                row
            })
            .collect();

        let suffix = if week.is_current(today) { " (this week)" } else { "" };
        GridData {
            title: format!("Week of {}{suffix}", week.range_label(today)),
            headers,
            rows,
        }
    }

    fn cell(
        &self,
        day: WorkingDay,
        date: NaiveDate,
        index: SlotIndex,
        query: &SlotQuery<'_>,
    ) -> String {
        let status = query.status(day, date, index);
        let text = match status {
            SlotStatus::Booked => match booking_at(day, date, index, query.bookings) {
                Some(b) if b.start_index == index => {
                    self.util.truncate(&b.customer_name, DAY_COLUMN_WIDTH)
                }
                _ => "  ...".to_string(),
            },
            SlotStatus::Selected => "[selected]".to_string(),
            SlotStatus::Preview => "+ preview".to_string(),
            SlotStatus::Conflict => "x conflict".to_string(),
            SlotStatus::Available => return String::new(),
        };
        self.paint(status, &text)
    }

    pub fn paint(&self, status: SlotStatus, text: &str) -> String {
        if self.plain {
            return text.to_string();
        }
        let style = match status {
            SlotStatus::Booked => CELL_BOOKED,
            SlotStatus::Selected => CELL_SELECTED,
            SlotStatus::Preview => CELL_PREVIEW,
            SlotStatus::Conflict => CELL_CONFLICT,
            SlotStatus::Available => STYLE_DIM,
        };
        let padded = self.util.pad_visible(text, DAY_COLUMN_WIDTH);
        format!("{style}{padded}{STYLE_RESET}")
    }

    pub fn booking_rows(&self, bookings: &[&Booking]) -> Vec<Vec<String>> {
        bookings
            .iter()
            .map(|b| {
                vec![
                    b.id.clone(),
                    b.customer_name.clone(),
                    format!("{} {}", b.day.abbrev(), b.date.format("%Y-%m-%d")),
                    b.time_label(),
                    b.duration.to_string(),
                    b.description.clone().unwrap_or_else(|| "-".to_string()),
                ]
            })
            .collect()
    }

    /// Lines describing a pending selection, as shown in the booking dialog.
    pub fn selection_lines(&self, sel: &Selection) -> Vec<String> {
        vec![
            format!("Date: {}", sel.date.format("%A, %B %-d, %Y")),
            format!("Time: {}", sel.time_label()),
            format!("Duration: {}", sel.duration.label()),
        ]
    }
}
