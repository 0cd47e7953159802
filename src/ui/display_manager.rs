use crate::availability::SlotQuery;
use crate::config::Config;
use crate::core::models::{Booking, Selection};
use crate::core::types::JobLength;
use crate::core::week::WeekView;
use crate::ui::display_data::{COMPACT_BELOW_WIDTH, DisplayDataBuilder};
use crate::ui::table_printer::{Table, TablePrinter};
use crate::ui::width_util::WidthUtil;
use chrono::NaiveDate;
use std::io::{self, Write};

const BOOKING_HEADERS: [&str; 6] = ["ID", "CUSTOMER", "DATE", "TIME", "HOURS", "DESCRIPTION"];
const CONFIG_HEADERS: [&str; 4] = ["ID", "KEY", "DESCRIPTION", "VALUE"];

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    /// Styled manager; row labels go compact on a narrow terminal.
    pub fn new() -> Self {
        let util = WidthUtil;
        let compact = util.terminal_width() < COMPACT_BELOW_WIDTH;
        Self {
            data: DisplayDataBuilder::new().compact(compact),
            util,
            ..Self::default()
        }
    }

    /// Manager whose output carries no ANSI styling.
    pub fn plain() -> Self {
        Self {
            data: DisplayDataBuilder::plain(),
            ..Self::default()
        }
    }

    pub fn render_week<W: Write + ?Sized>(
        &self,
        week: WeekView,
        query: &SlotQuery<'_>,
        today: NaiveDate,
        out: &mut W,
    ) -> io::Result<()> {
        let grid = self.data.grid(week, query, today);
        let headers = grid.header_refs();
        self.printer
            .render(&Table::new(&grid.title, &headers, &grid.rows), out)?;
        self.render_footer(query.duration, query.selection, out)
    }

    pub fn display_week(&self, week: WeekView, query: &SlotQuery<'_>, today: NaiveDate) {
        let _ = self.render_week(week, query, today, &mut io::stdout());
    }

    fn render_footer<W: Write + ?Sized>(
        &self,
        duration: JobLength,
        selection: Option<&Selection>,
        out: &mut W,
    ) -> io::Result<()> {
        writeln!(out, "Job duration: {}", duration.label())?;
        match selection {
            Some(sel) => writeln!(
                out,
                "Selected: {} {} {} ('book' to confirm, 'clear' to drop)",
                sel.day,
                sel.date.format("%m/%d"),
                sel.time_label()
            )?,
            None => writeln!(out, "Selected: none")?,
        }
        writeln!(
            out,
            "Legend: [selected] chosen slot | + preview fits | x conflict overlaps or runs past closing | * today"
        )
    }

    pub fn render_bookings<W: Write + ?Sized>(
        &self,
        bookings: &[&Booking],
        out: &mut W,
    ) -> io::Result<()> {
        let rows = self.data.booking_rows(bookings);
        self.printer.render(
            &Table::new("Bookings", &BOOKING_HEADERS, &rows).empty_message("No bookings yet."),
            out,
        )
    }

    pub fn display_bookings(&self, bookings: &[&Booking]) {
        let _ = self.render_bookings(bookings, &mut io::stdout());
    }

    pub fn render_selection<W: Write + ?Sized>(&self, sel: &Selection, out: &mut W) -> io::Result<()> {
        let lines = self.data.selection_lines(sel);
        let width = lines
            .iter()
            .map(|l| self.util.visible_width(l))
            .max()
            .unwrap_or(0);
        self.printer.render_banner("Confirm booking", width, out)?;
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    pub fn display_selection(&self, sel: &Selection) {
        let _ = self.render_selection(sel, &mut io::stdout());
    }

    fn config_rows(config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let rows = Self::config_rows(config);
        self.printer.render(
            &Table::new("Config", &CONFIG_HEADERS, &rows).empty_message("No config items found."),
            out,
        )
    }

    pub fn display_config(&self, config: &Config) {
        let _ = self.render_config(config, &mut io::stdout());
    }
}
