use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const COLUMN_SEP: &str = " | ";

/// One table to render: title banner, optional header row, body rows.
#[derive(Debug, Clone)]
pub struct Table<'a, T: AsRef<str>> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub rows: &'a [Vec<T>],
    pub empty_message: Option<&'a str>,
    pub min_width: usize,
}

impl<'a, T: AsRef<str>> Table<'a, T> {
    pub fn new(title: &'a str, headers: &'a [&'a str], rows: &'a [Vec<T>]) -> Self {
        Self {
            title,
            headers,
            rows,
            empty_message: None,
            min_width: 0,
        }
    }

    pub fn empty_message(mut self, msg: &'a str) -> Self {
        self.empty_message = Some(msg);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
    left_pad: usize,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy that indents every printed line by `pad` spaces.
    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            util: self.util.clone(),
            left_pad: pad,
        }
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        Self::natural_width(&self.column_widths(headers, rows))
    }

    pub fn print<T: AsRef<str>>(&self, table: &Table<'_, T>) {
        let _ = self.render(table, &mut io::stdout());
    }

    /// Render into any writer; tests capture output this way.
    pub fn render<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table: &Table<'_, T>,
        out: &mut W,
    ) -> io::Result<()> {
        let widths = self.column_widths(table.headers, table.rows);
        let total = Self::natural_width(&widths).max(table.min_width);

        if table.rows.is_empty() {
            if let Some(msg) = table.empty_message {
                let width = total
                    .max(self.util.visible_width(table.title))
                    .max(self.util.visible_width(msg));
                self.render_banner(table.title, width, out)?;
                self.line(out, msg)?;
                return self.rule(out, width);
            }
        }

        self.render_banner(table.title, total, out)?;
        if !table.headers.is_empty() {
            self.line(out, &self.join_padded(table.headers, &widths))?;
            self.rule(out, total)?;
        }
        for row in table.rows {
            self.line(out, &self.join_padded(row, &widths))?;
        }
        self.rule(out, total)
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let width = width.max(self.util.visible_width(title));
        self.rule(out, width)?;
        self.line(out, &title.to_uppercase())?;
        self.rule(out, width)
    }

    fn column_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let mut widths: Vec<usize> = headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(self.util.visible_width(cell.as_ref()));
            }
        }
        widths
    }

    fn natural_width(widths: &[usize]) -> usize {
        if widths.is_empty() {
            return 0;
        }
        widths.iter().sum::<usize>() + (widths.len() - 1) * COLUMN_SEP.len()
    }

    fn join_padded<T: AsRef<str>>(&self, cells: &[T], widths: &[usize]) -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| self.util.pad_visible(cell.as_ref(), *w))
            .collect::<Vec<_>>()
            .join(COLUMN_SEP)
            .trim_end()
            .to_string()
    }

    fn line<W: Write + ?Sized>(&self, out: &mut W, s: &str) -> io::Result<()> {
        writeln!(out, "{}{s}", " ".repeat(self.left_pad))
    }

    fn rule<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> io::Result<()> {
        self.line(out, &"-".repeat(width.max(1)))
    }
}
