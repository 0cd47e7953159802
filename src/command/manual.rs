use strum::IntoEnumIterator;

use crate::command::commands::CommandKind;
use crate::config::ConfigKey;
use crate::core::slots::{WORKING_HOURS, index_to_time};
use crate::core::types::JobLength;
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone)]
pub struct ManualSection {
    title: String,
    body: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManualPage {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPage {
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_section("NAME", &[format!("{} - {}", self.name, self.summary)], &mut out);
        for section in &self.sections {
            self.write_section(&section.title, &section.body, &mut out);
        }
        out.trim_end().to_string()
    }

    fn write_section(&self, title: &str, lines: &[String], out: &mut String) {
        out.push_str(&title.to_uppercase());
        out.push('\n');
        for line in lines {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
    }
}

pub struct ManualPageBuilder {
    name: String,
    summary: String,
    sections: Vec<ManualSection>,
}

impl ManualPageBuilder {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            sections: Vec::new(),
        }
    }

    pub fn section(mut self, title: &str, body: Vec<String>) -> Self {
        self.sections.push(ManualSection {
            title: title.to_string(),
            body,
        });
        self
    }

    pub fn build(self) -> ManualPage {
        ManualPage {
            name: self.name,
            summary: self.summary,
            sections: self.sections,
        }
    }
}

const DAY_HELP: &str = "<day>: mon|tue|wed|thu|fri, full names or first letters (th = Thursday).";
const TIME_HELP: &str = "<time>: 9, 9:30, 9:30AM, 2PM or 14:30, on a 30 minute boundary.";

#[derive(Debug, Default, Clone)]
pub struct ManualCatalog;

impl ManualCatalog {
    pub fn new() -> Self {
        Self
    }

    /// `help` with no argument.
    pub fn overview(&self) -> ManualPage {
        let commands = CommandKind::iter()
            .map(|k| format!("{:<24}# {}", k.synopsis(), k.summary()))
            .collect();
        let first = WORKING_HOURS.days[0];
        let last = WORKING_HOURS.days[WORKING_HOURS.days.len() - 1];
        ManualPageBuilder::new("slotbook", "Weekly time-slot booking.")
            .section("SYNOPSIS", vec!["<command> [args]".to_string()])
            .section("COMMANDS", commands)
            .section(
                "SCHEDULE",
                vec![
                    format!(
                        "{first} to {last}, {} to {}, in {} minute slots.",
                        index_to_time(WORKING_HOURS.start_index),
                        index_to_time(WORKING_HOURS.end_index),
                        WORKING_HOURS.interval_minutes
                    ),
                    "Use 'help <command>' or '<command> --help' for details.".to_string(),
                ],
            )
            .build()
    }

    pub fn page_for(&self, kind: CommandKind) -> ManualPage {
        let builder = ManualPageBuilder::new(kind.to_string(), kind.summary())
            .section("SYNOPSIS", vec![kind.synopsis().to_string()]);
        let details = self.details(kind);
        if details.is_empty() {
            builder.build()
        } else {
            builder.section("DESCRIPTION", details).build()
        }
    }

    fn details(&self, kind: CommandKind) -> Vec<String> {
        match kind {
            CommandKind::Prev => vec![
                "Not available once the view is already in a past week.".to_string(),
            ],
            CommandKind::Goto => vec![
                "<date>: 2026-10-21, 10-21-2026 or 10-21 (slashes also accepted).".to_string(),
                "Shows the Monday to Friday week containing the date.".to_string(),
            ],
            CommandKind::Duration => vec![
                format!(
                    "<hours>: 0.5 to {} in steps of 0.5; a trailing 'h' is allowed.",
                    JobLength::MAX_HOURS
                ),
                "Changing the duration drops the current selection.".to_string(),
                "Without an argument, prints the current duration.".to_string(),
            ],
            CommandKind::Hover => vec![
                DAY_HELP.to_string(),
                TIME_HELP.to_string(),
                "Previews the job starting at that slot; cells show 'preview' when it".to_string(),
                "fits and 'conflict' when it overlaps a booking or runs past closing.".to_string(),
                "Slots where the job cannot start show no preview at all.".to_string(),
            ],
            CommandKind::Pick => vec![
                DAY_HELP.to_string(),
                TIME_HELP.to_string(),
                "Selects the job starting at that slot. Picking the selected slot again".to_string(),
                "deselects it. Slots the job cannot start at are refused with a reason.".to_string(),
            ],
            CommandKind::Book => vec![
                "Opens the confirmation dialog for the selected slot.".to_string(),
                "Asks for the customer name (required) and a job description".to_string(),
                "(optional). Type 'cancel' at either prompt to close the dialog;".to_string(),
                "cancelling also clears the selection.".to_string(),
            ],
            CommandKind::Config => vec![
                format!("Keys: {}", valid_csv::<ConfigKey>()),
                "<ID> is the row number shown in the configuration table.".to_string(),
                "Without arguments, prints the configuration table.".to_string(),
                "Changes are written back to the config file immediately.".to_string(),
            ],
            CommandKind::Help => vec![format!(
                "Commands: {}",
                CommandKind::iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )],
            _ => Vec::new(),
        }
    }
}
