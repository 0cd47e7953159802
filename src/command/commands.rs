use std::str::FromStr;

use chrono::NaiveDate;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::availability::refusal_reason;
use crate::command::manual::ManualCatalog;
use crate::config::ConfigKey;
use crate::core::context::AppContext;
use crate::core::models::Selection;
use crate::core::session::ClickOutcome;
use crate::core::slots::index_to_time;
use crate::core::types::{JobLength, SlotIndex, WorkingDay};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::logging::{LogEvent, LogTarget};
use crate::ui::display_manager::DisplayManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CommandKind {
    Show,
    Next,
    #[strum(serialize = "prev", serialize = "previous", to_string = "prev")]
    Prev,
    Today,
    Goto,
    Duration,
    Hover,
    Leave,
    Pick,
    Clear,
    Book,
    Bookings,
    Config,
    Help,
    Exit,
}

impl CommandKind {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::UnknownCommand(format!(
                "'{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<CommandKind>()
            ))
        })
    }

    pub fn synopsis(self) -> &'static str {
        match self {
            CommandKind::Show => "show",
            CommandKind::Next => "next",
            CommandKind::Prev => "prev",
            CommandKind::Today => "today",
            CommandKind::Goto => "goto <date>",
            CommandKind::Duration => "duration [<hours>]",
            CommandKind::Hover => "hover <day> <time>",
            CommandKind::Leave => "leave",
            CommandKind::Pick => "pick <day> <time>",
            CommandKind::Clear => "clear",
            CommandKind::Book => "book",
            CommandKind::Bookings => "bookings [<id>]",
            CommandKind::Config => "config [<KEY|ID> <value>]",
            CommandKind::Help => "help [<command>]",
            CommandKind::Exit => "exit",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            CommandKind::Show => "Show the weekly grid",
            CommandKind::Next => "Show the following week",
            CommandKind::Prev => "Show the previous week",
            CommandKind::Today => "Return to the current week",
            CommandKind::Goto => "Show the week containing a date",
            CommandKind::Duration => "Set the job duration in hours",
            CommandKind::Hover => "Preview a job starting at a slot",
            CommandKind::Leave => "Remove the preview",
            CommandKind::Pick => "Select or deselect a start slot",
            CommandKind::Clear => "Drop the current selection",
            CommandKind::Book => "Confirm the selected slot",
            CommandKind::Bookings => "List bookings, or show one by id",
            CommandKind::Config => "View or change configuration",
            CommandKind::Help => "Show help",
            CommandKind::Exit => "Quit",
        }
    }
}

/// A parsed command line with typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Next,
    Prev,
    Today,
    Goto(NaiveDate),
    Duration(Option<JobLength>),
    Hover { day: WorkingDay, index: SlotIndex },
    Leave,
    Pick { day: WorkingDay, index: SlotIndex },
    Clear,
    Book,
    Bookings(Option<String>),
    Config(Option<(String, String)>),
    Help(Option<CommandKind>),
    Exit,
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Done,
    OpenBooking(Selection),
    Exit,
}

fn when(day: WorkingDay, date: NaiveDate, label: &str) -> String {
    format!("{day} {} {label}", date.format("%Y-%m-%d"))
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Show => CommandKind::Show,
            Command::Next => CommandKind::Next,
            Command::Prev => CommandKind::Prev,
            Command::Today => CommandKind::Today,
            Command::Goto(_) => CommandKind::Goto,
            Command::Duration(_) => CommandKind::Duration,
            Command::Hover { .. } => CommandKind::Hover,
            Command::Leave => CommandKind::Leave,
            Command::Pick { .. } => CommandKind::Pick,
            Command::Clear => CommandKind::Clear,
            Command::Book => CommandKind::Book,
            Command::Bookings(_) => CommandKind::Bookings,
            Command::Config(_) => CommandKind::Config,
            Command::Help(_) => CommandKind::Help,
            Command::Exit => CommandKind::Exit,
        }
    }

    pub fn execute(&self, ctx: &mut AppContext, dm: &DisplayManager) -> Result<CommandOutcome> {
        match self {
            Command::Show => show(ctx, dm),
            Command::Next => {
                ctx.session.next_week();
                week_changed(ctx, dm);
            }
            Command::Prev => match ctx.session.previous_week(ctx.today) {
                Some(_) => week_changed(ctx, dm),
                None => ctx.logger.warn(
                    "Already showing a past week; use 'today' or 'next'.",
                    LogTarget::ConsoleOnly,
                ),
            },
            Command::Today => {
                ctx.session.current_week(ctx.today);
                week_changed(ctx, dm);
            }
            Command::Goto(date) => {
                ctx.session.go_to(*date);
                week_changed(ctx, dm);
            }
            Command::Duration(None) => ctx.logger.info(
                format!("Job duration: {}", ctx.session.duration().label()),
                LogTarget::ConsoleOnly,
            ),
            Command::Duration(Some(duration)) => set_duration(ctx, dm, *duration),
            Command::Hover { day, index } => hover(ctx, dm, *day, *index),
            Command::Leave => {
                ctx.session.leave();
                show(ctx, dm);
            }
            Command::Pick { day, index } => pick(ctx, dm, *day, *index),
            Command::Clear => match ctx.session.clear_selection() {
                Some(_) => {
                    ctx.logger.record(&LogEvent::SelectionCleared {
                        reason: "cleared by user",
                    });
                    show(ctx, dm);
                }
                None => ctx.logger.info("Nothing is selected.", LogTarget::ConsoleOnly),
            },
            Command::Book => {
                let sel = ctx.session.selection().copied().ok_or(Error::NoSelection)?;
                return Ok(CommandOutcome::OpenBooking(sel));
            }
            Command::Bookings(None) => dm.display_bookings(&ctx.ledger.sorted()),
            Command::Bookings(Some(id)) => dm.display_bookings(&[ctx.ledger.get(id)?]),
            Command::Config(None) => dm.display_config(&ctx.config),
            Command::Config(Some((key, value))) => set_config(ctx, dm, key, value)?,
            Command::Help(topic) => {
                let catalog = ManualCatalog::new();
                let page = match topic {
                    Some(kind) => catalog.page_for(*kind),
                    None => catalog.overview(),
                };
                ctx.logger.info(page.render(), LogTarget::ConsoleOnly);
            }
            Command::Exit => return Ok(CommandOutcome::Exit),
        }
        Ok(CommandOutcome::Done)
    }
}

fn show(ctx: &AppContext, dm: &DisplayManager) {
    dm.display_week(ctx.session.week(), &ctx.query(), ctx.today);
}

fn week_changed(ctx: &AppContext, dm: &DisplayManager) {
    ctx.logger.record(&LogEvent::WeekChanged {
        label: ctx.session.week().range_label(ctx.today),
    });
    show(ctx, dm);
}

fn set_duration(ctx: &mut AppContext, dm: &DisplayManager, duration: JobLength) {
    let old = ctx.session.duration();
    let dropped = ctx.session.set_duration(duration);
    ctx.logger.record(&LogEvent::DurationChanged {
        old: old.to_string(),
        new: duration.to_string(),
    });
    if dropped.is_some() {
        ctx.logger.record(&LogEvent::SelectionCleared {
            reason: "duration changed",
        });
        ctx.logger.info(
            "Selection cleared because the job duration changed.",
            LogTarget::ConsoleOnly,
        );
    }
    show(ctx, dm);
}

fn hover(ctx: &mut AppContext, dm: &DisplayManager, day: WorkingDay, index: SlotIndex) {
    let date = ctx.session.week().date_of(day);
    let duration = ctx.session.duration();
    if !ctx
        .session
        .hover(day, date, index, ctx.ledger.as_slice())
    {
        let reason = refusal_reason(index, duration, day, date, ctx.ledger.as_slice())
            .unwrap_or_default();
        ctx.logger.info(
            format!("No preview at {} {}: {reason}.", day, index_to_time(index)),
            LogTarget::ConsoleOnly,
        );
    }
    show(ctx, dm);
}

fn pick(ctx: &mut AppContext, dm: &DisplayManager, day: WorkingDay, index: SlotIndex) {
    let date = ctx.session.week().date_of(day);
    match ctx.session.click(day, date, index, ctx.ledger.as_slice()) {
        ClickOutcome::Selected(sel) => {
            ctx.logger.record(&LogEvent::SlotSelected {
                when: when(day, date, &sel.time_label()),
                hours: sel.duration.to_string(),
            });
            show(ctx, dm);
        }
        ClickOutcome::Deselected => {
            ctx.logger.record(&LogEvent::SelectionCleared {
                reason: "deselected",
            });
            show(ctx, dm);
        }
        ClickOutcome::Refused(reason) => {
            ctx.logger.record(&LogEvent::SlotRefused {
                when: when(day, date, &index_to_time(index).long()),
                reason,
            });
        }
    }
}

fn set_config(ctx: &mut AppContext, dm: &DisplayManager, key: &str, value: &str) -> Result<()> {
    let key = ctx.config.set(key, value)?;
    if let Some((key, old, new)) = ctx.config.take_last_change() {
        ctx.logger.record(&LogEvent::ConfigChanged { key, old, new });
    }
    match key {
        ConfigKey::FileLoggingEnabled => ctx
            .logger
            .set_file_logging_enabled(ctx.config.file_logging_enabled()),
        ConfigKey::DefaultDuration | ConfigKey::SeedDemoBookings => ctx.logger.info(
            format!("{key} takes effect at the next start."),
            LogTarget::ConsoleOnly,
        ),
        ConfigKey::BusinessName => {}
    }
    dm.display_config(&ctx.config);
    Ok(())
}
