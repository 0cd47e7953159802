use crate::command::commands::{Command, CommandKind};
use crate::core::slots::time_to_index;
use crate::core::types::{ClockTime, Date, JobLength, SlotIndex, WorkingDay};
use crate::errors::{Error, Result, require_parse};

/// Turns one input line into a `Command`.
#[derive(Debug, Default, Clone)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// `current_year` completes month-day dates given to `goto`.
    pub fn parse(&self, line: &str, current_year: i32) -> Result<Command> {
        let mut parts = line.split_whitespace();
        let head = require_parse(parts.next(), "Empty command.")?;
        let kind = CommandKind::try_from(head)?;
        let args: Vec<&str> = parts.collect();

        if args.iter().any(|a| matches!(*a, "--help" | "-h")) {
            return Ok(Command::Help(Some(kind)));
        }

        let cmd = match kind {
            CommandKind::Show => self.no_args(kind, &args, Command::Show)?,
            CommandKind::Next => self.no_args(kind, &args, Command::Next)?,
            CommandKind::Prev => self.no_args(kind, &args, Command::Prev)?,
            CommandKind::Today => self.no_args(kind, &args, Command::Today)?,
            CommandKind::Leave => self.no_args(kind, &args, Command::Leave)?,
            CommandKind::Clear => self.no_args(kind, &args, Command::Clear)?,
            CommandKind::Book => self.no_args(kind, &args, Command::Book)?,
            CommandKind::Exit => self.no_args(kind, &args, Command::Exit)?,
            CommandKind::Goto => match args.as_slice() {
                [date] => Command::Goto(Date::try_from_str(date, current_year)?.0),
                _ => return Err(self.usage_error(kind)),
            },
            CommandKind::Duration => match args.as_slice() {
                [] => Command::Duration(None),
                [hours] => Command::Duration(Some(JobLength::try_from_str(hours)?)),
                _ => return Err(self.usage_error(kind)),
            },
            CommandKind::Hover => {
                let (day, index) = self.slot_args(kind, &args)?;
                Command::Hover { day, index }
            }
            CommandKind::Pick => {
                let (day, index) = self.slot_args(kind, &args)?;
                Command::Pick { day, index }
            }
            CommandKind::Config => match args.as_slice() {
                [] => Command::Config(None),
                [_] => return Err(self.usage_error(kind)),
                [key, value @ ..] => Command::Config(Some((key.to_string(), value.join(" ")))),
            },
            CommandKind::Bookings => match args.as_slice() {
                [] => Command::Bookings(None),
                [id] => Command::Bookings(Some(id.to_ascii_uppercase())),
                _ => return Err(self.usage_error(kind)),
            },
            CommandKind::Help => match args.as_slice() {
                [] => Command::Help(None),
                [topic] => Command::Help(Some(CommandKind::try_from(topic)?)),
                _ => return Err(self.usage_error(kind)),
            },
        };
        Ok(cmd)
    }

    fn no_args(&self, kind: CommandKind, args: &[&str], cmd: Command) -> Result<Command> {
        if args.is_empty() {
            Ok(cmd)
        } else {
            Err(self.usage_error(kind))
        }
    }

    fn slot_args(&self, kind: CommandKind, args: &[&str]) -> Result<(WorkingDay, SlotIndex)> {
        let [day, time] = args else {
            return Err(self.usage_error(kind));
        };
        let day = WorkingDay::try_from(day)?;
        let time = ClockTime::try_from_str(time)?;
        let index = require_parse(
            time_to_index(time.0),
            format!("Time {time} is not on a 30 minute slot boundary."),
        )?;
        Ok((day, index))
    }

    fn usage_error(&self, kind: CommandKind) -> Error {
        Error::parse(format!(
            "Wrong arguments for '{kind}'.\nUsage: {}",
            kind.synopsis()
        ))
    }
}
