use std::io::{self, Write};

use chrono::Datelike;

use crate::command::command_parser::CommandParser;
use crate::command::commands::{Command, CommandOutcome};
use crate::core::context::AppContext;
use crate::errors::{Error, Result};
use crate::logging::{LogEvent, LogTarget, Logger};
use crate::prompter::flows::booking_flow::BookingFlow;
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

const MAIN_PROMPT: &str = "> ";
const EXIT: &str = "exit";

/// Top-level command loop. The booking dialog runs as a mode of this flow so
/// that all input is read by one prompter.
pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    parser: CommandParser,
    dm: DisplayManager,
    chrome: UiChrome,
    logger: Logger,
    modal: Option<BookingFlow>,
    interactive: bool,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext, dm: DisplayManager) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            parser: CommandParser::new(),
            dm,
            chrome: UiChrome::new(),
            logger,
            modal: None,
            interactive: false,
        }
    }

    /// Styled prompts and a cleared screen at startup. Only for a tty.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn booking_open(&self) -> bool {
        self.modal.is_some()
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        let prompt = match self.modal.as_mut() {
            Some(modal) => {
                modal.render(&self.dm);
                modal.prompt()
            }
            None => MAIN_PROMPT,
        };
        self.print_prompt(prompt);
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.end_prompt();
        if self.booking_open() && input.trim().eq_ignore_ascii_case(EXIT) {
            self.close_booking();
            return Ok(FlowCtrl::Finish);
        }
        if let Some(modal) = self.modal.as_mut() {
            match modal.handle_input(self.ctx, input)? {
                FlowCtrl::Continue => {}
                FlowCtrl::Finish | FlowCtrl::Abort => {
                    self.modal = None;
                    self.show_week();
                }
            }
            return Ok(FlowCtrl::Continue);
        }

        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }

        let cmd = match self.parser.parse(line, self.ctx.today.year()) {
            Ok(cmd) => cmd,
            Err(err) => {
                self.report_parse_error(line, err);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger
            .info(format!("Command run: {line}"), LogTarget::FileOnly);

        match cmd.execute(self.ctx, &self.dm) {
            Ok(CommandOutcome::Done) => Ok(FlowCtrl::Continue),
            Ok(CommandOutcome::OpenBooking(selection)) => {
                self.modal = Some(BookingFlow::new(selection));
                Ok(FlowCtrl::Continue)
            }
            Ok(CommandOutcome::Exit) => Ok(FlowCtrl::Finish),
            Err(err) => {
                self.report_command_error(&cmd, err);
                Ok(FlowCtrl::Continue)
            }
        }
    }
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        if self.interactive {
            self.chrome.clear_screen();
        }
        let business = self.ctx.config.business_name().to_string();
        self.chrome.print_banner(&business);
        println!();
        println!("Type 'help' for commands, 'help <command>' for details.");
        println!("Config path: {}", self.ctx.config_path().display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        self.logger.record(&LogEvent::SessionStarted {
            business,
            week: self.ctx.session.week().range_label(self.ctx.today),
        });
        self.show_week();
        self.ctx.startup_displayed = true;
    }

    /// Cancels an open dialog so the session ends with no selection held.
    fn close_booking(&mut self) {
        if self.modal.take().is_some() && self.ctx.session.cancel_booking().is_some() {
            self.logger.record(&LogEvent::SelectionCleared {
                reason: "booking cancelled",
            });
        }
    }

    fn show_week(&self) {
        self.dm
            .display_week(self.ctx.session.week(), &self.ctx.query(), self.ctx.today);
    }

    fn print_prompt(&self, prompt: &str) {
        if self.interactive {
            self.chrome.print_prompt(prompt);
        } else {
            print!("{prompt}");
            let _ = io::stdout().flush();
        }
    }

    fn end_prompt(&self) {
        if self.interactive {
            self.chrome.end_prompt();
        } else {
            println!();
        }
    }

    fn report_parse_error(&self, line: &str, err: Error) {
        let text = err.to_string();
        match text.split_once("\nUsage:") {
            Some((head, tail)) => {
                self.logger
                    .error(format!("{head}\nUsage:{tail}"), LogTarget::ConsoleOnly);
                self.logger.error(
                    format!("Could not run '{line}'. {}", head.trim()),
                    LogTarget::FileOnly,
                );
            }
            None => self.logger.error(text, LogTarget::ConsoleAndFile),
        }
    }

    fn report_command_error(&self, cmd: &Command, err: Error) {
        self.logger.error(
            format!("Command '{}' failed. {err}", cmd.kind()),
            LogTarget::ConsoleAndFile,
        );
    }
}
