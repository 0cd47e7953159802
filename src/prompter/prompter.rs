use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, Write};

/// Read-render-dispatch loop. Ends at end of input or when the flow
/// finishes or aborts.
#[derive(Debug, Default, Clone)]
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle cursor hiding while a frame is drawn. Only useful on a tty.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let stdin = io::stdin();
        self.run_with_reader(flow, stdin.lock())
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            self.cursor(HIDE_CURSOR);
            flow.render()?;
            self.cursor(SHOW_CURSOR);

            let mut line = String::new();
            let n = reader.read_line(&mut line).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }
            match flow.handle_input(line.trim())? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish | FlowCtrl::Abort => return Ok(()),
            }
        }
    }

    fn cursor(&self, code: &str) {
        if self.interactive {
            print!("{code}");
            let _ = io::stdout().flush();
        }
    }
}
