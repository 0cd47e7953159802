use std::io::IsTerminal;

use anyhow::{Context, anyhow};
use chrono::Local;

use crate::core::cli::CliPaths;
use crate::core::context::AppContext;
use crate::logging::LogTarget;
use crate::prompter::flows::main_flow::MainFlow;
use crate::prompter::prompter::Prompter;
use crate::ui::display_manager::DisplayManager;

pub mod availability;
pub mod command;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod ui;

pub mod prompter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let paths = CliPaths::from_env().map_err(|e| anyhow!(e))?;
    let today = Local::now().date_naive();
    let mut ctx = AppContext::new_with_paths(&paths, today)
        .with_context(|| {
            format!(
                "Failed to load configuration from {}",
                paths.config_path.display()
            )
        })?;

    let interactive = std::io::stdout().is_terminal();
    let dm = if interactive {
        DisplayManager::new()
    } else {
        DisplayManager::plain()
    };
    let logger = ctx.logger.clone();
    let flow = MainFlow::new(&mut ctx, dm).interactive(interactive);

    if let Err(err) = Prompter::new().interactive(interactive).run(flow) {
        logger.error(err.to_string(), LogTarget::ConsoleAndFile);
        return Err(err.into());
    }
    Ok(())
}
