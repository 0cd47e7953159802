use crate::availability::SlotQuery;
use crate::config::Config;
use crate::core::cli::CliPaths;
use crate::core::ledger::Ledger;
use crate::core::session::Session;
use crate::errors::Result;
use crate::logging::Logger;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Everything one interactive session works on.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub ledger: Ledger,
    pub session: Session,
    pub logger: Logger,
    pub today: NaiveDate,
    pub startup_displayed: bool,
    pub logs_dir: PathBuf,
}

impl AppContext {
    /// Loads the config named by `paths`. The default `config.json` is
    /// created when absent; an explicit `--config` file must exist.
    pub fn new_with_paths(paths: &CliPaths, today: NaiveDate) -> Result<Self> {
        let config = if paths.config_explicit {
            Config::load_from(&paths.config_path)?
        } else {
            Config::load_or_create(&paths.config_path)?
        };
        Self::from_config(config, &paths.logs_dir, today)
    }

    /// Builds the session from a loaded config; demo bookings are placed in
    /// the week containing `today`.
    pub fn from_config(config: Config, logs_dir: impl AsRef<Path>, today: NaiveDate) -> Result<Self> {
        let logs_dir = logs_dir.as_ref().to_path_buf();
        let logger = Logger::with_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let session = Session::new(config.default_duration(), today);
        let mut ledger = Ledger::new();
        if config.seed_demo_bookings() {
            ledger.seed_demo(session.week().start())?;
        }

        Ok(Self {
            config,
            ledger,
            session,
            logger,
            today,
            startup_displayed: false,
            logs_dir,
        })
    }

    pub fn config_path(&self) -> &Path {
        self.config.path()
    }

    /// Render snapshot of the current state.
    pub fn query(&self) -> SlotQuery<'_> {
        self.session.query(self.ledger.as_slice())
    }
}
