use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the front end. The availability engine itself never errors;
/// a refused booking is a `false` from `can_book`.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Bad command arguments, day names, times, durations.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Line did not start with a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Booking ------------------------------------------------------------
    /// Raised at confirmation time when the selected slot is no longer bookable.
    #[error("Slot {day} {date} at {time} cannot be booked: {reason}.")]
    SlotUnavailable {
        day: String,
        date: String,
        time: String,
        reason: String,
    },

    /// `book` was issued with nothing selected.
    #[error("No time slot selected. Use 'pick <day> <time>' first.")]
    NoSelection,

    // ---- Config -------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    #[error("{0}")]
    Domain(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
}

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}
