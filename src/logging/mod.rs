
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

/// Things worth a line in the session log. Each event knows its level and
/// where it belongs.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEvent {
    SessionStarted {
        business: String,
        week: String,
    },
    BookingConfirmed {
        id: String,
        customer: String,
        when: String,
        hours: String,
    },
    SlotSelected {
        when: String,
        hours: String,
    },
    SelectionCleared {
        reason: &'static str,
    },
    SlotRefused {
        when: String,
        reason: String,
    },
    WeekChanged {
        label: String,
    },
    DurationChanged {
        old: String,
        new: String,
    },
    ConfigChanged {
        key: String,
        old: String,
        new: String,
    },
}

impl LogEvent {
    pub fn level(&self) -> LogLevel {
        match self {
            LogEvent::SlotRefused { .. } => LogLevel::Warn,
            _ => LogLevel::Info,
        }
    }

    pub fn target(&self) -> LogTarget {
        match self {
            LogEvent::SlotRefused { .. } => LogTarget::ConsoleAndFile,
            _ => LogTarget::FileOnly,
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEvent::SessionStarted { business, week } => {
                write!(f, "Session started for {business}, showing week {week}.")
            }
            LogEvent::BookingConfirmed {
                id,
                customer,
                when,
                hours,
            } => write!(f, "Booked {id} for {customer}: {when} ({hours}h)."),
            LogEvent::SlotSelected { when, hours } => {
                write!(f, "Selected {when} ({hours}h).")
            }
            LogEvent::SelectionCleared { reason } => write!(f, "Selection cleared ({reason})."),
            LogEvent::SlotRefused { when, reason } => {
                write!(f, "Cannot book {when}: {reason}.")
            }
            LogEvent::WeekChanged { label } => write!(f, "Showing week {label}."),
            LogEvent::DurationChanged { old, new } => {
                write!(f, "Job duration changed from {old}h to {new}h.")
            }
            LogEvent::ConfigChanged { key, old, new } => {
                write!(f, "Config {key} changed from '{old}' to '{new}'.")
            }
        }
    }
}

trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, line: &str);
}

/// Info to stdout, warnings and errors to stderr.
struct ConsoleSink;
impl LogSink for ConsoleSink {
    fn log(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Info => println!("{line}"),
            LogLevel::Warn | LogLevel::Error => eprintln!("{line}"),
        }
    }
}

struct FileSink {
    file: Mutex<File>,
}

impl FileSink {
    fn new(dir: impl AsRef<Path>) -> std::io::Result<(Self, PathBuf)> {
        fs::create_dir_all(&dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.as_ref().join(format!("session-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((
            Self {
                file: Mutex::new(file),
            },
            path,
        ))
    }
}

impl LogSink for FileSink {
    fn log(&self, _level: LogLevel, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

struct FileState {
    sink: Option<Arc<dyn LogSink>>,
    log_path: Option<PathBuf>,
    attempted: bool,
    log_dir: PathBuf,
}

impl FileState {
    fn new(log_dir: PathBuf) -> Self {
        Self {
            sink: None,
            log_path: None,
            attempted: false,
            log_dir,
        }
    }
}

/// Cheap to clone; clones share the same file and settings.
#[derive(Clone)]
pub struct Logger {
    console: Arc<dyn LogSink>,
    file_state: Arc<Mutex<FileState>>,
    file_enabled: Arc<AtomicBool>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::with_log_dir("logs")
    }

    /// The log file is not created until the first file-targeted line.
    pub fn with_log_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            console: Arc::new(ConsoleSink),
            file_state: Arc::new(Mutex::new(FileState::new(dir.as_ref().to_path_buf()))),
            file_enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    fn ensure_file_sink(&self) -> Option<Arc<dyn LogSink>> {
        let mut state = self.file_state.lock().ok()?;
        if state.attempted {
            return state.sink.clone();
        }
        state.attempted = true;

        match FileSink::new(&state.log_dir) {
            Ok((sink, path)) => {
                let arc: Arc<dyn LogSink> = Arc::new(sink);
                state.log_path = Some(path);
                state.sink = Some(arc.clone());
                Some(arc)
            }
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                None
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        if matches!(target, LogTarget::ConsoleOnly | LogTarget::ConsoleAndFile) {
            self.console.log(level, message);
        }

        if matches!(target, LogTarget::ConsoleAndFile | LogTarget::FileOnly)
            && self.file_enabled.load(Ordering::SeqCst)
        {
            if let Some(file_sink) = self.ensure_file_sink() {
                let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
                file_sink.log(level, &format!("[{timestamp}] {level:<5} {message}"));
            }
        }
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    pub fn record(&self, event: &LogEvent) {
        self.log(event.level(), &event.to_string(), event.target());
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        self.file_enabled.store(enabled, Ordering::SeqCst);
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.file_enabled.load(Ordering::SeqCst)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.file_state.lock().ok().map(|s| s.log_dir.clone())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.file_state.lock().ok().and_then(|s| s.log_path.clone())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("log_path", &self.log_path())
            .field("file_enabled", &self.file_logging_enabled())
            .finish()
    }
}
