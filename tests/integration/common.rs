use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_slotbook"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "slotbook-{prefix}-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_config(dir: &Path, seed_demo: bool, file_logging: bool) {
    let cfg = format!(
        r#"{{
      "default_duration": {{ "value": 2.0, "description": "Job duration in hours" }},
      "seed_demo_bookings": {{ "value": "{}", "description": "demo" }},
      "business_name": {{ "value": "J L Electrical Services", "description": "banner" }},
      "file_logging_enabled": {{ "value": "{}", "description": "file logging" }}
    }}"#,
        if seed_demo { "True" } else { "False" },
        if file_logging { "True" } else { "False" }
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn write_valid_config(dir: &Path) {
    write_config(dir, false, true);
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // The binary may exit before reading stdin (bad arguments, missing config).
    if let Err(err) = child.stdin.as_mut().unwrap().write_all(input.as_bytes()) {
        assert_eq!(err.kind(), ErrorKind::BrokenPipe, "stdin write failed: {err}");
    }

    child.wait_with_output().unwrap()
}

/// Runs against `<dir>/config.json`, logging into `<dir>/logs`.
pub fn run_with_input(dir: &Path, input: &str) -> Output {
    let config = dir.join("config.json");
    let logs = dir.join("logs");
    run_with_args(
        dir,
        &[
            "--config",
            &config.to_string_lossy(),
            "--logs",
            &logs.to_string_lossy(),
        ],
        input,
    )
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1B' {
            if matches!(chars.peek(), Some('[')) {
                let _ = chars.next();
                for nc in chars.by_ref() {
                    if nc.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }
        if c.is_control() {
            continue;
        }
        out.push(c);
    }

    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn has_line_starting(buf: &[u8], prefix: &str) -> bool {
    normalized_lines(buf).iter().any(|l| l.starts_with(prefix))
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
