use std::fs;

use slotbook::config::Config;

use crate::common::{
    make_temp_dir, read_log_contents, run_with_args, run_with_input, write_config,
    write_valid_config,
};

#[test]
fn missing_config_exits_with_error() {
    let dir = make_temp_dir("config");
    let output = run_with_input(&dir, "exit\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration from"));
    assert!(stderr.contains("not found"));
}

#[test]
fn invalid_config_json_exits_with_error() {
    let dir = make_temp_dir("config");
    fs::write(dir.join("config.json"), "{ not json").unwrap();
    let output = run_with_input(&dir, "exit\n");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON"));
}

#[test]
fn unknown_cli_argument_exits_with_error() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_args(&dir, &["--bogus"], "exit\n");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown argument: --bogus"));
}

#[test]
fn unknown_cli_argument_with_pending_input_still_reports_error() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let input = "show\n".repeat(100_000);
    let output = run_with_args(&dir, &["--bogus"], &input);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown argument: --bogus"));
}

#[test]
fn default_config_is_created_when_absent() {
    let dir = make_temp_dir("config");
    let logs = dir.join("logs");
    let output = run_with_args(&dir, &["--logs", &logs.to_string_lossy()], "config\nexit\n");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("DEFAULT_DURATION"));
    let cfg = Config::load_from(dir.join("config.json")).expect("default config should be written");
    assert_eq!(cfg.business_name(), "J L Electrical Services");
}

#[test]
fn config_command_prints_table() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "config\nexit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CONFIG"));
    assert!(stdout.contains("DEFAULT_DURATION"));
    assert!(stdout.contains("BUSINESS_NAME"));
}

#[test]
fn config_edit_persists_to_file() {
    let dir = make_temp_dir("config");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "config business_name Acme Wiring\nexit\n");
    assert!(output.status.success());

    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(cfg.business_name(), "Acme Wiring");

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Config BUSINESS_NAME changed from 'J L Electrical Services' to 'Acme Wiring'."));
}

#[test]
fn demo_bookings_load_and_file_logging_can_be_off() {
    let dir = make_temp_dir("config");
    write_config(&dir, true, false);
    let output = run_with_input(&dir, "bookings\nexit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("John Smith"));
    assert!(stdout.contains("Robert Brown"));
    assert!(read_log_contents(&dir).is_none());
}
