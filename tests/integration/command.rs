use crate::common::{
    has_line_starting, make_temp_dir, normalized_lines, run_with_input, write_valid_config,
};

#[test]
fn startup_shows_banner_and_grid() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "exit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("J L Electrical Services"));
    assert!(stdout.contains("Type 'help' for commands"));
    assert!(has_line_starting(&output.stdout, "WEEK OF"));
    assert!(has_line_starting(&output.stdout, "Job duration: 2 hours"));
    assert!(has_line_starting(&output.stdout, "Selected: none"));
}

#[test]
fn unknown_command_reports_error_and_continues() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "frobnicate\nshow\nexit\n");

    assert!(output.status.success());
    assert!(
        has_line_starting(
            &output.stderr,
            "Unknown command: 'frobnicate'. Valid commands: show, next, prev"
        ),
        "stderr was: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn wrong_arguments_print_usage() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "pick mon\nexit\n");

    assert!(output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert!(stderr.iter().any(|l| l == "Parse error: Wrong arguments for 'pick'."));
    assert!(stderr.iter().any(|l| l == "Usage: pick <day> <time>"));
}

#[test]
fn help_prints_overview_and_command_pages() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "help\nbook --help\nexit\n");

    assert!(output.status.success());
    let stdout = normalized_lines(&output.stdout);
    assert!(stdout.iter().any(|l| l == "NAME"));
    assert!(stdout.iter().any(|l| l == "slotbook - Weekly time-slot booking."));
    assert!(stdout.iter().any(|l| l == "book - Confirm the selected slot"));
}

#[test]
fn prev_is_refused_once_in_a_past_week() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "prev\nprev\ntoday\nexit\n");

    assert!(output.status.success());
    let stderr = normalized_lines(&output.stderr);
    assert_eq!(
        stderr
            .iter()
            .filter(|l| l.starts_with("Already showing a past week"))
            .count(),
        1
    );
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = make_temp_dir("command");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "show\n");
    assert!(output.status.success());
}
