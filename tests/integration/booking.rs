use crate::common::{
    has_line_starting, make_temp_dir, normalized_lines, read_log_contents, run_with_input,
    write_config, write_valid_config,
};

#[test]
fn pick_and_book_records_the_booking() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let input = "pick fri 9\nbook\nAnn Lee\nRewire kitchen\nbookings\nexit\n";
    let output = run_with_input(&dir, input);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CONFIRM BOOKING"));
    assert!(stdout.contains("Customer name:"));
    assert!(has_line_starting(&output.stdout, "Booking confirmed for Ann Lee on"));
    assert!(stdout.contains("B0001"));
    assert!(stdout.contains("Rewire kitchen"));

    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(log.contains("Booked B0001 for Ann Lee: Friday"));
    assert!(log.contains("9:00 AM - 11:00 AM (2h)."));
}

#[test]
fn cancelling_the_dialog_books_nothing() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "pick wed 8\nbook\ncancel\nbookings\nexit\n");

    assert!(output.status.success());
    assert!(has_line_starting(&output.stdout, "Booking cancelled."));
    assert!(has_line_starting(&output.stdout, "No bookings yet."));
}

#[test]
fn exit_inside_the_dialog_ends_the_session_without_booking() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "pick wed 8\nbook\nAnn Lee\nexit\nbookings\n");

    assert!(output.status.success());
    assert!(!has_line_starting(&output.stdout, "No bookings yet."));
    let log = read_log_contents(&dir).expect("log file should exist");
    assert!(!log.contains("Booked B0001"));
}

#[test]
fn bookings_shows_a_single_booking_by_id() {
    let dir = make_temp_dir("booking");
    write_config(&dir, true, true);
    let output = run_with_input(&dir, "bookings b0002\nbookings B0099\nexit\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("B0002"));
    assert!(!stdout.contains("B0001"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("B0099"));
}

#[test]
fn overlapping_pick_is_refused_with_reason() {
    let dir = make_temp_dir("booking");
    write_config(&dir, true, true);
    let output = run_with_input(&dir, "pick mon 9:30\nbook\nexit\n");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Cannot book Monday") && stderr.contains("overlaps B0001 (John Smith"),
        "stderr was: {stderr}"
    );
    assert!(stderr.contains("No time slot selected."));
}

#[test]
fn job_running_past_closing_is_refused() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "pick thu 3PM\nexit\n");

    let stderr = normalized_lines(&output.stderr);
    assert!(
        stderr
            .iter()
            .any(|l| l.ends_with("runs past closing time (4:00 PM); the latest start is 2:00 PM.")),
        "stderr was: {stderr:?}"
    );
}

#[test]
fn changing_duration_clears_the_selection() {
    let dir = make_temp_dir("booking");
    write_valid_config(&dir);
    let output = run_with_input(&dir, "pick tue 8\nduration 1\nexit\n");

    assert!(output.status.success());
    assert!(has_line_starting(
        &output.stdout,
        "Selection cleared because the job duration changed."
    ));
    assert!(has_line_starting(&output.stdout, "Job duration: 1 hour"));
}
