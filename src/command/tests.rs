use super::command_parser::CommandParser;
use super::commands::{Command, CommandKind, CommandOutcome};
use super::manual::ManualCatalog;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::ledger::NewBooking;
use crate::core::types::{JobLength, WorkingDay};
use crate::errors::Error;
use crate::ui::display_manager::DisplayManager;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir() -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "slotbook-command-{}-{n}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 7).unwrap()
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 5).unwrap()
}

fn make_ctx() -> AppContext {
    let dir = temp_dir();
    let config = Config::write_default(dir.join("config.json")).unwrap();
    AppContext::from_config(config, dir.join("logs"), today()).unwrap()
}

fn parse(line: &str) -> Result<Command, Error> {
    CommandParser::new().parse(line, 2099)
}

fn run(ctx: &mut AppContext, line: &str) -> Result<CommandOutcome, Error> {
    parse(line)?.execute(ctx, &DisplayManager::plain())
}

// ---------- parser ----------
#[test]
fn parses_slot_commands_into_indices() {
    assert_eq!(
        parse("pick mon 9:30").unwrap(),
        Command::Pick {
            day: WorkingDay::Monday,
            index: 3
        }
    );
    assert_eq!(
        parse("hover Tue 2PM").unwrap(),
        Command::Hover {
            day: WorkingDay::Tuesday,
            index: 12
        }
    );
    assert_eq!(
        parse("PICK friday 15:30").unwrap(),
        Command::Pick {
            day: WorkingDay::Friday,
            index: 15
        }
    );
}

#[test]
fn slot_times_off_the_grid_are_rejected() {
    let err = parse("pick mon 9:15").unwrap_err();
    assert!(err.to_string().contains("not on a 30 minute slot boundary"));

    let err = parse("pick sat 9").unwrap_err();
    assert!(err.to_string().contains("Invalid working day"));

    let err = parse("pick mon").unwrap_err();
    assert!(err.to_string().contains("Usage: pick <day> <time>"));
}

#[test]
fn out_of_hours_times_parse_and_are_left_to_the_engine() {
    assert_eq!(
        parse("pick mon 7:30").unwrap(),
        Command::Pick {
            day: WorkingDay::Monday,
            index: -1
        }
    );
    assert_eq!(
        parse("hover wed 4PM").unwrap(),
        Command::Hover {
            day: WorkingDay::Wednesday,
            index: 16
        }
    );
}

#[test]
fn parses_navigation_and_duration() {
    assert_eq!(parse("next").unwrap(), Command::Next);
    assert_eq!(parse("previous").unwrap(), Command::Prev);
    assert_eq!(parse("today").unwrap(), Command::Today);
    assert_eq!(
        parse("goto 01/12").unwrap(),
        Command::Goto(NaiveDate::from_ymd_opt(2099, 1, 12).unwrap())
    );
    assert_eq!(parse("duration").unwrap(), Command::Duration(None));
    assert_eq!(
        parse("duration 1.5h").unwrap(),
        Command::Duration(Some(JobLength::from_slots(3)))
    );
    assert!(parse("duration 9").is_err());
    assert!(parse("duration 1.25").is_err());
}

#[test]
fn no_arg_commands_reject_extra_arguments() {
    let err = parse("show everything").unwrap_err();
    match err {
        Error::Parse(msg) => {
            assert!(msg.starts_with("Wrong arguments for 'show'."));
            assert!(msg.ends_with("Usage: show"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn help_flag_anywhere_opens_the_command_page() {
    assert_eq!(
        parse("book --help").unwrap(),
        Command::Help(Some(CommandKind::Book))
    );
    assert_eq!(
        parse("pick mon -h").unwrap(),
        Command::Help(Some(CommandKind::Pick))
    );
    assert_eq!(
        parse("help duration").unwrap(),
        Command::Help(Some(CommandKind::Duration))
    );
    assert_eq!(parse("help").unwrap(), Command::Help(None));
}

#[test]
fn bookings_takes_an_optional_id() {
    assert_eq!(parse("bookings").unwrap(), Command::Bookings(None));
    assert_eq!(
        parse("bookings b0003").unwrap(),
        Command::Bookings(Some("B0003".to_string()))
    );
    assert!(parse("bookings b1 b2").is_err());
}

#[test]
fn config_values_keep_inner_spaces() {
    assert_eq!(
        parse("config business_name Acme  Wiring Co").unwrap(),
        Command::Config(Some(("business_name".to_string(), "Acme Wiring Co".to_string())))
    );
    assert_eq!(parse("config").unwrap(), Command::Config(None));
    assert!(parse("config BUSINESS_NAME").is_err());
}

#[test]
fn unknown_and_empty_lines_error() {
    match parse("launch").unwrap_err() {
        Error::UnknownCommand(msg) => {
            assert!(msg.starts_with("'launch'. Valid commands:"));
            assert!(msg.contains("pick"));
        }
        other => panic!("expected unknown command, got {other:?}"),
    }
    assert!(matches!(parse("   ").unwrap_err(), Error::Parse(_)));
}

#[test]
fn command_kind_round_trips_through_parsed_commands() {
    assert_eq!(parse("leave").unwrap().kind(), CommandKind::Leave);
    assert_eq!(parse("pick mon 8").unwrap().kind(), CommandKind::Pick);
    assert_eq!(CommandKind::Prev.to_string(), "prev");
    for kind in CommandKind::iter() {
        assert!(kind.synopsis().starts_with(&kind.to_string()));
        assert!(!kind.summary().is_empty());
    }
}

// ---------- manual ----------
#[test]
fn overview_lists_every_command_and_the_schedule() {
    let text = ManualCatalog::new().overview().render();
    for kind in CommandKind::iter() {
        assert!(text.contains(kind.synopsis()), "missing {kind}");
    }
    assert!(text.contains("SCHEDULE"));
    assert!(text.contains("Monday to Friday, 8:00 AM to 4:00 PM, in 30 minute slots."));
}

#[test]
fn command_pages_have_synopsis_and_details() {
    let catalog = ManualCatalog::new();
    let pick = catalog.page_for(CommandKind::Pick).render();
    assert!(pick.contains("SYNOPSIS"));
    assert!(pick.contains("pick <day> <time>"));
    assert!(pick.contains("DESCRIPTION"));

    let show = catalog.page_for(CommandKind::Show).render();
    assert!(!show.contains("DESCRIPTION"));
}

// ---------- execute ----------
#[test]
fn pick_then_book_opens_the_dialog() {
    let mut ctx = make_ctx();
    assert_eq!(run(&mut ctx, "pick wed 10").unwrap(), CommandOutcome::Done);
    let sel = *ctx.session.selection().unwrap();
    assert_eq!(sel.day, WorkingDay::Wednesday);
    assert_eq!(sel.date, today());
    assert_eq!(sel.start_index, 4);

    assert_eq!(
        run(&mut ctx, "book").unwrap(),
        CommandOutcome::OpenBooking(sel)
    );
}

#[test]
fn book_without_selection_errors() {
    let mut ctx = make_ctx();
    assert!(matches!(
        run(&mut ctx, "book").unwrap_err(),
        Error::NoSelection
    ));
}

#[test]
fn pick_on_a_booked_slot_is_refused_without_state_change() {
    let mut ctx = make_ctx();
    ctx.ledger
        .create(NewBooking {
            customer_name: "Ann".into(),
            date: monday(),
            start_index: 4,
            duration: JobLength::from_slots(4),
            description: None,
        })
        .unwrap();
    run(&mut ctx, "pick mon 9").unwrap();
    assert!(ctx.session.selection().is_none());

    run(&mut ctx, "hover mon 9").unwrap();
    assert!(ctx.session.hovered().is_none());
    run(&mut ctx, "hover mon 12PM").unwrap();
    assert!(ctx.session.hovered().is_some());
    run(&mut ctx, "leave").unwrap();
    assert!(ctx.session.hovered().is_none());
}

#[test]
fn picking_the_selected_slot_again_deselects() {
    let mut ctx = make_ctx();
    run(&mut ctx, "pick thu 1PM").unwrap();
    assert!(ctx.session.selection().is_some());
    run(&mut ctx, "pick thu 13:00").unwrap();
    assert!(ctx.session.selection().is_none());
}

#[test]
fn duration_change_drops_selection() {
    let mut ctx = make_ctx();
    run(&mut ctx, "pick mon 8").unwrap();
    run(&mut ctx, "duration 3").unwrap();
    assert_eq!(ctx.session.duration(), JobLength::from_slots(6));
    assert!(ctx.session.selection().is_none());

    run(&mut ctx, "duration").unwrap();
    assert_eq!(ctx.session.duration(), JobLength::from_slots(6));
}

#[test]
fn clear_drops_selection_and_tolerates_nothing_selected() {
    let mut ctx = make_ctx();
    run(&mut ctx, "clear").unwrap();
    run(&mut ctx, "pick mon 8").unwrap();
    run(&mut ctx, "clear").unwrap();
    assert!(ctx.session.selection().is_none());
}

#[test]
fn week_navigation_moves_the_view() {
    let mut ctx = make_ctx();
    run(&mut ctx, "next").unwrap();
    assert_eq!(
        ctx.session.week().start(),
        NaiveDate::from_ymd_opt(2099, 1, 12).unwrap()
    );
    run(&mut ctx, "today").unwrap();
    assert_eq!(ctx.session.week().start(), monday());

    run(&mut ctx, "prev").unwrap();
    let past = ctx.session.week().start();
    assert_eq!(past, NaiveDate::from_ymd_opt(2098, 12, 29).unwrap());
    run(&mut ctx, "prev").unwrap();
    assert_eq!(ctx.session.week().start(), past);

    run(&mut ctx, "goto 2099-02-18").unwrap();
    assert_eq!(
        ctx.session.week().start(),
        NaiveDate::from_ymd_opt(2099, 2, 16).unwrap()
    );
}

#[test]
fn week_change_keeps_selection_but_drops_hover() {
    let mut ctx = make_ctx();
    run(&mut ctx, "pick mon 8").unwrap();
    run(&mut ctx, "hover tue 8").unwrap();
    run(&mut ctx, "next").unwrap();
    assert!(ctx.session.selection().is_some());
    assert!(ctx.session.hovered().is_none());
}

#[test]
fn config_edit_persists_to_disk() {
    let mut ctx = make_ctx();
    run(&mut ctx, "config BUSINESS_NAME Acme Wiring").unwrap();
    assert_eq!(ctx.config.business_name(), "Acme Wiring");
    assert!(ctx.config.last_change.is_none());

    let reloaded = Config::load_from(ctx.config_path()).unwrap();
    assert_eq!(reloaded.business_name(), "Acme Wiring");

    run(&mut ctx, "config file_logging_enabled false").unwrap();
    assert!(!ctx.logger.file_logging_enabled());

    assert!(run(&mut ctx, "config DEFAULT_DURATION 12").is_err());
    assert!(run(&mut ctx, "config NOPE 1").is_err());
    assert_eq!(ctx.config.default_duration(), JobLength::default());

    run(&mut ctx, "config 2 Bright Sparks").unwrap();
    assert_eq!(ctx.config.business_name(), "Bright Sparks");
}

#[test]
fn help_bookings_and_exit() {
    let mut ctx = make_ctx();
    assert_eq!(run(&mut ctx, "help").unwrap(), CommandOutcome::Done);
    assert_eq!(run(&mut ctx, "help pick").unwrap(), CommandOutcome::Done);
    assert_eq!(run(&mut ctx, "bookings").unwrap(), CommandOutcome::Done);
    assert!(matches!(
        run(&mut ctx, "bookings B0042").unwrap_err(),
        Error::Domain(_)
    ));
    assert_eq!(run(&mut ctx, "show").unwrap(), CommandOutcome::Done);
    assert_eq!(run(&mut ctx, "exit").unwrap(), CommandOutcome::Exit);
}
