//! Argument parsing for the top-level CLI

use clap::{CommandFactory, Parser};
use errand::cli::{Cli, Commands};

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_no_subcommand_is_allowed() {
    let cli = Cli::try_parse_from(["errand"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.profile.is_none());
}

#[test]
fn test_global_profile_flag() {
    let cli = Cli::try_parse_from(["errand", "list", "--profile", "work"]).unwrap();
    assert_eq!(cli.profile.as_deref(), Some("work"));
    assert!(matches!(cli.command, Some(Commands::List(_))));
}

#[test]
fn test_add_parses_dates_and_categories() {
    let cli = Cli::try_parse_from([
        "errand",
        "add",
        "Buy Milk",
        "--due",
        "2025-01-01",
        "--category",
        "shopping",
        "--store",
        "Corner shop",
    ])
    .unwrap();
    assert!(matches!(cli.command, Some(Commands::Add(_))));

    assert!(Cli::try_parse_from(["errand", "add", "x", "--due", "01/01/2025"]).is_err());
    assert!(Cli::try_parse_from(["errand", "add", "x", "--category", "chores"]).is_err());
    assert!(Cli::try_parse_from(["errand", "add", "x", "--due", "tomorrow"]).is_ok());
}

#[test]
fn test_rm_needs_a_target() {
    assert!(Cli::try_parse_from(["errand", "rm"]).is_err());
    assert!(Cli::try_parse_from(["errand", "rm", "Buy Milk"]).is_ok());
    assert!(Cli::try_parse_from(["errand", "rm", "--index", "1", "3"]).is_ok());
    assert!(Cli::try_parse_from(["errand", "rm", "Buy Milk", "--index", "1"]).is_err());
}

#[test]
fn test_edit_clear_details_conflicts_with_details() {
    assert!(Cli::try_parse_from(["errand", "edit", "x", "--clear-details"]).is_ok());
    assert!(
        Cli::try_parse_from(["errand", "edit", "x", "--clear-details", "--notes", "n"]).is_err()
    );
}

#[test]
fn test_bulk_commands() {
    let cli = Cli::try_parse_from(["errand", "complete-all"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::CompleteAll)));

    let cli = Cli::try_parse_from(["errand", "clear-completed", "--dry-run"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::ClearCompleted(_))));
}
