//! CLI parse tests.

use clap::Parser;

use super::{Cli, CliCommand, ModeArg};

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn parse_format_with_bindings() {
    let cmd = parse(&[
        "urlt",
        "format",
        "/users/{id}",
        "-p",
        "id=42",
        "-q",
        "page=2",
        "--mode",
        "warn",
    ]);
    match cmd {
        CliCommand::Format {
            template,
            path_params,
            query_params,
            mode,
            ..
        } => {
            assert_eq!(template, "/users/{id}");
            assert_eq!(path_params, ["id=42"]);
            assert_eq!(query_params, ["page=2"]);
            assert_eq!(mode, Some(ModeArg::Warn));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_format_defaults() {
    let cmd = parse(&["urlt", "format", "/plain"]);
    match cmd {
        CliCommand::Format {
            template,
            path_params,
            matrix_params,
            shared_params,
            mode,
            ..
        } => {
            assert_eq!(template, "/plain");
            assert!(path_params.is_empty());
            assert!(matrix_params.is_empty());
            assert!(shared_params.is_empty());
            assert_eq!(mode, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_split() {
    let cmd = parse(&["urlt", "split", "https://example.com/a"]);
    match cmd {
        CliCommand::Split { url } => assert_eq!(url, "https://example.com/a"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_canon_with_root() {
    let cmd = parse(&["urlt", "canon", "///a//b", "--root", "/api"]);
    match cmd {
        CliCommand::Canon { token, root } => {
            assert_eq!(token, "///a//b");
            assert_eq!(root.as_deref(), Some("/api"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn rejects_unknown_mode() {
    assert!(Cli::try_parse_from(["urlt", "format", "/x", "--mode", "loud"]).is_err());
}

#[test]
fn bindings_reject_missing_equals() {
    let err = super::commands::bindings(&[], &["novalue".to_string()]).unwrap_err();
    assert!(err.to_string().contains("novalue"));
}

#[test]
fn shared_bindings_lose_to_explicit_ones() {
    let map = super::commands::bindings(
        &["id=shared".to_string()],
        &["id=own".to_string()],
    )
    .unwrap();
    assert_eq!(map.borrow().get("id").map(String::as_str), Some("own"));
}
