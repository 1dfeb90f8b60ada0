//! Tests for the parse and validate subcommands.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_parse() {
    match parse(&["urlkit", "parse", "https://example.com/a?x=1"]) {
        CliCommand::Parse { url, json } => {
            assert_eq!(url, "https://example.com/a?x=1");
            assert!(!json);
        }
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_parse_json() {
    match parse(&["urlkit", "parse", "https://example.com", "--json"]) {
        CliCommand::Parse { json, .. } => assert!(json),
        _ => panic!("expected Parse with --json"),
    }
}

#[test]
fn cli_parse_validate() {
    match parse(&["urlkit", "validate", "https://www.google.com"]) {
        CliCommand::Validate { url, explain } => {
            assert_eq!(url, "https://www.google.com");
            assert!(!explain);
        }
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_validate_explain() {
    match parse(&["urlkit", "validate", "invalid-string", "--explain"]) {
        CliCommand::Validate { url, explain } => {
            assert_eq!(url, "invalid-string");
            assert!(explain);
        }
        _ => panic!("expected Validate with --explain"),
    }
}
