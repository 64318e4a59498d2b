//! Tests for the remaining subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_detect() {
    match parse(&["svdl", "detect", "https://vimeo.com/1"]) {
        CliCommand::Detect { url } => assert_eq!(url, "https://vimeo.com/1"),
        _ => panic!("expected Detect"),
    }
}

#[test]
fn cli_parse_history_default_limit() {
    match parse(&["svdl", "history"]) {
        CliCommand::History { limit } => assert_eq!(limit, 20),
        _ => panic!("expected History"),
    }
}

#[test]
fn cli_parse_history_limit() {
    match parse(&["svdl", "history", "--limit", "5"]) {
        CliCommand::History { limit } => assert_eq!(limit, 5),
        _ => panic!("expected History with --limit"),
    }
}

#[test]
fn cli_parse_clear_history() {
    match parse(&["svdl", "clear-history"]) {
        CliCommand::ClearHistory => {}
        _ => panic!("expected ClearHistory"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["svdl", "checksum", "/tmp/clip.mp4"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "/tmp/clip.mp4"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_rejects_missing_url() {
    assert!(Cli::try_parse_from(["svdl", "resolve"]).is_err());
    assert!(Cli::try_parse_from(["svdl", "get"]).is_err());
    assert!(Cli::try_parse_from(["svdl"]).is_err());
}
