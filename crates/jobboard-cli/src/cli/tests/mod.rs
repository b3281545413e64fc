//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}


#[test]
fn cli_parse_global_base_url() {
    let cli = Cli::try_parse_from(["jobboard", "jobs", "--base-url", "http://h:1/api/v1/"]).unwrap();
    assert_eq!(cli.base_url.as_deref(), Some("http://h:1/api/v1/"));
    let cli = Cli::try_parse_from(["jobboard", "orgs"]).unwrap();
    assert!(cli.base_url.is_none());
}

#[test]
fn cli_parse_login_requires_token() {
    match parse(&["jobboard", "login", "--token", "abc"]) {
        CliCommand::Login { token } => assert_eq!(token, "abc"),
        _ => panic!("expected Login"),
    }
    assert!(Cli::try_parse_from(["jobboard", "login"]).is_err());
}

#[test]
fn cli_parse_logout() {
    match parse(&["jobboard", "logout"]) {
        CliCommand::Logout => {}
        _ => panic!("expected Logout"),
    }
}
