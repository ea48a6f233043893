//! CLI parse tests.

use super::{Cli, CliCommand, ConfigAction};
use clap::Parser;

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

mod config;
