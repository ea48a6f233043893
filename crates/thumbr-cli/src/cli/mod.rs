//! CLI for thumbr.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use thumbr_core::config;

use commands::{run_config_path, run_config_show, run_rewrite};

/// Top-level CLI for thumbr.
#[derive(Debug, Parser)]
#[command(name = "thumbr")]
#[command(about = "thumbr: rewrite image URLs so a Thumbor server resizes them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the Thumbor URL for an image request (or the input if it is not eligible).
    Rewrite(RewriteArgs),

    /// Inspect the configuration file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Image request to rewrite, plus per-invocation overrides of config.toml.
#[derive(Debug, Args)]
pub struct RewriteArgs {
    /// Image URL as the app would request it.
    pub url: String,

    /// Target width in pixels (0 keeps the aspect ratio).
    #[arg(long, default_value_t = 0)]
    pub width: u32,

    /// Target height in pixels (0 keeps the aspect ratio).
    #[arg(long, default_value_t = 0)]
    pub height: u32,

    /// Fill the target box and crop the overflow.
    #[arg(long, conflicts_with = "center_inside")]
    pub center_crop: bool,

    /// Fit inside the target box without cropping.
    #[arg(long)]
    pub center_inside: bool,

    /// Rewrite even when no size is given.
    #[arg(long)]
    pub always: bool,

    /// Treat the client as able to decode WebP.
    #[arg(long)]
    pub webp: bool,

    /// Extra Thumbor filter, e.g. `quality(80)`. Repeatable.
    #[arg(long = "filter", value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Thumbor endpoint overriding the configured one.
    #[arg(long)]
    pub endpoint: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the config file location.
    Path,
    /// Print the effective configuration as TOML.
    Show,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Rewrite(args) => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_rewrite(&cfg, &args)?;
            }
            CliCommand::Config { action } => match action {
                ConfigAction::Path => run_config_path()?,
                ConfigAction::Show => run_config_show(&config::load_or_init()?)?,
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
