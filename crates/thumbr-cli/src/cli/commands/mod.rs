//! CLI command handlers, one file per command.

mod config;
mod rewrite;

pub use config::{run_config_path, run_config_show};
pub use rewrite::run_rewrite;
