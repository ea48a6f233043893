//! Tracing setup for the `thumbr` binary.
//!
//! Logs go to `$XDG_STATE_HOME/thumbr/thumbr.log`; when that cannot be
//! opened the caller falls back to [`init_logging_stderr`]. Library code
//! only emits `tracing` events and never installs a subscriber itself.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "warn,thumbr_core=info,thumbr=info";

/// Sink for one log event: the shared log file, or stderr if cloning fails.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_DIRECTIVES`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Location of the log file, creating its directory.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thumbr")?;
    xdg_dirs
        .place_state_file("thumbr.log")
        .context("create thumbr state directory")
}

/// Install a subscriber appending to the state-dir log file.
///
/// Returns Err when the file cannot be opened so the caller can fall back
/// to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_path()?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(path)
}

/// Install a stderr-only subscriber. Silently keeps any subscriber that is
/// already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
