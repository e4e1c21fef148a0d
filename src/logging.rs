//! Leveled logging setup.
//!
//! Emission goes through the `tracing` macros (`debug!`, `info!`, `warn!`,
//! `error!`). This module owns the process-wide threshold and the output
//! routing: `ERROR` events are written to stderr, everything else to stdout.
//!
//! The threshold is read from `LOG_LEVEL` (see [`crate::config`]) and parsed
//! leniently, so an unknown name falls back to `info` instead of failing
//! startup. When `RUST_LOG` is set its target directives are layered on top
//! through an [`EnvFilter`]; the base level still comes from `LOG_LEVEL`.

use std::fmt;
use std::io;

use anyhow::Context;
use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::config::Config;

/// Ordered log severity: `Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a level name case-insensitively.
    ///
    /// Anything outside `debug`, `info`, `warn`, `error` yields [`LogLevel::Info`].
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "info" => Self::Info,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

/// Output encoding for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Returns `None` for anything other than `text` or `json`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Threshold filter: `level` for everything, refined per target by
/// `overrides` in `RUST_LOG` syntax.
///
/// The base level always comes from `level`; a bare level inside `overrides`
/// is replaced by it, while target directives such as `tower_http=debug` are
/// kept.
pub fn filter(level: LogLevel, overrides: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .parse_lossy(overrides.unwrap_or_default())
        .add_directive(LevelFilter::from(level).into())
}

/// Builds the subscriber that writes one line per event passing `filter` to
/// `writer`.
///
/// Every event is formatted into a buffer first and handed to the writer in a
/// single call, so concurrent requests never interleave inside a line.
pub fn subscriber<W>(
    filter: EnvFilter,
    format: LogFormat,
    writer: W,
    ansi: bool,
) -> Box<dyn Subscriber + Send + Sync + 'static>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer);

    match format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}

/// Writer that sends `ERROR` events to `err` and everything else to `out`.
pub fn routed<E, O>(err: E, out: O) -> impl for<'w> MakeWriter<'w> + Send + Sync + 'static
where
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    err.with_max_level(Level::ERROR).or_else(out)
}

/// Installs the global subscriber for the process.
///
/// Output goes to stderr for `ERROR` and stdout for the rest. Must be called
/// once, before the server starts accepting requests.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init(config: &Config) -> anyhow::Result<()> {
    let level = LogLevel::parse_lenient(&config.log_level);
    let format = LogFormat::parse(&config.log_format).unwrap_or_default();
    let overrides = std::env::var("RUST_LOG").ok();

    let sub = subscriber(
        filter(level, overrides.as_deref()),
        format,
        routed(io::stderr, io::stdout),
        true,
    );
    tracing::subscriber::set_global_default(sub).context("Failed to install log subscriber")?;

    tracing::debug!("Logging initialized at level {level}");
    Ok(())
}
