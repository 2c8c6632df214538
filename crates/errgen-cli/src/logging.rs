//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: record name collisions that overwrite earlier rows
//! - `info`: pipeline stage progress and counts
//! - `debug`: padded or over-long rows, each written file
//! - `trace`: unused
//!
//! `main` builds a [`LogConfig`] from the global flags and calls
//! [`init_logging`] once before dispatching a subcommand.

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Crates whose events follow the configured level. Others stay at `warn`.
const WORKSPACE_CRATES: [&str; 4] = ["errgen_cli", "errgen_ingest", "errgen_model", "errgen_render"];

/// How and where log events are written.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to the workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace `level_filter` when it is set.
    pub use_env_filter: bool,
    /// Prefix pretty and compact events with a timestamp. JSON always has one.
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human output.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// One JSON object per event.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Install the global subscriber: stderr, or the configured log file in
/// append mode.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            format_layer(config, Mutex::new(file))
        }
        None => format_layer(config, io::stderr),
    };
    tracing_subscriber::registry()
        .with(layer)
        .with(build_env_filter(config))
        .init();
    Ok(())
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Formatting layer for the configured output format.
fn format_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    match (config.format, config.with_timestamps) {
        // Span close events carry the stage timings.
        (LogFormat::Json, _) => base.json().with_span_events(FmtSpan::CLOSE).boxed(),
        (LogFormat::Compact, true) => base.compact().with_ansi(config.with_ansi).boxed(),
        (LogFormat::Compact, false) => base
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        (LogFormat::Pretty, true) => base.with_ansi(config.with_ansi).boxed(),
        (LogFormat::Pretty, false) => base.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

/// Directive string applying `level` to every workspace crate.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = String::from("warn");
    for krate in WORKSPACE_CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}
