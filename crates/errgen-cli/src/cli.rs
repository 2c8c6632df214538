//! CLI argument definitions for errgen.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use errgen_cli::config::Overrides;
use errgen_cli::logging::{LogConfig, LogFormat};
use errgen_model::{CollisionPolicy, OverflowPolicy};
use errgen_render::TargetLanguage;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "errgen",
    version,
    about = "Generate constant tables and enums from a pipe-delimited record file",
    long_about = "Generate source code from a pipe-delimited record file.\n\n\
                  The first line names the attributes; every following line is a record\n\
                  whose first field becomes its identifier. One constant table is written\n\
                  per attribute, plus a combined ErrorEnum, for each target language."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in each log line.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

impl Cli {
    /// Logging settings. An explicit `--log-level` or `-v`/`-q` wins over
    /// `RUST_LOG`; ANSI follows `--color`, and `auto` means a terminal stderr.
    pub fn log_config(&self) -> LogConfig {
        let explicit_level = self.log_level.map(LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter: explicit_level.unwrap_or_else(|| self.verbosity.tracing_level_filter()),
            use_env_filter: explicit_level.is_none() && !self.verbosity.is_present(),
            with_timestamps: self.log_timestamps,
            with_target: self.log_target,
            with_ansi,
            format: self.log_format.into(),
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate constant tables and the combined enum from a record file.
    Generate(GenerateArgs),

    /// List the supported target languages.
    Languages,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Record file to read (`-` reads standard input).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Root directory for generated files (default: ./output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Target language; repeat for several (default: go).
    #[arg(long = "language", short = 'l', value_enum, value_name = "LANG")]
    pub languages: Vec<LanguageArg>,

    /// Package for Go, Java and Kotlin output.
    ///
    /// All Go files share this package (default `errcode`), and constant
    /// tables reuse the record names, so build at most one Go constant table
    /// together with `ErrorEnum.go`.
    #[arg(long = "package", value_name = "NAME")]
    pub package: Option<String>,

    /// What to do when two rows normalize to the same record name.
    #[arg(long = "on-collision", value_enum)]
    pub on_collision: Option<CollisionArg>,

    /// What to do with rows that have more fields than the header.
    #[arg(long = "on-overflow", value_enum)]
    pub on_overflow: Option<OverflowArg>,

    /// TOML config file with a `[generate]` table.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl GenerateArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            output_dir: self.output_dir.clone(),
            languages: self.languages.iter().map(|&arg| arg.into()).collect(),
            package: self.package.clone(),
            on_collision: self.on_collision.map(Into::into),
            on_overflow: self.on_overflow.map(Into::into),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    Go,
    Java,
    Kotlin,
    Python,
    #[value(alias = "js")]
    Javascript,
}

impl From<LanguageArg> for TargetLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Go => Self::Go,
            LanguageArg::Java => Self::Java,
            LanguageArg::Kotlin => Self::Kotlin,
            LanguageArg::Python => Self::Python,
            LanguageArg::Javascript => Self::JavaScript,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CollisionArg {
    Overwrite,
    Reject,
}

impl From<CollisionArg> for CollisionPolicy {
    fn from(arg: CollisionArg) -> Self {
        match arg {
            CollisionArg::Overwrite => Self::Overwrite,
            CollisionArg::Reject => Self::Reject,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OverflowArg {
    Ignore,
    Reject,
}

impl From<OverflowArg> for OverflowPolicy {
    fn from(arg: OverflowArg) -> Self {
        match arg {
            OverflowArg::Ignore => Self::Ignore,
            OverflowArg::Reject => Self::Reject,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_flags_become_overrides() {
        let cli = Cli::parse_from([
            "errgen",
            "generate",
            "codes.txt",
            "--language",
            "kotlin",
            "-l",
            "js",
            "--on-collision",
            "reject",
            "--package",
            "com.example",
        ]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let overrides = args.overrides();
        assert_eq!(
            overrides.languages,
            vec![TargetLanguage::Kotlin, TargetLanguage::JavaScript]
        );
        assert_eq!(overrides.on_collision, Some(CollisionPolicy::Reject));
        assert_eq!(overrides.on_overflow, None);
        assert_eq!(overrides.package.as_deref(), Some("com.example"));
        assert!(overrides.output_dir.is_none());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::parse_from(["errgen", "languages", "--log-format", "json"]);
        assert!(matches!(cli.log_format, LogFormatArg::Json));
        assert!(matches!(cli.command, Command::Languages));
        assert_eq!(cli.log_config().format, LogFormat::Json);
    }

    #[test]
    fn explicit_log_level_disables_env_filter() {
        let cli = Cli::parse_from(["errgen", "--log-level", "debug", "languages"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);

        let cli = Cli::parse_from(["errgen", "languages"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
    }

    #[test]
    fn verbose_flag_raises_level() {
        let cli = Cli::parse_from(["errgen", "-vv", "--color", "never", "languages"]);
        let config = cli.log_config();
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.with_ansi);
    }

    #[test]
    fn timestamp_and_target_flags_reach_log_config() {
        let config = Cli::parse_from(["errgen", "languages"]).log_config();
        assert!(!config.with_timestamps);
        assert!(!config.with_target);

        let cli = Cli::parse_from(["errgen", "languages", "--log-timestamps", "--log-target"]);
        let config = cli.log_config();
        assert!(config.with_timestamps);
        assert!(config.with_target);
    }
}
