//! Generation settings from a TOML file merged with command-line overrides.
//!
//! Precedence: command-line flag, then config file, then built-in default.
//!
//! ```toml
//! [generate]
//! output_dir = "generated"
//! languages = ["go", "kotlin"]
//! package = "com.example.errors"
//! on_collision = "reject"
//! on_overflow = "ignore"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use errgen_model::{BuildOptions, CollisionPolicy, OverflowPolicy};
use errgen_render::{RenderOptions, TargetLanguage};

/// Output root when neither the flag nor the file names one.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Input path meaning standard input.
pub const STDIN_PATH: &str = "-";

/// Parsed config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub generate: GenerateSettings,
}

/// The `[generate]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateSettings {
    pub output_dir: Option<PathBuf>,
    pub languages: Vec<TargetLanguage>,
    pub package: Option<String>,
    pub on_collision: Option<CollisionPolicy>,
    pub on_overflow: Option<OverflowPolicy>,
}

impl ConfigFile {
    /// Load a config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values given on the command line. `None`/empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub output_dir: Option<PathBuf>,
    pub languages: Vec<TargetLanguage>,
    pub package: Option<String>,
    pub on_collision: Option<CollisionPolicy>,
    pub on_overflow: Option<OverflowPolicy>,
}

/// Where the input rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == STDIN_PATH {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub input: InputSource,
    pub output_dir: PathBuf,
    pub languages: Vec<TargetLanguage>,
    pub build: BuildOptions,
    pub render: RenderOptions,
    /// Render and report without writing files.
    pub dry_run: bool,
}

impl GenerateConfig {
    /// Settings for `input` with every default applied.
    pub fn new(input: InputSource) -> Self {
        Self::resolve(input, &ConfigFile::default(), Overrides::default(), false)
    }

    /// Merge command-line overrides over the config file over defaults.
    pub fn resolve(
        input: InputSource,
        file: &ConfigFile,
        overrides: Overrides,
        dry_run: bool,
    ) -> Self {
        let settings = &file.generate;
        let output_dir = overrides
            .output_dir
            .or_else(|| settings.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let mut languages = if overrides.languages.is_empty() {
            settings.languages.clone()
        } else {
            overrides.languages
        };
        if languages.is_empty() {
            languages.push(TargetLanguage::Go);
        }
        languages.sort();
        languages.dedup();

        let build = BuildOptions::default()
            .with_collision_policy(
                overrides
                    .on_collision
                    .or(settings.on_collision)
                    .unwrap_or_default(),
            )
            .with_overflow_policy(
                overrides
                    .on_overflow
                    .or(settings.on_overflow)
                    .unwrap_or_default(),
            );
        let render = RenderOptions::default()
            .with_package(overrides.package.or_else(|| settings.package.clone()));

        Self {
            input,
            output_dir,
            languages,
            build,
            render,
            dry_run,
        }
    }
}
