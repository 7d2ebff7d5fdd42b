//! CLI configuration: a small YAML file plus command-line overrides.
//!
//! ```yaml
//! color: auto    # auto | always | never
//! format: text   # text | json
//! ```
//!
//! A missing default file means defaults. A missing file that was named
//! explicitly with `--config`, or a file that does not parse, is an error.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use termcolor::ColorChoice;

use crate::errors::PrettyError;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pretty.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the stream is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves to a termcolor choice for stdout.
    pub fn choice(&self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per command.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub color: ColorMode,
    pub format: OutputFormat,
}

impl Config {
    /// Parses a YAML document. An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Config, PrettyError> {
        if text.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(text).map_err(|e| PrettyError::config("invalid configuration", e))
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_FILE`] if present, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Config, PrettyError> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            return Ok(Config::default());
        }
        let text = fs::read_to_string(path)
            .map_err(|e| PrettyError::io(format!("cannot read {}", path.display()), e))?;
        Config::from_yaml(&text)
    }

    /// Applies command-line flags on top of the file values.
    pub fn with_overrides(mut self, color: Option<ColorMode>, format: Option<OutputFormat>) -> Config {
        if let Some(color) = color {
            self.color = color;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
