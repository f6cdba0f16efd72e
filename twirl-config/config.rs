use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::colors::SpinColor;
use crate::errors::ConfigError;
use crate::frames;

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "twirl";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Resolved spinners configuration.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_frames")]
    pub frames: Vec<String>,

    #[serde(default = "default_interval")]
    pub interval: u64,

    #[serde(default = "default_indent")]
    pub indent: String,

    #[serde(default)]
    pub clear_on_complete: bool,

    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_incomplete_color")]
    pub incomplete_color: SpinColor,

    #[serde(default = "default_success_color")]
    pub success_color: SpinColor,

    #[serde(default = "default_error_color")]
    pub error_color: SpinColor,

    #[serde(default = "default_success_symbol")]
    pub success_symbol: String,

    #[serde(default = "default_error_symbol")]
    pub error_symbol: String,
}

fn default_frames() -> Vec<String> {
    frames::owned(frames::LINE)
}

fn default_interval() -> u64 {
    80
}

fn default_indent() -> String {
    "  ".to_owned()
}

fn default_incomplete_color() -> SpinColor {
    SpinColor::new(Color::Blue)
}

fn default_success_color() -> SpinColor {
    SpinColor::new(Color::Green)
}

fn default_error_color() -> SpinColor {
    SpinColor::new(Color::Red)
}

fn default_success_symbol() -> String {
    "✓".to_owned()
}

fn default_error_symbol() -> String {
    "✖".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            interval: default_interval(),
            indent: default_indent(),
            clear_on_complete: false,
            debug: false,
            incomplete_color: default_incomplete_color(),
            success_color: default_success_color(),
            error_color: default_error_color(),
            success_symbol: default_success_symbol(),
            error_symbol: default_error_symbol(),
        }
    }
}

impl Config {
    /// Builds configuration from the defaults overlaid with the provided options.
    pub fn with_options(options: Options) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(preset) = options.preset.as_deref() {
            config.frames = frames::preset(preset)?;
        }

        if let Some(frames) = options.frames {
            config.frames = frames;
        }

        if let Some(interval) = options.interval {
            config.interval = interval;
        }

        if let Some(indent) = options.indent {
            config.indent = indent;
        }

        if let Some(clear_on_complete) = options.clear_on_complete {
            config.clear_on_complete = clear_on_complete;
        }

        if let Some(debug) = options.debug {
            config.debug = debug;
        }

        if let Some(incomplete_color) = options.incomplete_color {
            config.incomplete_color = incomplete_color;
        }

        if let Some(success_color) = options.success_color {
            config.success_color = success_color;
        }

        if let Some(error_color) = options.error_color {
            config.error_color = error_color;
        }

        if let Some(success_symbol) = options.success_symbol {
            config.success_symbol = success_symbol;
        }

        if let Some(error_symbol) = options.error_symbol {
            config.error_symbol = error_symbol;
        }

        config.validate()?;

        Ok(config)
    }

    /// Returns the refresh interval as a [`Duration`].
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.interval)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.interval == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        if self.frames.is_empty() {
            return Err(ConfigError::NoFrames);
        }

        if self.frames.iter().any(String::is_empty) {
            return Err(ConfigError::EmptyFrame);
        }

        Ok(())
    }
}

/// Optional overrides applied over the default configuration.\
/// Unknown or mistyped keys fail deserialization.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Options {
    pub frames: Option<Vec<String>>,
    pub preset: Option<String>,
    pub interval: Option<u64>,
    pub indent: Option<String>,
    pub clear_on_complete: Option<bool>,
    pub debug: Option<bool>,
    pub incomplete_color: Option<SpinColor>,
    pub success_color: Option<SpinColor>,
    pub error_color: Option<SpinColor>,
    pub success_symbol: Option<String>,
    pub error_symbol: Option<String>,
}

impl Options {
    /// Parses options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Overlays `other` on top of these options, fields from `other` win when both are set.
    pub fn merged(self, other: Options) -> Options {
        Options {
            frames: other.frames.or(self.frames),
            preset: other.preset.or(self.preset),
            interval: other.interval.or(self.interval),
            indent: other.indent.or(self.indent),
            clear_on_complete: other.clear_on_complete.or(self.clear_on_complete),
            debug: other.debug.or(self.debug),
            incomplete_color: other.incomplete_color.or(self.incomplete_color),
            success_color: other.success_color.or(self.success_color),
            error_color: other.error_color.or(self.error_color),
            success_symbol: other.success_symbol.or(self.success_symbol),
            error_symbol: other.error_symbol.or(self.error_symbol),
        }
    }
}
