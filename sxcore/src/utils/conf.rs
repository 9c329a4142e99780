//! Runtime configuration.
//!
//! The configuration is a small TOML document. Every field is optional:
//!
//! ```toml
//! max_num_calls_in_print = 500
//! color = "never"
//! ```
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use termcolor::ColorChoice;

use crate::{
    magic::{DEFAULT_MAX_NUM_CALLS_IN_PRINT, ENV_CONFIG_PATH},
    print::set_max_num_calls_in_print,
    utils::error::{SxError, SxResult},
};

/// Whether terminal output is colored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SxConfig {
    /// Budget of expression visits for [`Display`](std::fmt::Display).
    pub max_num_calls_in_print: i64,
    pub color: ColorMode,
}

impl Default for SxConfig {
    fn default() -> Self {
        Self {
            max_num_calls_in_print: DEFAULT_MAX_NUM_CALLS_IN_PRINT,
            color: ColorMode::default(),
        }
    }
}

impl SxConfig {
    /// Parse a configuration from TOML text. `origin` names the source in errors.
    fn parse(toml_str: &str, origin: &str) -> SxResult<Self> {
        toml::from_str(toml_str).map_err(|e| SxError::ConfigParseError {
            source: e,
            file: origin.to_string(),
        })
    }

    pub fn from_toml_str(toml_str: &str) -> SxResult<Self> {
        Self::parse(toml_str, "<string>")
    }

    /// Load a configuration from a TOML file.
    pub fn load_from_toml(path: &Path) -> SxResult<Self> {
        let toml_str = std::fs::read_to_string(path)?;
        Self::parse(&toml_str, &path.display().to_string())
    }

    /// Load the file named by the `SX_CONFIG_PATH` environment variable, or the defaults
    /// when the variable is not set.
    pub fn from_env() -> SxResult<Self> {
        match std::env::var_os(ENV_CONFIG_PATH) {
            Some(path) => {
                debug!("Loading configuration from {}.", Path::new(&path).display());
                Self::load_from_toml(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    /// Install the process-wide settings.
    pub fn apply(&self) {
        debug!(
            "Setting the print budget to {} expression visit(s).",
            self.max_num_calls_in_print
        );
        set_max_num_calls_in_print(self.max_num_calls_in_print);
    }
}
