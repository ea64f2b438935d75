//! Settings shared by the example binaries.
//!
//! Every binary reads an optional TOML file named by `PATTERNS_CONFIG`.
//! Missing files and missing keys fall back to the defaults:
//!
//! ```toml
//! log_level = "info"
//! race_threads = 8
//! color = true
//! ```

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

const MIN_RACE_THREADS: usize = 1;
const MAX_RACE_THREADS: usize = 256;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub log_level: String,
    /// Threads released together on a singleton's first access.
    pub race_threads: usize,
    pub color: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            race_threads: 8,
            color: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        Self::from_toml_str(&content)
    }

    /// Like [`DemoConfig::load`], but a file that does not exist means defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV);
        Self::load_or_default(path.as_deref().map(Path::new))
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_RACE_THREADS..=MAX_RACE_THREADS).contains(&self.race_threads) {
            return Err(PatternError::OutOfRange {
                field: "race_threads",
                value: self.race_threads,
                min: MIN_RACE_THREADS,
                max: MAX_RACE_THREADS,
            });
        }
        Ok(())
    }

    /// Applies the `color` switch to all `colored` output.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
