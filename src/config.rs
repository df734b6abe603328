//! Configuration file support
//!
//! Settings live in a TOML file, by default `<config dir>/codepilot/config.toml`.
//! Every key is optional:
//!
//! ```toml
//! default_language = "python"
//! step_mode = true
//! autoplay_interval_ms = 750
//!
//! [engines]
//! node = "/usr/local/bin/node"
//! python = "python3"
//! timeout_secs = 10
//! ```

use crate::error::{PlaygroundError, Result};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Playground settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language used when neither the command line nor the file extension decides
    pub default_language: Language,
    /// Start in step mode
    pub step_mode: bool,
    /// Delay between steps while auto-playing
    pub autoplay_interval_ms: u64,
    /// Interpreter commands for run mode
    pub engines: EngineConfig,
}

/// Interpreter commands used by the host execution engines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub node: String,
    pub python: String,
    /// Seconds a program may run before it is killed
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_language: Language::JavaScript,
            step_mode: false,
            autoplay_interval_ms: 1000,
            engines: EngineConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            node: "node".to_string(),
            python: "python3".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("codepilot").join("config.toml"))
    }

    /// Load from the default location; a missing file yields the defaults
    pub fn load() -> Result<Self> {
        let Some(path) = Self::default_path() else {
            debug!("no platform config directory, using defaults");
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(text) => Self::parse(&text, &path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(PlaygroundError::ConfigRead { path, source }),
        }
    }

    /// Load from an explicit path; the file must exist
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PlaygroundError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse TOML text; `origin` is only used in error messages
    pub fn parse(text: &str, origin: &Path) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|source| PlaygroundError::ConfigParse {
            path: origin.to_path_buf(),
            source,
        })?;
        info!(path = %origin.display(), language = config.default_language.id(), "loaded config");
        Ok(config)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms.max(1))
    }
}
