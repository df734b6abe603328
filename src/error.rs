//! Error types for the playground
//!
//! [`PlaygroundError`] covers everything that can go wrong outside the
//! simulator core: reading source files, loading configuration, resolving a
//! language name and installing the log subscriber.
//!
//! The step generator and the session player never fail. Unrecognised source
//! degrades to fewer steps and advancing past the end is a no-op, so neither
//! returns a `Result`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the playground library
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// Reading a source file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`]
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A language name that none of the simulators recognise
    #[error("unknown language `{0}` (expected one of: cpp, java, csharp, javascript, python)")]
    UnknownLanguage(String),

    /// The tracing subscriber could not be installed
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, PlaygroundError>;
