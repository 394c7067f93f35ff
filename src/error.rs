//! Errors from the outer surfaces: config files and algorithm names.
//!
//! The distance functions themselves cannot fail. Every pair of finite
//! sequences has a distance, so nothing in `fuzzy` returns a `Result`.

use std::fmt;
use std::path::PathBuf;

/// Error loading or interpreting comparison settings.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config JSON is malformed or has wrongly typed fields.
    Parse {
        path: Option<PathBuf>,
        message: String,
    },
    /// Algorithm name not recognized.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {}", path.display(), source)
            }
            ConfigError::Parse {
                path: Some(path),
                message,
            } => {
                write!(f, "invalid config {}: {}", path.display(), message)
            }
            ConfigError::Parse {
                path: None,
                message,
            } => {
                write!(f, "invalid config: {}", message)
            }
            ConfigError::UnknownAlgorithm { name } => {
                write!(
                    f,
                    "unknown algorithm '{}' (expected 'levenshtein' or 'damerau-levenshtein')",
                    name
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
