//! Comparison settings read from a JSON file.
//!
//! ```json
//! {
//!   "algorithm": "damerau-levenshtein",
//!   "caseSensitive": false,
//!   "normalize": true,
//!   "limit": 10,
//!   "earlyExit": false
//! }
//! ```
//!
//! Every field is optional. Unknown fields are ignored so a config can be
//! shared with tools that read more settings than this crate does.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::fuzzy::DamerauOptions;
use crate::similarity::{Algorithm, SimilarityOptions, SimilarityResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareConfig {
    pub algorithm: Algorithm,
    #[serde(flatten)]
    pub options: SimilarityOptions,
    #[serde(flatten)]
    pub damerau: DamerauOptions,
}

impl CompareConfig {
    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Compare two strings with these settings.
    pub fn compare(&self, a: &str, b: &str) -> SimilarityResult {
        self.algorithm.build(self.damerau).compare(a, b, &self.options)
    }
}
