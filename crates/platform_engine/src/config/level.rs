//! Level configuration loader
//!
//! Parses the line-oriented `key=value` format that defines a level's enemy
//! and food roster. Lines beginning with `#` or `;` are comments, blank lines
//! are ignored, and lines without an `=` are skipped. Keys are arbitrary
//! strings; values must parse as integers — a value that does not is a fatal
//! parse failure, the one error in the engine with no recovery path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Level configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A value failed integer parsing
    #[error("invalid integer value {value:?} for key {key:?} on line {line}")]
    InvalidValue {
        /// The key whose value failed to parse
        key: String,
        /// The offending value text
        value: String,
        /// 1-based line number
        line: usize,
    },
}

/// Parsed level configuration: a flat map of integer-valued keys
#[derive(Debug, Default, Clone)]
pub struct LevelConfig {
    values: HashMap<String, i32>,
}

impl LevelConfig {
    /// Load and parse a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse configuration text
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim_end_matches('\r');
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let parsed = value.trim().parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                line: index + 1,
            })?;
            values.insert(key.to_string(), parsed);
        }

        Ok(Self { values })
    }

    /// Look up a single value
    pub fn get(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    /// Number of parsed entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the configuration is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Collect the placements for a key family, e.g. `enemy` or `food`
    ///
    /// Reads `{prefix}{N}_x` / `{prefix}{N}_y` for N = 1, 2, 3, … and stops
    /// at the first N whose `_x` key is missing. A present `_x` with a
    /// missing `_y` defaults that coordinate to 0.
    pub fn placements(&self, prefix: &str) -> Vec<(f32, f32)> {
        let mut out = Vec::new();
        for n in 1.. {
            let Some(x) = self.get(&format!("{prefix}{n}_x")) else {
                break;
            };
            let y = self.get(&format!("{prefix}{n}_y")).unwrap_or(0);
            out.push((x as f32, y as f32));
        }
        out
    }

    /// Test-friendly constructor from key/value pairs
    pub fn from_pairs(pairs: &[(&str, i32)]) -> Self {
        Self {
            values: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }
}
