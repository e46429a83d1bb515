//! Configuration: level layout files and application settings
//!
//! Two unrelated formats live here. Level layouts use a line-oriented
//! `key=value` text format consumed by scenes at startup; application
//! settings are an optional TOML file loaded at process start.

mod level;
mod settings;

pub use level::{ConfigError, LevelConfig};
pub use settings::Settings;
