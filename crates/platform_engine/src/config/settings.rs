//! Application settings loaded from an optional TOML file

use std::path::Path;

use serde::Deserialize;

/// Window and timing settings
///
/// Missing file or missing fields fall back to defaults; a file that exists
/// but fails to parse is logged and ignored rather than aborting startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Target frame rate for the main loop
    pub target_fps: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            target_fps: 60.0,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => {
                log::debug!("no settings file at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match toml::from_str(&text) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("failed to parse {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_width, 640);
        assert_eq!(settings.window_height, 480);
        assert_eq!(settings.target_fps, 60.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("window_width = 800\n").unwrap();
        assert_eq!(settings.window_width, 800);
        assert_eq!(settings.window_height, 480);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_or_default("no/such/settings.toml");
        assert_eq!(settings.window_width, 640);
    }
}
