use crate::parser::{MAX_INDENT_WIDTH, MAX_LEVEL, RenderOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub contents: ContentsConfig,
}

/// How generated contents are rendered and printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsConfig {
    /// Spaces per nesting level (default: 4)
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Deepest heading level listed, 1-6 (default: 6)
    #[serde(default = "default_max_level")]
    pub max_level: usize,

    /// Print the original document after the contents (default: true)
    #[serde(default = "default_print_source")]
    pub print_source: bool,
}

impl Default for ContentsConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            max_level: default_max_level(),
            print_source: default_print_source(),
        }
    }
}

fn default_indent_width() -> usize {
    crate::parser::DEFAULT_INDENT_WIDTH
}

fn default_max_level() -> usize {
    MAX_LEVEL
}

fn default_print_source() -> bool {
    true
}

/// Errors that can occur while saving configuration
#[derive(Debug)]
pub enum ConfigError {
    /// No platform config directory could be determined
    NoConfigDir,
    Io(io::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(e) => write!(f, "Failed to write config: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::NoConfigDir => None,
            ConfigError::Io(e) => Some(e),
            ConfigError::Serialize(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/mdcontents/config.toml
    /// - Linux: ~/.config/mdcontents/config.toml
    /// - Windows: %APPDATA%/mdcontents/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mdcontents").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from `path`; missing or malformed files give the default
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }
        }
    }

    /// Save config to the platform config path
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating its parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Rendering options with `max_level` clamped to 1-6 and `indent_width`
    /// to at most 16
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            indent_width: self.contents.indent_width.min(MAX_INDENT_WIDTH),
            max_level: self.contents.max_level.clamp(1, MAX_LEVEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.contents.indent_width, 4);
        assert_eq!(config.contents.max_level, 6);
        assert!(config.contents.print_source);
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[contents]\nindent_width = 2\n").unwrap();
        assert_eq!(config.contents.indent_width, 2);
        assert_eq!(config.contents.max_level, 6);
        assert!(config.contents.print_source);

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_render_options_clamps_max_level() {
        let mut config = Config::default();
        config.contents.max_level = 0;
        assert_eq!(config.render_options().max_level, 1);
        config.contents.max_level = 9;
        assert_eq!(config.render_options().max_level, 6);
    }

    #[test]
    fn test_render_options_caps_indent_width() {
        let config: Config =
            toml::from_str("[contents]\nindent_width = 1000000000\n").unwrap();
        assert_eq!(config.render_options().indent_width, MAX_INDENT_WIDTH);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.contents.indent_width = 2;
        config.contents.print_source = false;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "contents = [not valid").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
        assert_eq!(
            Config::load_from(&dir.path().join("missing.toml")),
            Config::default()
        );
    }
}
