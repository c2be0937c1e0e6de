//! Configuration management for carewheel
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/carewheel/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::carousel::SWIPE_THRESHOLD;

/// Site opened when the games option is selected
pub const DEFAULT_GAMES_URL: &str = "https://www.gamearter.com/game/evo-f4/";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown in the header
    pub title: String,
    /// URL opened by the games option
    pub games_url: String,
    pub theme: ThemeName,
    /// Master switch for the buzzer
    pub sound_enabled: bool,
    /// Horizontal travel, in cells, before a gesture counts as a swipe
    pub swipe_threshold: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: String::from("CareHub"),
            games_url: String::from(DEFAULT_GAMES_URL),
            theme: ThemeName::Midnight,
            sound_enabled: true,
            swipe_threshold: SWIPE_THRESHOLD,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("carewheel");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Midnight,
    HighContrast,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Midnight => "Midnight",
            ThemeName::HighContrast => "High contrast",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Midnight => ThemeName::HighContrast,
            ThemeName::HighContrast => ThemeName::Midnight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title, "CareHub");
        assert_eq!(config.games_url, DEFAULT_GAMES_URL);
        assert_eq!(config.theme, ThemeName::Midnight);
        assert!(config.sound_enabled);
        assert_eq!(config.swipe_threshold, 50);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("title = \"Ward 3\"").unwrap();
        assert_eq!(config.title, "Ward 3");
        assert_eq!(config.games_url, DEFAULT_GAMES_URL);
        assert!(config.sound_enabled);
    }

    #[test]
    fn test_theme_cycle() {
        let theme = ThemeName::Midnight;
        assert_eq!(theme.next(), ThemeName::HighContrast);
        assert_eq!(theme.next().next(), ThemeName::Midnight);
    }
}
