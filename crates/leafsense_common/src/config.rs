//! User configuration
//!
//! Config file: $LEAFSENSE_CONFIG or ~/.config/leafsense/config.toml.
//! A missing file yields defaults; a present file fills in whatever it
//! sets and defaults the rest.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Farm location used for weather lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    /// Optional human-readable label shown instead of coordinates
    #[serde(default)]
    pub label: Option<String>,
}

// Default location: Bengaluru, a reasonable stand-in until the user
// configures their farm
fn default_latitude() -> f64 {
    12.97
}

fn default_longitude() -> f64 {
    77.59
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            label: None,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeafsenseConfig {
    #[serde(default)]
    pub location: LocationConfig,
    /// Override for the data directory holding the SQLite store
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl LeafsenseConfig {
    /// Discover the config path
    ///
    /// Priority:
    /// 1. $LEAFSENSE_CONFIG (explicit override)
    /// 2. $XDG_CONFIG_HOME/leafsense/config.toml
    /// 3. ~/.config/leafsense/config.toml
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("LEAFSENSE_CONFIG") {
            return Some(PathBuf::from(path));
        }
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join("leafsense/config.toml"));
        }
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".config/leafsense/config.toml"));
        }
        None
    }

    /// Load from the discovered path, defaulting when absent
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Database path: configured data dir, else ~/.local/share/leafsense
    pub fn database_path(&self) -> PathBuf {
        let data_dir = self.data_dir.clone().unwrap_or_else(|| {
            if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
                PathBuf::from(xdg).join("leafsense")
            } else if let Ok(home) = std::env::var("HOME") {
                PathBuf::from(home).join(".local/share/leafsense")
            } else {
                PathBuf::from(".")
            }
        });
        data_dir.join("leafsense.db")
    }

    /// Display label for the configured location
    pub fn location_label(&self) -> String {
        self.location.label.clone().unwrap_or_else(|| {
            format!("{:.2}, {:.2}", self.location.latitude, self.location.longitude)
        })
    }
}
