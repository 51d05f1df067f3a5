//! The main config loading module for lister.
//!
//! Handles loading and deserializing settings from `lister.toml` and writing a default
//! file for `lst --init`. A missing file means internal defaults; a broken file is
//! reported on stderr and also falls back to defaults.

use crate::config::{Display, General};

use serde::Deserialize;
use tracing::{debug, warn};

use std::path::{Path, PathBuf};
use std::{fs, io};

const DEFAULT_TOML: &str = r##"# lister.toml - default configuration for lister
#
# Every value below is the internal default.
# Flags given on the command line can turn these on, never off.

[general]
# recursive = false       # -R
# long_format = false     # -l
# show_hidden = false     # -a
# reverse = false         # -r
# sort_by_time = false    # -t

[display]
# color = true
# Names ("blue", "cyan", ...) or hex codes ("#RRGGBB")
# dir_color = "blue"
# symlink_color = "cyan"
"##;

/// Main configuration struct for lister.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    general: General,
    display: Display,
}

impl Config {
    /// Load configuration from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Self::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config file unreadable");
                eprintln!("Error reading config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::parse(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "config loaded");
                config
            }
            Err(e) => {
                eprintln!("Error parsing config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Determine the default configuration file path.
    /// Checks the LISTER_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to the platform config directory.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("LISTER_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("lister/lister.toml");
        }

        if let Some(config_dir) = dirs::config_dir() {
            return config_dir.join("lister/lister.toml");
        }
        PathBuf::from("lister.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {}", path.display()),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)
    }
}
