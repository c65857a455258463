//! Application settings and paths.
//!
//! Manages the XDG-compliant configuration directory and the settings file
//! stored in it.

use crate::error::{ConfigError, ConfigResult};
use crate::output::OutputFormat;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Global paths singleton.
static PATHS: OnceLock<Paths> = OnceLock::new();

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/dialargs)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Get the global paths instance, creating the directories on first use.
    pub fn get() -> ConfigResult<&'static Paths> {
        if let Some(paths) = PATHS.get() {
            return Ok(paths);
        }
        let paths = Self::new()?;
        Ok(PATHS.get_or_init(|| paths))
    }

    fn new() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "dialargs", "dialargs")
            .ok_or(ConfigError::DirectoryNotFound)?;

        let paths = Self {
            config_dir: project.config_dir().to_path_buf(),
        };

        fs::create_dir_all(&paths.config_dir)?;

        Ok(paths)
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Output format used when a command does not specify one.
    pub default_output_format: OutputFormat,
    /// Enable verbose logging by default.
    pub verbose: bool,
    /// Colorize plain output.
    pub color: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_output_format: OutputFormat::Plain,
            verbose: false,
            color: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// A missing settings file yields the defaults.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::get()?.settings_file();

        if !file.exists() {
            debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location, returning the file written.
    pub fn save(&self) -> ConfigResult<PathBuf> {
        let file = Paths::get()?.settings_file();
        self.save_to(&file)?;
        Ok(file)
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let write_failed = |e: std::io::Error| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_failed)?;
        }
        fs::write(path, content).map_err(write_failed)
    }
}
