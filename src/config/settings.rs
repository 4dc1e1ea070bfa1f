use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::container::{SealOptions, MIN_PASSWORD_LEN};
use crate::errors::{FileSealError, Result};

/// Project-level configuration, loaded from `.fileseal.toml`.
///
/// Every field has a sensible default so FileSeal works out-of-the-box
/// without any config file at all.  KDF parameters are deliberately not
/// here: they are fixed by the container format version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Minimum password length when sealing (default: 8).
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,

    /// File extension for sealed containers, without the dot (default: "fs").
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Name sealed containers with a random 12-hex-digit stem instead of
    /// the original file name (default: true).
    #[serde(default = "default_opaque_names")]
    pub opaque_names: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_min_password_len() -> usize {
    MIN_PASSWORD_LEN
}

fn default_extension() -> String {
    "fs".to_string()
}

fn default_opaque_names() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_password_len: default_min_password_len(),
            extension: default_extension(),
            opaque_names: default_opaque_names(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".fileseal.toml";

    /// Load settings from `<dir>/.fileseal.toml`.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            FileSealError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        let bad_char = |c: char| matches!(c, '/' | '\\' | '.');
        if settings.extension.is_empty() || settings.extension.contains(bad_char) {
            return Err(FileSealError::ConfigError(format!(
                "extension '{}' must be a bare suffix like \"fs\"",
                settings.extension
            )));
        }

        Ok(settings)
    }

    /// Build the output path for a sealed container.
    ///
    /// `stem` is either the original file name or a random opaque stem,
    /// decided by the caller from `opaque_names`.
    pub fn container_path(&self, dir: &Path, stem: &str) -> PathBuf {
        dir.join(format!("{stem}.{}", self.extension))
    }

    /// Convert the settings into sealer options.
    pub fn seal_options(&self) -> SealOptions {
        SealOptions {
            min_password_len: self.min_password_len,
            ..SealOptions::default()
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
