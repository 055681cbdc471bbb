//! API key configuration.
//!
//! Supports reading the key file (`keys.json`) from an explicit path, the
//! working directory, or `~/.config/masq/keys.json`, with a
//! `GEMINI_API_KEY` environment variable fallback. A missing key disables
//! generation but never aborts startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use masq_core::error::{MasqError, Result};

/// Environment variable consulted when no key file is found.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Key file name looked up in the working directory.
const LOCAL_KEYS_FILE: &str = "keys.json";

/// Contents of the key file.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    pub gemini_api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl SecretConfig {
    /// Loads the configuration from a specific key file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            MasqError::io(format!(
                "Failed to read key file at {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: SecretConfig = serde_json::from_str(&content)?;

        if config.gemini_api_key.trim().is_empty() {
            return Err(MasqError::config(format!(
                "'gemini_api_key' is empty in {}",
                path.display()
            )));
        }

        Ok(config)
    }

    /// Builds the configuration from the `GEMINI_API_KEY` environment
    /// variable, if set and non-empty.
    pub fn from_env() -> Option<Self> {
        std::env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(|gemini_api_key| Self {
                gemini_api_key,
                model_name: None,
            })
    }

    /// Finds the API key, trying the explicit path, `./keys.json`,
    /// `~/.config/masq/keys.json`, and finally the environment.
    ///
    /// Returns `None` when nothing usable is found; the caller is expected
    /// to keep running with generation disabled.
    pub fn discover(explicit: Option<&Path>) -> Option<Self> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(path) = explicit {
            candidates.push(path.to_path_buf());
        }
        candidates.push(PathBuf::from(LOCAL_KEYS_FILE));
        if let Some(path) = default_config_path() {
            candidates.push(path);
        }

        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!("[Config] API key loaded from {}", path.display());
                    return Some(config);
                }
                Err(err) => {
                    tracing::warn!("[Config] Ignoring key file {}: {}", path.display(), err);
                }
            }
        }

        if let Some(config) = Self::from_env() {
            tracing::info!(
                "[Config] API key loaded from {} environment variable",
                GEMINI_API_KEY_ENV
            );
            return Some(config);
        }

        tracing::error!(
            "[Config] Gemini API key not found. Create {} with {{ \"gemini_api_key\": \"YOUR_API_KEY\" }} or set {}.",
            LOCAL_KEYS_FILE,
            GEMINI_API_KEY_ENV
        );
        None
    }
}

/// Returns the path to the user-level key file: ~/.config/masq/keys.json
fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("masq").join(LOCAL_KEYS_FILE))
}
