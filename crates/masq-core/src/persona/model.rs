//! Persona domain model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A persona with a hidden backstory and an optional portrait.
///
/// The backstory is injected into the prompt template and never shown to the
/// user directly. The portrait path is relative to the configured image
/// directory.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Persona {
    /// Display name, unique within the store
    pub name: String,
    /// Free-text biography woven into generated replies
    pub backstory: String,
    /// Relative path of the portrait image, if any
    #[serde(default)]
    pub image: Option<String>,
}

impl Persona {
    /// Resolves the portrait path against `base_dir`.
    ///
    /// Returns the canonical path only when the persona declares an image,
    /// the file exists, and the path does not escape `base_dir`.
    pub fn resolve_image(&self, base_dir: &Path) -> Option<PathBuf> {
        let relative = self.image.as_deref()?;

        let base = match base_dir.canonicalize() {
            Ok(base) => base,
            Err(_) => {
                tracing::debug!(
                    "[Persona] Image directory does not exist: {}",
                    base_dir.display()
                );
                return None;
            }
        };

        let candidate = match base.join(relative).canonicalize() {
            Ok(candidate) => candidate,
            Err(_) => {
                tracing::warn!(
                    "[Persona] Image path set for '{}' but file not found: {}",
                    self.name,
                    base.join(relative).display()
                );
                return None;
            }
        };

        // A relative path with ".." components could leave the image
        // directory after joining.
        if !candidate.starts_with(&base) {
            tracing::warn!(
                "[Persona] Image path for '{}' escapes the image directory: {}",
                self.name,
                relative
            );
            return None;
        }

        candidate.is_file().then_some(candidate)
    }
}
