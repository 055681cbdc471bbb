//! Persona store.
//!
//! Loads the persona map from a static JSON file of the form
//! `{ "<name>": { "backstory": "...", "image": "..." }, ... }` and exposes
//! lookup by name. Loading fails softly: a missing or malformed file yields
//! an empty store, and invalid entries are skipped individually.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::model::Persona;
use crate::error::{MasqError, Result};

/// Raw persona entry as it appears in the JSON file, before validation.
#[derive(Debug, Deserialize)]
struct RawPersona {
    #[serde(default)]
    backstory: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

/// Read-only collection of personas keyed by name.
///
/// Names are ordered alphabetically, which keeps the listing and the default
/// persona deterministic across runs.
#[derive(Debug, Default, Clone)]
pub struct PersonaStore {
    personas: BTreeMap<String, Persona>,
}

impl PersonaStore {
    /// Loads the store from `path`, degrading to an empty store on failure.
    ///
    /// Entries without a non-empty `backstory` are dropped with a warning;
    /// the rest of the file still loads.
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(store) => {
                tracing::info!(
                    "[PersonaStore] Loaded {} personas from {}",
                    store.len(),
                    path.display()
                );
                store
            }
            Err(err) => {
                tracing::error!(
                    "[PersonaStore] Failed to load personas from {}: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MasqError::not_found(
                "persona file",
                path.display().to_string(),
            ));
        }

        let content = fs::read_to_string(path)?;
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&content)?;

        let mut personas = BTreeMap::new();
        for (name, value) in raw {
            let entry: RawPersona = match serde_json::from_value(value) {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("[PersonaStore] Skipping persona '{}': {}", name, err);
                    continue;
                }
            };

            let Some(backstory) = entry.backstory.filter(|b| !b.trim().is_empty()) else {
                tracing::warn!(
                    "[PersonaStore] Skipping persona '{}': missing or empty 'backstory'",
                    name
                );
                continue;
            };

            personas.insert(
                name.clone(),
                Persona {
                    name,
                    backstory,
                    image: entry.image,
                },
            );
        }

        Ok(Self { personas })
    }

    /// Builds a store from already-validated personas. Mainly used by tests
    /// and callers that assemble personas programmatically.
    pub fn from_personas(personas: impl IntoIterator<Item = Persona>) -> Self {
        Self {
            personas: personas
                .into_iter()
                .map(|persona| (persona.name.clone(), persona))
                .collect(),
        }
    }

    /// Looks up a persona by name.
    pub fn lookup(&self, name: &str) -> Option<&Persona> {
        self.personas.get(name)
    }

    /// Looks up a persona by name, returning a typed error when absent.
    pub fn get(&self, name: &str) -> Result<&Persona> {
        self.lookup(name)
            .ok_or_else(|| MasqError::not_found("persona", name))
    }

    /// Returns persona names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.personas.keys().map(String::as_str)
    }

    /// Iterates over personas in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.values()
    }

    /// The persona selected by default: the first one in name order.
    pub fn default_persona(&self) -> Option<&Persona> {
        self.personas.values().next()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
