//! Application state shared across request handlers.

use std::path::PathBuf;

use masq_core::persona::PersonaStore;
use masq_interaction::GenerationService;

/// Read-only state built once at startup.
///
/// The persona store is immutable after load and the generation service is
/// stateless, so handlers share this behind an `Arc` with no further
/// coordination.
pub struct AppState {
    pub store: PersonaStore,
    pub service: GenerationService,
    pub images_dir: PathBuf,
}

impl AppState {
    pub fn new(store: PersonaStore, service: GenerationService, images_dir: PathBuf) -> Self {
        Self {
            store,
            service,
            images_dir,
        }
    }
}
