//! HTTP surface for the MASQ persona chat demo.
//!
//! Serves the interactive page at `/`, a health check at `/health`, and the
//! small JSON API the page calls.

pub mod routes;
pub mod settings;
pub mod state;
pub mod ui;

pub use settings::ServerSettings;
pub use state::AppState;
