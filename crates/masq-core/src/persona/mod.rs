//! Persona domain model and store.
//!
//! Personas are named backstories, each with an optional portrait image,
//! used to color generated replies. The whole set is loaded once at startup
//! from a static JSON file and is immutable afterwards.

pub mod model;
pub mod store;

pub use model::Persona;
pub use store::PersonaStore;
