pub mod error;
pub mod persona;

// Re-export common error type
pub use error::MasqError;
