//! Server settings resolved from the environment.

use std::env;
use std::path::PathBuf;

/// Port the original demo served on; kept as the default.
const DEFAULT_PORT: u16 = 7860;

const DEFAULT_PERSONAS_FILE: &str = "personas.json";
const DEFAULT_IMAGES_DIR: &str = "images";

/// Runtime configuration for the server binary.
///
/// Everything is optional with local-file defaults, so `cargo run` works
/// from a checkout with no setup beyond the key file.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
    pub personas_file: PathBuf,
    pub images_dir: PathBuf,
    pub keys_file: Option<PathBuf>,
}

impl ServerSettings {
    /// Reads `MASQ_PORT`, `MASQ_PERSONAS_FILE`, `MASQ_IMAGES_DIR`, and
    /// `MASQ_KEYS_FILE`, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("MASQ_PORT").ok()),
            personas_file: env::var_os("MASQ_PERSONAS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PERSONAS_FILE)),
            images_dir: env::var_os("MASQ_IMAGES_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR)),
            keys_file: env::var_os("MASQ_KEYS_FILE").map(PathBuf::from),
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    match raw {
        Some(value) => match value.parse() {
            Ok(port) => port,
            Err(_) => {
                tracing::warn!(
                    "[Settings] Invalid MASQ_PORT value '{}', using {}",
                    value,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }
        },
        None => DEFAULT_PORT,
    }
}
