//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_FRONTEND_DIR: &str = "frontend";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {raw}")]
    Parse { key: &'static str, raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Generated images, served under `/output`.
    pub output_dir: PathBuf,
    /// Legacy static assets, served under `/static`.
    pub frontend_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            frontend_dir: PathBuf::from(DEFAULT_FRONTEND_DIR),
        }
    }
}

impl ServerConfig {
    /// Read `PORT`, `OUTPUT_DIR` and `FRONTEND_DIR`, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `PORT` is set but not a valid port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Parse { key: "PORT", raw })?,
            Err(_) => DEFAULT_PORT,
        };
        let dir = |key: &str, default: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| PathBuf::from(default), PathBuf::from)
        };
        Ok(Self {
            port,
            output_dir: dir("OUTPUT_DIR", DEFAULT_OUTPUT_DIR),
            frontend_dir: dir("FRONTEND_DIR", DEFAULT_FRONTEND_DIR),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
