//! TOML configuration for the link layer and the diagnostic sender.
//!
//! Every field carries a serde default so a partial file – or no file at
//! all – yields a working configuration. The connect timeout defaults to
//! 400 ms: generous for the same-LAN peers this link targets, short enough
//! that a dead address fails fast and the UI can offer a retry.

use std::path::Path;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Link-layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkConfig {
    /// Peer host the diagnostic sender connects to.
    #[serde(default = "default_peer_host")]
    pub peer_host: String,
    /// Peer TCP port carrying the 32-byte snapshot stream.
    #[serde(default = "default_peer_port")]
    pub peer_port: u16,
    /// Bound on every connect attempt, in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Cadence of the diagnostic sender's snapshot stream, in milliseconds.
    #[serde(default = "default_send_interval_ms")]
    pub send_interval_ms: u64,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_peer_host() -> String {
    "127.0.0.1".to_string()
}
fn default_peer_port() -> u16 {
    24810
}
fn default_connect_timeout_ms() -> u64 {
    400
}
fn default_send_interval_ms() -> u64 {
    66 // ~15 snapshots/sec
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            peer_host: default_peer_host(),
            peer_port: default_peer_port(),
            connect_timeout_ms: default_connect_timeout_ms(),
            send_interval_ms: default_send_interval_ms(),
            log_level: default_log_level(),
        }
    }
}

impl LinkConfig {
    /// The connect timeout as a [`Duration`].
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// The diagnostic sender's cadence as a [`Duration`].
    pub fn send_interval(&self) -> Duration {
        Duration::from_millis(self.send_interval_ms)
    }

    /// Loads the configuration from `path`, returning `LinkConfig::default()`
    /// when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] for file-system errors other than
    /// "not found", and [`ConfigError::Parse`] if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
