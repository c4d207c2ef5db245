//! Command port settings.
//!
//! JSON shape (every key optional):
//! {
//!   "host": "127.0.0.1",
//!   "port": 7002,
//!   "connect_timeout_ms": 3000,
//!   "grace_ms": 100
//! }

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7002;
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3000;
/// Pause after the write so Maya starts reading before the socket closes.
/// Nothing guarantees this is long enough.
pub const DEFAULT_GRACE_MS: u64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("host must not be empty")]
    EmptyHost,
    #[error("connect timeout must be greater than zero")]
    ZeroConnectTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub connect_timeout_ms: u64,
    pub grace_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            grace_ms: DEFAULT_GRACE_MS,
        }
    }
}

impl Settings {
    pub fn from_json_file(path: &Path) -> Result<Self, SettingsError> {
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: display.clone(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: display,
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.host.trim().is_empty() {
            return Err(SettingsError::EmptyHost);
        }
        if self.connect_timeout_ms == 0 {
            return Err(SettingsError::ZeroConnectTimeout);
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    pub fn endpoint(&self) -> Endpoint<'_> {
        Endpoint {
            host: &self.host,
            port: self.port,
        }
    }
}

/// `host:port` for logs and error messages.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint<'a> {
    pub host: &'a str,
    pub port: u16,
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
