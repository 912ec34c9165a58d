//! Configuration for RRP sessions
//!
//! Connection parameters, validated before any I/O happens.

use std::time::Duration;

use crate::error::{Result, RrpError};

/// Well-known RRP server port
pub const DEFAULT_PORT: u16 = 648;

/// Connection parameters for a [`Session`](crate::Session)
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RRP server hostname or IP address
    pub host: String,

    /// RRP server port
    pub port: u16,

    /// Idle-read timeout. `None` lets a receive block indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
            timeout: None,
        }
    }
}

impl SessionConfig {
    /// Create a config for the given server with no idle-read timeout
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: None,
        }
    }

    /// Set the idle-read timeout in whole seconds. Zero disables it.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self
    }

    /// Set the idle-read timeout directly. `Duration::ZERO` disables it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(RrpError::InvalidArgument("host must not be empty"));
        }
        Ok(())
    }
}
