//! Client configuration: where requests go and whether to log them verbosely.
//!
//! The host is resolved through a function on every call so callers can
//! point a long-lived client at a host that changes (failover, test
//! servers on random ports) without rebuilding it.

use std::fmt;
use std::sync::Arc;

use crate::error::ConfigError;

/// Environment variable holding the API host, e.g. `https://api.example.com`.
pub const HOST_ENV: &str = "DRAFTS_API_HOST";
/// Environment variable enabling verbose request logging.
pub const DEBUG_ENV: &str = "DRAFTS_API_DEBUG";

type HostResolver = Arc<dyn Fn() -> String + Send + Sync>;

/// Immutable configuration injected into a `DraftClient`.
#[derive(Clone)]
pub struct ClientConfig {
    host: HostResolver,
    debug: bool,
}

impl ClientConfig {
    /// Configuration with a fixed host.
    pub fn new(host: impl Into<String>) -> Self {
        let host = host.into();
        Self::with_host_resolver(move || host.clone())
    }

    /// Configuration whose host is computed on every request.
    pub fn with_host_resolver<F>(resolver: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            host: Arc::new(resolver),
            debug: false,
        }
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Load from `DRAFTS_API_HOST` and `DRAFTS_API_DEBUG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV)
            .filter(|h| !h.is_empty())
            .ok_or(ConfigError::Missing(HOST_ENV))?;
        let debug = match lookup(DEBUG_ENV) {
            None => false,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: DEBUG_ENV,
                value,
            })?,
        };
        Ok(Self::new(host).debug(debug))
    }

    pub fn host(&self) -> String {
        (self.host)()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host())
            .field("debug", &self.debug)
            .finish()
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Some(false),
        "1" | "true" | "yes" | "on" => Some(true),
        _ => None,
    }
}
