//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default port the HTTP server listens on
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default tracing filter
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Full `host:port` bind address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "users-api".to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
