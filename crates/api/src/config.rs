//! API server configuration.

use std::env;

use common::{ServiceConfig, DEFAULT_HOST, DEFAULT_LOG_LEVEL, DEFAULT_PORT};
use user_service_lib::config::UserServiceConfig;

/// API server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address, port and log level
    pub service: ServiceConfig,
    /// User directory settings
    pub users: UserServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            service: ServiceConfig {
                service_name: env::var("SERVICE_NAME")
                    .unwrap_or_else(|_| ServiceConfig::default().service_name),
                host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                log_level: env::var("LOG_LEVEL")
                    .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            },
            users: UserServiceConfig::from_env(),
        }
    }

    /// Full `host:port` bind address.
    pub fn addr(&self) -> String {
        self.service.addr()
    }
}
