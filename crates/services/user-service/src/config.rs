//! User service configuration.

use std::env;

/// User service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserServiceConfig {
    /// Load the seed records at startup
    pub seed: bool,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed: env::var("USERS_SEED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
