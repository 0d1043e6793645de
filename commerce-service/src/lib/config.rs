use std::env;

use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for commerce-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// Session token configuration.
///
/// The secret is never compiled in; it must come from a config file or `JWT__SECRET`.
#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl JwtConfig {
    /// Token lifetime.
    ///
    /// # Errors
    /// Returns error if `expiration_hours` is not positive or overflows a duration
    pub fn ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_hours(self.expiration_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .ok_or_else(|| {
                ConfigError::Message(format!(
                    "jwt.expiration_hours must be a positive number of hours, got {}",
                    self.expiration_hours
                ))
            })
    }
}

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Returns error if required configuration values are missing or invalid
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt(expiration_hours: i64) -> JwtConfig {
        JwtConfig {
            secret: "secret".to_string(),
            expiration_hours,
        }
    }

    #[test]
    fn test_jwt_ttl() {
        assert_eq!(jwt(24).ttl().unwrap(), Duration::hours(24));
    }

    #[test]
    fn test_jwt_ttl_rejects_out_of_range_values() {
        for hours in [0, -1, i64::MAX, i64::MIN] {
            assert!(
                matches!(jwt(hours).ttl(), Err(ConfigError::Message(_))),
                "{} hours should be rejected",
                hours
            );
        }
    }
}
