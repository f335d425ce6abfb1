//! Application configuration management.

use serde::Deserialize;
use uuid::Uuid;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Identity configuration.
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Identity configuration for binaries that need a fixed current user.
///
/// Pulseboard does not implement authentication; identity arrives from an
/// external provider. Tools that run outside a provider (console, seeder)
/// take the user from configuration instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdentityConfig {
    /// ID of the user whose dashboard is fetched. Absent means signed out.
    pub user_id: Option<Uuid>,
    /// Email of the configured user.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name of the configured user.
    #[serde(default)]
    pub display_name: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PULSEBOARD").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
