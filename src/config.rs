//! Application configuration loaded from environment variables.
//!
//! Sensitive fields should come from a secret management system in
//! production and must never be logged.

use envconfig::Envconfig;
use std::sync::LazyLock;

#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name the app is deployed to.
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Database connection string.
    /// Example: "sqlite:data/vet_connect.db"
    #[envconfig(default = "sqlite::memory:")]
    pub db_host: String,

    /// Host address for web server binding.
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding.
    #[envconfig(default = "5000")]
    pub web_server_port: u16,

    /// Base URL of the external identity provider the account store is
    /// mirrored to. Empty disables mirroring entirely.
    #[envconfig(default = "")]
    pub identity_mirror_url: String,

    /// 🔒 SENSITIVE: API key sent to the identity provider on every call.
    #[envconfig(default = "")]
    pub identity_mirror_api_key: String,
}

impl AppConfig {
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    pub fn mirror_enabled(&self) -> bool {
        !self.identity_mirror_url.is_empty()
    }
}

/// Global application configuration, validated on first access.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
