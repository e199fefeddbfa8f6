//! Application configuration loaded from environment variables.

use std::fmt;

use serde::Deserialize;

use crate::error::{CatalogError, Result};

/// Application configuration loaded from environment variables.
#[derive(Clone, Deserialize)]
pub struct Config {
    // === Admin Portal ===
    /// Password for the `admin` user on the admin page.
    pub admin_password: String,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load configuration from an explicit set of `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.admin_password.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "ADMIN_PASSWORD is required".to_string(),
            ));
        }

        Ok(())
    }
}

// The admin password must never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("admin_password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}
