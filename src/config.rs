use std::env;

use crate::error::ConfigError;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8000;
const DATABASE_NAME: &str = "itinerix";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| HOST.to_string());
        let port: u16 = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(PORT);
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;
        let database_name = lookup("DATABASE_NAME")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DATABASE_NAME.to_string());

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
        })
    }
}

/// Reports whether each diagnostic variable is present, never its value.
pub fn env_flag(name: &str) -> &'static str {
    if env::var(name).map(|v| !v.is_empty()).unwrap_or(false) {
        "✅ Set"
    } else {
        "❌ Not Set"
    }
}
