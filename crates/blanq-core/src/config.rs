//! App Configuration
//!
//! Settings are bundled with the build as `config/app.json`. Missing keys
//! fall back to the defaults below.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::auth::Credential;
use crate::domain::DomainResult;

const EMBEDDED: &str = include_str!("../config/app.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub tagline: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self { name: "BLANQ CRM".to_string(), tagline: String::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub currency: String,
    pub locale: String,
    /// chrono format used in export file names and date columns
    pub date_format: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency: "CAD".to_string(),
            locale: "en-CA".to_string(),
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated round trip before a sign-in attempt resolves
    pub login_delay_ms: u32,
    pub credentials: Vec<Credential>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { login_delay_ms: 1500, credentials: Vec::new() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// `log` level name: error, warn, info, debug or trace
    pub level: String,
    /// Records kept in the in-memory ring buffer
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), capacity: 500 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand: BrandConfig,
    pub locale: LocaleConfig,
    pub auth: AuthConfig,
    /// Task assignees on the collaborative board
    pub partners: Vec<String>,
    /// Project assignees
    pub team_members: Vec<String>,
    /// Client names offered by the project form
    pub project_clients: Vec<String>,
    pub activity_capacity: usize,
    pub logger: LoggerConfig,
    /// Shared drive folders opened from the dashboard quick actions
    pub drive_folders: BTreeMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: BrandConfig::default(),
            locale: LocaleConfig::default(),
            auth: AuthConfig::default(),
            partners: vec!["You".to_string(), "Business Partner".to_string()],
            team_members: Vec::new(),
            project_clients: Vec::new(),
            activity_capacity: crate::activity::DEFAULT_CAPACITY,
            logger: LoggerConfig::default(),
            drive_folders: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration bundled with the build
    pub fn embedded() -> DomainResult<Self> {
        Self::from_json(EMBEDDED)
    }

    /// Embedded configuration, or defaults when it cannot be parsed
    pub fn load() -> Self {
        match Self::embedded() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load app config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.logger.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::domain::DomainError;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::embedded().unwrap();
        assert_eq!(config.auth.login_delay_ms, 1500);
        assert_eq!(config.auth.credentials.len(), 3);
        assert_eq!(config.auth.credentials[0].role, Role::Admin);
        assert_eq!(config.partners, vec!["You", "Business Partner"]);
        assert_eq!(config.locale.currency, "CAD");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = AppConfig::from_json(r#"{"activity_capacity": 5}"#).unwrap();
        assert_eq!(config.activity_capacity, 5);
        assert_eq!(config.auth.login_delay_ms, 1500);
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_bad_json_is_internal_error() {
        assert!(matches!(AppConfig::from_json("{"), Err(DomainError::Internal(_))));
    }
}
