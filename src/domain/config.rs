//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix connection, the admin identity, the
//! recommendation threshold and the initial facility list.

use crate::domain::facility::{Facility, Registry};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    pub system: SystemConfig,
    #[serde(default)]
    pub recommendation: RecommendationConfig,
    #[serde(default)]
    pub facilities: Vec<Facility>,
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    /// The single sender allowed to change occupancy (a Matrix user id).
    pub admin: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_log_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationConfig {
    /// Near-tie margin, in percentage points.
    #[serde(default = "default_threshold")]
    pub threshold_percent: f64,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            threshold_percent: default_threshold(),
        }
    }
}

fn default_threshold() -> f64 {
    2.0
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("duplicate facility id `{0}`")]
    DuplicateFacility(String),
    #[error("threshold_percent must be a finite non-negative number, got {0}")]
    InvalidThreshold(f64),
    #[error("system.admin must not be empty")]
    MissingAdmin,
}

impl AppConfig {
    /// Reads, parses and validates the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: AppConfig = serde_yaml::from_str(content).context("Failed to parse YAML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.system.admin.trim().is_empty() {
            return Err(ConfigError::MissingAdmin);
        }
        let threshold = self.recommendation.threshold_percent;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        self.registry().map(|_| ())
    }

    /// Builds the startup registry in configuration order.
    pub fn registry(&self) -> Result<Registry, ConfigError> {
        Registry::try_from(self.facilities.clone())
            .map_err(|duplicate| ConfigError::DuplicateFacility(duplicate.id))
    }

    pub fn threshold_percent(&self) -> f64 {
        self.recommendation.threshold_percent
    }

    pub fn is_admin(&self, sender: &str) -> bool {
        self.system.admin == sender
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
services:
  matrix:
    homeserver: https://matrix.example.org
    username: canteen-bot
    password: hunter2
system:
  admin: "@admin:example.org"
facilities:
  - id: stol1
    name: Canteen No. 1
    capacity: 100
    occupancy: 100
  - id: stol2
    name: Canteen No. 2
    capacity: 200
"#;

    #[test]
    fn test_parse_with_defaults() {
        let config = AppConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(config.threshold_percent(), 2.0);
        assert_eq!(config.system.log_dir, "data");
        assert!(config.services.matrix.display_name.is_none());

        let registry = config.registry().unwrap();
        let ids: Vec<&str> = registry.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["stol1", "stol2"]);
        assert_eq!(registry.get("stol2").unwrap().occupancy, 0);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let yaml = format!(
            "{SAMPLE}  - id: stol1\n    name: Again\n    capacity: 5\n"
        );
        let err = AppConfig::from_yaml(&yaml).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::DuplicateFacility("stol1".to_string()))
        );
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let yaml = format!("{SAMPLE}recommendation:\n  threshold_percent: -1.5\n");
        let err = AppConfig::from_yaml(&yaml).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidThreshold(-1.5))
        );
    }

    #[test]
    fn test_rejects_empty_admin() {
        let mut config = testing::sample_config(2.0);
        config.system.admin = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::MissingAdmin));
    }

    #[test]
    fn test_is_admin_is_exact() {
        let config = testing::sample_config(2.0);
        assert!(config.is_admin("@admin:example.org"));
        assert!(!config.is_admin("@someone:example.org"));
        assert!(!config.is_admin("@ADMIN:example.org"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.facilities.len(), 2);

        assert!(AppConfig::load("/definitely/not/here.yaml").is_err());
    }
}
