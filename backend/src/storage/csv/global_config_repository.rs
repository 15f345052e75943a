//! # Global Config Repository
//!
//! Bank-wide settings and persisted pending actions live in a single YAML file,
//! `global_config.yaml`, at the root of the data directory.
//!
//! ```yaml
//! commission_rate: 0.15
//! penalty_per_day: 5.0
//! currency_symbol: $
//! pending_recycle:
//!   goal_id: 2
//!   withdrawn: 80.0
//!   started_at: 2025-12-26 10:15
//! data_format_version: "1.0"
//! created_at: 2025-12-25T09:00:00+00:00
//! updated_at: 2025-12-26T10:15:00+00:00
//! ```
//!
//! Keys missing from an older file are filled with their defaults.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use crate::domain::commission::{DEFAULT_COMMISSION_RATE, DEFAULT_PENALTY_PER_DAY};
use crate::domain::models::PendingRecycle;
use crate::storage::traits::GlobalConfigStorage;
use super::connection::CsvConnection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Share of every deposit kept by the accountant
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
    /// Late fee charged per day
    #[serde(default = "default_penalty_per_day")]
    pub penalty_per_day: f64,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Goal cashed out and waiting for its new name and target
    #[serde(default)]
    pub pending_recycle: Option<PendingRecycle>,
    #[serde(default = "default_data_format_version")]
    pub data_format_version: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

fn default_commission_rate() -> f64 {
    DEFAULT_COMMISSION_RATE
}

fn default_penalty_per_day() -> f64 {
    DEFAULT_PENALTY_PER_DAY
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_data_format_version() -> String {
    "1.0".to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            commission_rate: default_commission_rate(),
            penalty_per_day: default_penalty_per_day(),
            currency_symbol: default_currency_symbol(),
            pending_recycle: None,
            data_format_version: default_data_format_version(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Clone)]
pub struct GlobalConfigRepository {
    connection: CsvConnection,
}

impl GlobalConfigRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn config_path(&self) -> PathBuf {
        self.connection.global_config_path()
    }

    /// Load global config from file, creating the default if it doesn't exist
    fn load_or_create_global_config(&self) -> Result<GlobalConfig> {
        let config_path = self.config_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)?;
            let config: GlobalConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            debug!("Loaded global config from {:?}", config_path);
            Ok(config)
        } else {
            let config = GlobalConfig::default();
            self.save_global_config(&config)?;
            info!("Created default global config at {:?}", config_path);
            Ok(config)
        }
    }

    fn save_global_config(&self, config: &GlobalConfig) -> Result<()> {
        let config_path = self.config_path();
        let yaml_content = serde_yaml::to_string(config)?;

        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved global config to {:?}", config_path);
        Ok(())
    }
}

impl GlobalConfigStorage for GlobalConfigRepository {
    fn get_global_config(&self) -> Result<GlobalConfig> {
        self.load_or_create_global_config()
    }

    fn update_global_config(&self, config: &GlobalConfig) -> Result<()> {
        let mut updated = config.clone();
        updated.updated_at = Utc::now().to_rfc3339();
        self.save_global_config(&updated)
    }

    fn set_pending_recycle(&self, pending: Option<PendingRecycle>) -> Result<()> {
        let mut config = self.load_or_create_global_config()?;
        match &pending {
            Some(p) => info!("Goal {} is now waiting to be recycled", p.goal_id),
            None => info!("Cleared pending goal recycle"),
        }
        config.pending_recycle = pending;
        self.update_global_config(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    #[test]
    fn test_first_load_creates_defaults() {
        let env = TestEnvironment::new().unwrap();
        let repo = GlobalConfigRepository::new(env.connection.clone());

        let config = repo.get_global_config().unwrap();

        assert_eq!(config.commission_rate, 0.15);
        assert_eq!(config.penalty_per_day, 5.0);
        assert_eq!(config.currency_symbol, "$");
        assert!(config.pending_recycle.is_none());
        assert!(env.base_path.join("global_config.yaml").exists());
    }

    #[test]
    fn test_partial_file_is_default_filled() {
        let env = TestEnvironment::new().unwrap();
        env.write_file("global_config.yaml", "commission_rate: 0.2\n").unwrap();
        let repo = GlobalConfigRepository::new(env.connection.clone());

        let config = repo.get_global_config().unwrap();

        assert_eq!(config.commission_rate, 0.2);
        assert_eq!(config.penalty_per_day, 5.0);
        assert_eq!(config.data_format_version, "1.0");
    }

    #[test]
    fn test_pending_recycle_persists() {
        let env = TestEnvironment::new().unwrap();
        let repo = GlobalConfigRepository::new(env.connection.clone());
        let pending = PendingRecycle {
            goal_id: 2,
            withdrawn: 80.0,
            started_at: "2025-12-26 10:15".to_string(),
        };

        repo.set_pending_recycle(Some(pending.clone())).unwrap();
        let reopened = GlobalConfigRepository::new(env.connection.clone());
        assert_eq!(reopened.get_global_config().unwrap().pending_recycle, Some(pending));

        reopened.set_pending_recycle(None).unwrap();
        assert!(repo.get_global_config().unwrap().pending_recycle.is_none());
    }
}
