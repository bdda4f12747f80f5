//! # Bot State
//!
//! Defines the in-memory state of the application (`BotState`): the facility
//! registry and the recommendation threshold. Shared between event handlers as
//! `Arc<Mutex<BotState>>`; every command does its whole read or
//! validate-then-write under a single lock.
//! Nothing is persisted; the state is rebuilt from configuration on startup.

use crate::domain::config::{AppConfig, ConfigError};
use crate::domain::facility::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type SharedState = Arc<Mutex<BotState>>;

#[derive(Debug, Clone)]
pub struct BotState {
    pub registry: Registry,
    pub threshold_percent: f64,
}

impl BotState {
    pub fn new(registry: Registry, threshold_percent: f64) -> Self {
        Self {
            registry,
            threshold_percent,
        }
    }

    /// Builds the startup state from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.registry()?, config.threshold_percent()))
    }

    pub fn shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }
}
