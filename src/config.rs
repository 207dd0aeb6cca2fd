use anyhow::Result;
use config::{Config, Environment, File};
use moka::future::Cache;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Optional settings file, looked up next to the working directory.
pub const SETTINGS_FILE: &str = "budgetai";

/// Service settings.
///
/// Layered from built-in defaults, an optional `budgetai.toml` and
/// `BUDGETAI_*` environment variables, in that order.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub bind_address: String,
    /// Days after today shown when a request sets no window.
    pub default_horizon_days: u32,
    /// Days before today kept so that missed payments stay visible.
    pub default_lookback_days: u32,
    pub cache_ttl_secs: u64,
    pub cache_capacity: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            default_horizon_days: compute::DEFAULT_HORIZON_DAYS,
            default_lookback_days: 0,
            cache_ttl_secs: 300,
            cache_capacity: 1000,
        }
    }
}

impl Settings {
    /// Loads `.env` first, then the layered configuration.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_sources(SETTINGS_FILE)
    }

    fn from_sources(file_name: &str) -> Result<Self> {
        let defaults = Settings::default();
        let settings = Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("default_horizon_days", defaults.default_horizon_days)?
            .set_default("default_lookback_days", defaults.default_lookback_days)?
            .set_default("cache_ttl_secs", defaults.cache_ttl_secs)?
            .set_default("cache_capacity", defaults.cache_capacity)?
            .add_source(File::with_name(file_name).required(false))
            .add_source(Environment::with_prefix("BUDGETAI"))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

/// Initialize application state from settings
pub fn initialize_app_state(settings: Settings) -> AppState {
    info!(
        "Initializing timeline cache (capacity {}, ttl {}s)",
        settings.cache_capacity, settings.cache_ttl_secs
    );
    let cache = Cache::builder()
        .max_capacity(settings.cache_capacity)
        .time_to_live(Duration::from_secs(settings.cache_ttl_secs))
        .build();

    AppState { settings, cache }
}
