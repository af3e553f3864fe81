//! Host configuration, loadable from TOML with an environment override.

use anyhow::Context;
use serde::Deserialize;

use pl_log_tools::StoreConfig;

/// Default config file location.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/podlens/podlens.toml";

/// Overrides `log_store.base_url` when set.
pub const LOG_STORE_URL_ENV: &str = "PODLENS_LOG_STORE_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Log store connection settings. `base_url` has no default.
    pub log_store: StoreConfig,
}

impl AgentConfig {
    /// Load config from a TOML file path, then apply environment overrides.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {path}"))?;
        let mut config: Self =
            toml::from_str(&contents).with_context(|| format!("parsing config file {path}"))?;
        config.apply_overrides(std::env::var(LOG_STORE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replace the store URL when an override is given.
    pub fn apply_overrides(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(base_url = %url, "log store URL overridden from environment");
            self.log_store.base_url = url;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let store = &self.log_store;
        if !(store.base_url.starts_with("http://") || store.base_url.starts_with("https://")) {
            anyhow::bail!(
                "log_store.base_url must be an http(s) URL, got {:?}",
                store.base_url
            );
        }
        if !store.search_path.starts_with('/') {
            anyhow::bail!("log_store.search_path must start with '/'");
        }
        if store.timeout_secs == 0 {
            anyhow::bail!("log_store.timeout_secs must be positive");
        }
        if store.default_lookback_minutes == 0 {
            anyhow::bail!("log_store.default_lookback_minutes must be positive");
        }
        Ok(())
    }
}
