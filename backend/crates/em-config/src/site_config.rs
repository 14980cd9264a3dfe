use crate::{ConfigError, ConfigErrorResult, DEFAULT_METRICS_ENABLED, DEFAULT_SITE_TITLE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shown in the navbar and page titles
    pub title: String,
    /// Expose Prometheus metrics at /metrics
    pub metrics_enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_SITE_TITLE),
            metrics_enabled: DEFAULT_METRICS_ENABLED,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::site("site.title cannot be empty"));
        }
        Ok(())
    }
}
