//! Dashboard Configuration
//!
//! Tunables read once at startup from an optional JSON block in the page:
//! `<script type="application/json" id="dashboard-config">{...}</script>`.
//! Missing keys fall back to defaults.

use leptos::logging::{error, warn};
use serde::Deserialize;

/// Id of the element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix for every API path ("" = same origin)
    pub api_base: String,
    /// Pause between two claims of a batch
    pub submit_delay_ms: u32,
    pub queue_poll_ms: u32,
    pub security_poll_ms: u32,
    pub clock_tick_ms: u32,
    /// Lifetime of a toast notification
    pub toast_ms: u32,
    pub alerts_limit: u32,
    pub ban_duration_secs: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            submit_delay_ms: 100,
            queue_poll_ms: 5_000,
            security_poll_ms: 60_000,
            clock_tick_ms: 1_000,
            toast_ms: 3_000,
            alerts_limit: 5,
            ban_duration_secs: 3_600,
        }
    }
}

impl DashboardConfig {
    /// Parse a config block; whitespace around the JSON is ignored
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(text.trim())?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load from the page, degrading to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            None => {
                warn!("[CONFIG] #{} not found, using defaults", CONFIG_ELEMENT_ID);
                Self::default()
            }
            Some(text) => Self::from_json(&text).unwrap_or_else(|e| {
                error!("[CONFIG] Failed to parse #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = DashboardConfig::from_json(r#" {"api_base": "http://host:8000/", "queue_poll_ms": 2000} "#).unwrap();
        assert_eq!(config.api_base, "http://host:8000");
        assert_eq!(config.queue_poll_ms, 2000);
        assert_eq!(config.submit_delay_ms, 100);
        assert_eq!(config.toast_ms, 3000);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(DashboardConfig::from_json("{not json").is_err());
    }
}
