use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::WidgetError;

pub const DEFAULT_API_URL: &str = "https://meowfacts.herokuapp.com/?lang=por-br";

pub const ENV_API_URL: &str = "CURIOUS_CATS_API_URL";
pub const ENV_INITIAL_FETCH_MS: &str = "CURIOUS_CATS_INITIAL_FETCH_MS";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_initial_fetch_ms() -> u64 {
    1000
}

fn default_fade_ms() -> u64 {
    300
}

fn default_error_restore_ms() -> u64 {
    3000
}

fn default_typewriter_start_ms() -> u64 {
    500
}

fn default_typewriter_interval_ms() -> u64 {
    100
}

/// Endpoint e tempos fixos do widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_initial_fetch_ms")]
    pub initial_fetch_ms: u64,

    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,

    #[serde(default = "default_error_restore_ms")]
    pub error_restore_ms: u64,

    #[serde(default = "default_typewriter_start_ms")]
    pub typewriter_start_ms: u64,

    #[serde(default = "default_typewriter_interval_ms")]
    pub typewriter_interval_ms: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            initial_fetch_ms: default_initial_fetch_ms(),
            fade_ms: default_fade_ms(),
            error_restore_ms: default_error_restore_ms(),
            typewriter_start_ms: default_typewriter_start_ms(),
            typewriter_interval_ms: default_typewriter_interval_ms(),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Result<Self, WidgetError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, WidgetError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            cfg.api_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_INITIAL_FETCH_MS) {
            cfg.initial_fetch_ms = raw.trim().parse().map_err(|e| {
                WidgetError::Config(format!("{ENV_INITIAL_FETCH_MS} must be milliseconds: {e}"))
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), WidgetError> {
        if self.api_url.is_empty() {
            return Err(WidgetError::Config("api_url is required".into()));
        }

        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(WidgetError::Config(format!(
                "api_url must be http(s): {}",
                self.api_url
            )));
        }

        if self.typewriter_interval_ms == 0 {
            return Err(WidgetError::Config(
                "typewriter_interval_ms must be greater than zero".into(),
            ));
        }

        Ok(())
    }

    pub fn initial_fetch_delay(&self) -> Duration {
        Duration::from_millis(self.initial_fetch_ms)
    }

    pub fn fade_delay(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    pub fn error_restore_delay(&self) -> Duration {
        Duration::from_millis(self.error_restore_ms)
    }

    pub fn typewriter_start_delay(&self) -> Duration {
        Duration::from_millis(self.typewriter_start_ms)
    }

    pub fn typewriter_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_widget_timings() {
        let cfg = WidgetConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg, WidgetConfig::default());
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.initial_fetch_delay(), Duration::from_secs(1));
        assert_eq!(cfg.fade_delay(), Duration::from_millis(300));
        assert_eq!(cfg.error_restore_delay(), Duration::from_secs(3));
    }

    #[test]
    fn env_overrides_are_applied() {
        let cfg = WidgetConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, " http://localhost:9000/facts "),
            (ENV_INITIAL_FETCH_MS, "0"),
        ]))
        .unwrap();
        assert_eq!(cfg.api_url, "http://localhost:9000/facts");
        assert_eq!(cfg.initial_fetch_ms, 0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_url = WidgetConfig::from_lookup(lookup_from(&[(ENV_API_URL, "ftp://x")]));
        assert!(matches!(bad_url, Err(WidgetError::Config(_))));

        let bad_ms = WidgetConfig::from_lookup(lookup_from(&[(ENV_INITIAL_FETCH_MS, "soon")]));
        assert!(matches!(bad_ms, Err(WidgetError::Config(_))));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: WidgetConfig = serde_json::from_str(r#"{ "fade_ms": 10 }"#).unwrap();
        assert_eq!(cfg.fade_ms, 10);
        assert_eq!(cfg.error_restore_ms, 3000);
    }
}
