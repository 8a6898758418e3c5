//! Configuration for the tooltip library source.

use serde::{Deserialize, Serialize};

/// Where the static tooltip library document is served from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipSourceConfig {
    /// Origin the viewer's static assets are served from.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the library document under the base URL. May also be a full
    /// URL, in which case `base_url` is ignored.
    #[serde(default = "default_library_path")]
    pub library_path: String,

    /// Timeout for the single library fetch, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:4173".to_string()
}

fn default_library_path() -> String {
    "/data/tooltips.json".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

impl Default for TooltipSourceConfig {
    fn default() -> Self {
        // Environment overrides follow the config-file defaults, so a
        // deployment can repoint the library without a config file.
        Self {
            base_url: std::env::var("CHARCYCLE_BASE_URL")
                .ok()
                .unwrap_or_else(default_base_url),
            library_path: std::env::var("CHARCYCLE_TOOLTIP_URL")
                .ok()
                .unwrap_or_else(default_library_path),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

impl TooltipSourceConfig {
    /// Config pointing at a specific origin, with default path and timeout.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            library_path: default_library_path(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }

    /// Full URL of the library document.
    pub fn library_url(&self) -> String {
        if self.library_path.starts_with("http://") || self.library_path.starts_with("https://") {
            return self.library_path.clone();
        }

        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.library_path.trim_start_matches('/')
        )
    }
}
