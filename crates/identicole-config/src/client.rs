//! Proxy client configuration.
//!
//! Settings for reaching the school proxy service and for the defaults the
//! search session starts with, loaded from environment variables.

use std::env;
use std::time::Duration;

use identicole_core::{DEFAULT_PAGE_SIZE, clamp_page_size};

const DEFAULT_BASE_URL: &str = "https://indenticole-proxy.onrender.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DEPARTMENT: &str = "01";
const DEFAULT_COUNTRY_LABEL: &str = "Perú";

/// Client configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `IDENTICOLE_BASE_URL`: proxy base URL (default: `https://indenticole-proxy.onrender.com`)
/// - `IDENTICOLE_TIMEOUT_SECS`: per-request timeout in seconds (default: `30`)
/// - `IDENTICOLE_PAGE_SIZE`: initial page size, clamped to 1..=100 (default: `12`)
/// - `IDENTICOLE_DEFAULT_DEPARTMENT`: department code selected at start (default: `01`)
/// - `IDENTICOLE_COUNTRY_LABEL`: trailing component of the location description (default: `Perú`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the proxy, without a trailing slash.
    pub base_url: String,

    /// Timeout applied to every remote call, in seconds.
    pub timeout_secs: u64,

    /// Page size sent with the first search.
    pub page_size: u32,

    /// Department code the session selects on start and on reset.
    pub default_department: String,

    /// Country label appended to the location description.
    pub country_label: String,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            base_url: non_empty("IDENTICOLE_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            timeout_secs: non_empty("IDENTICOLE_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            page_size: non_empty("IDENTICOLE_PAGE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .map(clamp_page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
            default_department: non_empty("IDENTICOLE_DEFAULT_DEPARTMENT")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| DEFAULT_DEPARTMENT.into()),
            country_label: non_empty("IDENTICOLE_COUNTRY_LABEL")
                .unwrap_or_else(|| DEFAULT_COUNTRY_LABEL.into()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns a copy pointing at another proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            default_department: DEFAULT_DEPARTMENT.into(),
            country_label: DEFAULT_COUNTRY_LABEL.into(),
        }
    }
}
