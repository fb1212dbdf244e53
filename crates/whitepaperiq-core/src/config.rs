//! Client Configuration
//!
//! Values are baked in at build time (`WHITEPAPERIQ_API_URL`,
//! `WHITEPAPERIQ_APP_ENV`) and resolved through [`ClientConfig::from_env_values`].

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Analyses take 30-60 s on the backend.
const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(120);
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub analysis_timeout: Duration,
    pub refresh_interval: Duration,
    /// Log every outgoing request (development builds)
    pub log_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            analysis_timeout: ANALYSIS_TIMEOUT,
            refresh_interval: REFRESH_INTERVAL,
            log_requests: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env_values(api_url: Option<&str>, app_env: Option<&str>) -> Self {
        let base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url,
            log_requests: app_env.is_some_and(|env| env.eq_ignore_ascii_case("development")),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = ClientConfig::from_env_values(None, None);
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert!(!config.log_requests);
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_env_values(Some("https://api.example.com/api/v1/"), Some("development"));
        assert_eq!(config.base_url, "https://api.example.com/api/v1");
        assert!(config.log_requests);
    }

    #[test]
    fn test_blank_url_falls_back() {
        let config = ClientConfig::from_env_values(Some("  "), Some("production"));
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(!config.log_requests);
    }
}
