//! Configuration for the directory client.

/// Environment variable holding the directory service base URL.
pub const BASE_URL_ENV: &str = "VEGA_USERS_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Configuration for the directory client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the directory service, without a trailing slash.
    pub base_url: String,
    /// Request timeout in milliseconds. Lookups rely on this transport
    /// default; no per-call timeout is enforced.
    pub request_timeout_ms: u64,
    /// Connection timeout in seconds.
    pub connection_timeout_secs: u64,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,
    /// Enable request/response logging.
    pub enable_logging: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 30000,
            connection_timeout_secs: 30,
            pool_max_idle_per_host: 8,
            enable_logging: false,
        }
    }
}

impl ClientConfig {
    /// Default config with the base URL taken from `VEGA_USERS_BASE_URL`
    /// when set.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ClientConfig {
            base_url,
            ..Default::default()
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}
