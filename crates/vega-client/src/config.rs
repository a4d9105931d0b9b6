//! Client application configuration.

use vega_directory::ClientConfig;

/// Top-level configuration for the headless client.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory service client settings.
    pub directory: ClientConfig,
    /// Run the identity-enrichment effect for peers with phone numbers.
    pub enrich_identities: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            directory: ClientConfig::default(),
            enrich_identities: true,
        }
    }
}

impl AppConfig {
    /// Environment-driven config: the directory base URL comes from
    /// `VEGA_USERS_BASE_URL` when set.
    pub fn from_env() -> Self {
        AppConfig {
            directory: ClientConfig::from_env(),
            enrich_identities: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_enrichment() {
        let config = AppConfig::default();
        assert!(config.enrich_identities);
        assert_eq!(config.directory.base_url, "http://localhost:4000");
    }
}
