//! Composition root: wires the directory client and the resolver together
//! for embedders (the UI shell holds one of these).

use std::sync::Arc;

use vega_directory::DirectoryClient;

use crate::config::AppConfig;
use crate::resolver::IdentityResolver;

pub struct VegaClient {
    config: AppConfig,
    resolver: Option<IdentityResolver<DirectoryClient>>,
}

impl VegaClient {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let resolver = if config.enrich_identities {
            let directory = DirectoryClient::with_config(config.directory.clone())
                .map_err(|e| anyhow::anyhow!("Failed to create DirectoryClient: {}", e))?;
            Some(IdentityResolver::new(Arc::new(directory)))
        } else {
            None
        };
        Ok(VegaClient { config, resolver })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(AppConfig::from_env())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The shared enrichment capability, absent when enrichment is
    /// disabled by config.
    pub fn resolver(&self) -> Option<&IdentityResolver<DirectoryClient>> {
        self.resolver.as_ref()
    }
}
