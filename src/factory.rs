use crate::{ChatProvider, Error, GatewayConfig, PortkeyProvider};
use tracing::debug;

/// Factory for creating gateway providers.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider from configuration.
    pub fn create(config: &GatewayConfig) -> Result<Box<dyn ChatProvider>, Error> {
        debug!(base_url = %config.base_url, "creating Portkey provider");
        let provider = PortkeyProvider::new(config.clone())?;
        Ok(Box::new(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_config() {
        let config = GatewayConfig {
            base_url: "https://example.invalid/v1".to_string(),
            api_key: "pk-test".to_string(),
        };
        assert!(ProviderFactory::create(&config).is_ok());
    }
}
