use std::sync::Arc;

use crate::config::Config;
use crate::providers::{DeepSeekProvider, Provider};

/// Build the configured text-generation provider.
///
/// A missing API key is not an error here; the provider reports it at
/// call time so offline scoring keeps working.
pub fn create_provider(config: &Config) -> Arc<dyn Provider> {
    let provider = DeepSeekProvider::new(
        config.resolved_api_key().as_deref(),
        config.request_timeout_secs,
    )
    .with_base_url(&config.base_url);
    Arc::new(provider)
}
