//! Client configuration loaded from build-time generated JSON.

use notes_core::config::{ClientConfig, RawClientConfig};

/// Loads the generated web config from `OUT_DIR`.
///
/// If parsing or validation fails, this logs a warning and returns the default
/// config pointing at the local notes service.
pub fn load_client_config() -> ClientConfig {
    let raw = include_str!(concat!(env!("OUT_DIR"), "/web-config.json"));
    let config = parse_client_config(raw);
    tracing::info!("Notes collection at {}", config.collection_url());
    config
}

fn parse_client_config(raw: &str) -> ClientConfig {
    let parsed = match serde_json::from_str::<RawClientConfig>(raw) {
        Ok(parsed) => parsed,
        Err(error) => {
            tracing::warn!("Failed to parse web client config: {}", error);
            return ClientConfig::default();
        }
    };
    ClientConfig::try_from(parsed).unwrap_or_else(|error| {
        tracing::warn!("Ignoring invalid web client config: {}", error);
        ClientConfig::default()
    })
}
