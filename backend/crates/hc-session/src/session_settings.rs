use crate::CredentialPolicy;

use std::time::Duration;

use hc_config::{Config, LatencyConfig};

/// Everything the session store needs from configuration.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Storage key holding the serialized identity
    pub key: String,
    pub policy: CredentialPolicy,
    pub sign_in_latency: Duration,
    pub register_latency: Duration,
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            key: config.session.key.clone(),
            policy: CredentialPolicy::from_config(&config.credentials),
            sign_in_latency: config.latency.sign_in(),
            register_latency: config.latency.register(),
        }
    }

    /// Default key and credentials with no simulated latency.
    pub fn immediate() -> Self {
        let config = Config {
            latency: LatencyConfig::none(),
            ..Config::default()
        };
        Self::from_config(&config)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
