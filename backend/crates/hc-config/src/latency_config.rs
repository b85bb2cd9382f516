use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DONATION_LATENCY_MS,
    DEFAULT_PASSWORD_RESET_LATENCY_MS, DEFAULT_REGISTER_LATENCY_MS, DEFAULT_SIGN_IN_LATENCY_MS,
    DEFAULT_VOLUNTEER_LATENCY_MS, MAX_LATENCY_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Artificial delays applied before simulated form submissions complete.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LatencyConfig {
    pub sign_in_ms: u64,
    pub register_ms: u64,
    pub donation_ms: u64,
    pub volunteer_ms: u64,
    pub password_reset_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            sign_in_ms: DEFAULT_SIGN_IN_LATENCY_MS,
            register_ms: DEFAULT_REGISTER_LATENCY_MS,
            donation_ms: DEFAULT_DONATION_LATENCY_MS,
            volunteer_ms: DEFAULT_VOLUNTEER_LATENCY_MS,
            password_reset_ms: DEFAULT_PASSWORD_RESET_LATENCY_MS,
        }
    }
}

impl LatencyConfig {
    /// No delays at all; what tests want.
    pub fn none() -> Self {
        Self {
            sign_in_ms: 0,
            register_ms: 0,
            donation_ms: 0,
            volunteer_ms: 0,
            password_reset_ms: 0,
        }
    }

    pub fn sign_in(&self) -> Duration {
        Duration::from_millis(self.sign_in_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }

    pub fn donation(&self) -> Duration {
        Duration::from_millis(self.donation_ms)
    }

    pub fn volunteer(&self) -> Duration {
        Duration::from_millis(self.volunteer_ms)
    }

    pub fn password_reset(&self) -> Duration {
        Duration::from_millis(self.password_reset_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let fields = [
            ("sign_in_ms", self.sign_in_ms),
            ("register_ms", self.register_ms),
            ("donation_ms", self.donation_ms),
            ("volunteer_ms", self.volunteer_ms),
            ("password_reset_ms", self.password_reset_ms),
        ];

        for (name, value) in fields {
            if value > MAX_LATENCY_MS {
                return Err(ConfigError::latency(format!(
                    "latency.{} must be <= {}, got {}",
                    name, MAX_LATENCY_MS, value
                )));
            }
        }

        Ok(())
    }
}
