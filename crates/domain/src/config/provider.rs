use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Upper bound for a single provider call, in milliseconds.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,

    #[serde(default)]
    pub region: Option<String>,

    /// Override of the provider endpoint, for local emulators.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: default_call_timeout_ms(),
            region: None,
            endpoint_url: None,
        }
    }
}

impl ProviderConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

fn default_call_timeout_ms() -> u64 {
    10_000
}
