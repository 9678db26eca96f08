use std::time::Duration;

use serde::Deserialize;

/// Sign-in flow tuning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Seconds to wait for the authority before giving up. `None` waits
    /// indefinitely, matching the platform behavior.
    pub authority_timeout_secs: Option<u64>,
}

impl FlowConfig {
    pub fn authority_timeout(&self) -> Option<Duration> {
        self.authority_timeout_secs.map(Duration::from_secs)
    }
}
