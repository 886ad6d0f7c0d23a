use std::time::Duration;

use serde::Deserialize;

use super::ProviderSetting;

/// Scaffold mode swaps every external service for an offline mock.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub enabled: bool,
    pub mock_response_delay_ms: u64,
}

impl ScaffoldConfig {
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_response_delay_ms)
    }

    /// The provider to build, honouring scaffold mode.
    pub fn resolve(&self, configured: ProviderSetting) -> ProviderSetting {
        if self.enabled {
            ProviderSetting::Mock
        } else {
            configured
        }
    }
}
