fn default_tick_seconds() -> u64 {
    1
}

fn default_refresh_interval_seconds() -> u64 {
    5
}

/// The tick only checks whether the refresh interval has elapsed; the two
/// timers are independent.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct PollerConfig {
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
    #[serde(default = "default_refresh_interval_seconds")]
    pub refresh_interval_seconds: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            tick_seconds: default_tick_seconds(),
            refresh_interval_seconds: default_refresh_interval_seconds(),
        }
    }
}
