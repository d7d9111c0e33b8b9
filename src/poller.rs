use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::config::poller_config::PollerConfig;
use crate::routines::Routine;

/// Timer-driven single-task scheduler. The tick only checks whether the
/// refresh interval has elapsed; routine runs are serialized by construction,
/// so two refreshes can never overlap.
pub struct Poller {
    routines: Vec<Box<dyn Routine>>,
    tick: Duration,
    refresh_interval: Duration,
}

impl Poller {
    pub fn new(routines: Vec<Box<dyn Routine>>, config: &PollerConfig) -> Self {
        Self {
            routines,
            tick: Duration::from_secs(config.tick_seconds),
            refresh_interval: Duration::from_secs(config.refresh_interval_seconds),
        }
    }

    pub async fn run(&self) {
        // The first refresh waits one full interval, like a freshly scheduled job.
        let mut last_refresh = Instant::now();

        loop {
            if last_refresh.elapsed() >= self.refresh_interval {
                for routine in &self.routines {
                    match routine.run().await {
                        Ok(()) => tracing::debug!("✅ {}: OK", routine.name()),
                        Err(report) => tracing::error!("❌ {}: {:?}", routine.name(), report),
                    }
                }
                last_refresh = Instant::now();
            }

            sleep(self.tick).await;
        }
    }
}
