//! Lightweight async rate limiter used to pace Asana API requests.
//!
//! Asana caps free workspaces at 150 requests per minute; the default
//! cooldown keeps a full refresh comfortably under that ceiling.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tokio::time::sleep;

/// Enforces a minimum interval between consecutive requests.
#[derive(Clone, Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    last_call: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Creates a limiter that enforces a minimum delay between requests.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_call: Arc::new(Mutex::new(None)),
        }
    }

    /// Waits until the cooldown is satisfied, then records the call time.
    pub async fn hit(&self) {
        let mut guard = self.last_call.lock().await;
        if let Some(last) = *guard {
            let elapsed = last.elapsed();
            if elapsed < self.cooldown {
                sleep(self.cooldown - elapsed).await;
            }
        }
        *guard = Some(Instant::now());
    }

    /// Returns the configured cooldown interval.
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}
