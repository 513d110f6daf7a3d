use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::debug;

/// Minimum spacing between the starts of two outbound requests.
pub const MIN_DELAY_BETWEEN_REQUESTS: Duration = Duration::from_millis(3000);

/// How long to wait before the next request may start, given when the last one
/// started. `None` means no request has been made yet.
pub fn delay_since(last_request: Option<Instant>, now: Instant, min_delay: Duration) -> Duration {
    match last_request {
        Some(last) => min_delay.saturating_sub(now.saturating_duration_since(last)),
        None => Duration::ZERO,
    }
}

/// In-process pacing for outbound requests.
///
/// The timestamp of the most recently initiated request is held behind an async
/// mutex so that the read-sleep-write in [`RateLimiter::acquire`] is atomic even
/// when several callers share one limiter. State is memory only.
pub struct RateLimiter {
    min_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_request: Mutex::new(None),
        }
    }

    pub async fn delay_before_next_request(&self) -> Duration {
        let last = *self.last_request.lock().await;
        delay_since(last, Instant::now(), self.min_delay)
    }

    pub async fn last_request(&self) -> Option<Instant> {
        *self.last_request.lock().await
    }

    /// Wait out the remaining delay, then record now as the start of a request.
    ///
    /// Returns the recorded instant. Callers must issue their request right after.
    pub async fn acquire(&self) -> Instant {
        let mut last = self.last_request.lock().await;

        let delay = delay_since(*last, Instant::now(), self.min_delay);
        if !delay.is_zero() {
            debug!("Rate limiter: waiting {} ms before next request", delay.as_millis());
            sleep(delay).await;
        }

        let now = Instant::now();
        *last = Some(now);
        now
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MIN_DELAY_BETWEEN_REQUESTS)
    }
}
