use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::application::{classify, CompletionTransport, RateLimiter, MIN_DELAY_BETWEEN_REQUESTS};
use crate::domain::{ChatMessage, ChatResponse, ClassifiedError, CompletionRequest};

/// Wait applied before the single retry that follows a 429.
pub const RATE_LIMIT_COOLDOWN: Duration = Duration::from_millis(20_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchPolicy {
    pub min_delay: Duration,
    pub cooldown: Duration,
}

impl Default for DispatchPolicy {
    fn default() -> Self {
        Self {
            min_delay: MIN_DELAY_BETWEEN_REQUESTS,
            cooldown: RATE_LIMIT_COOLDOWN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    Retrying,
}

/// Runs one chat turn against a [`CompletionTransport`].
///
/// Every request, the retry included, is paced by the owned [`RateLimiter`].
/// A 429 on the first attempt earns exactly one retry after the cooldown; any
/// failure of that retry surfaces as `RateLimitPersisted`. Other failures are
/// classified and returned without retrying.
pub struct Dispatcher {
    transport: Arc<dyn CompletionTransport>,
    limiter: RateLimiter,
    cooldown: Duration,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn CompletionTransport>) -> Self {
        Self::with_policy(transport, DispatchPolicy::default())
    }

    pub fn with_policy(transport: Arc<dyn CompletionTransport>, policy: DispatchPolicy) -> Self {
        Self {
            transport,
            limiter: RateLimiter::new(policy.min_delay),
            cooldown: policy.cooldown,
        }
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub async fn send(&self, message: &ChatMessage) -> Result<ChatResponse, ClassifiedError> {
        let request = CompletionRequest::for_message(message);
        let mut attempt = Attempt::Initial;

        loop {
            self.limiter.acquire().await;
            debug!("Dispatching completion request ({:?} attempt)", attempt);

            let failure = match self.transport.post(&request).await {
                Ok(text) => return Ok(ChatResponse::new(text)),
                Err(failure) => failure,
            };

            let error = classify(&failure);
            match attempt {
                Attempt::Initial if error.is_rate_limited() => {
                    info!(
                        "Rate limited by upstream; retrying once in {} ms",
                        self.cooldown.as_millis()
                    );
                    tokio::time::sleep(self.cooldown).await;
                    attempt = Attempt::Retrying;
                }
                Attempt::Initial => {
                    warn!("Completion request failed ({}): {}", error.kind().as_str(), failure);
                    return Err(error);
                }
                Attempt::Retrying => {
                    warn!(
                        "Retry after rate limit failed ({}): {}",
                        error.kind().as_str(),
                        failure
                    );
                    return Err(ClassifiedError::rate_limit_persisted());
                }
            }
        }
    }
}
