use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::FetchError;
use crate::model::{Briefing, Location};

pub mod weatherapi;

/// Total attempts per request, including the first.
pub const MAX_ATTEMPTS: u32 = 3;

/// Per-request timeout baked into the HTTP client.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const BACKOFF_BASE: Duration = Duration::from_millis(400);

/// Source of one complete reading bundle for a location.
#[async_trait]
pub trait BriefingProvider: Send + Sync + Debug {
    async fn fetch(&self, location: &Location) -> Result<Briefing, FetchError>;
}

/// Transient server-side failures are the only retryable statuses. 4xx
/// means the request itself is wrong and repeating it cannot help.
pub(crate) fn is_retryable(status: StatusCode) -> bool {
    matches!(status.as_u16(), 500 | 502 | 503 | 504)
}

/// Delay before retry number `attempt` (1-based): 400ms, 800ms, ...
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    BACKOFF_BASE * 2u32.saturating_pow(attempt.saturating_sub(1))
}
