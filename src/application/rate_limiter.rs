/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Rate limiter module for controlling API request rates
//!
//! This module provides opt-in client-side throttling using the `governor`
//! crate. A transport only waits on it when `Config::rate_limiter` is set.

use crate::application::config::RateLimiterConfig;
use crate::constants::RATE_LIMIT_POLL_MS;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter for controlling API request rates
///
/// Uses the `governor` crate to implement a token bucket algorithm. One cell
/// is replenished every `period_seconds / max_requests`, and up to
/// `burst_size` requests may go out back to back.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// Zero values are replaced by the smallest valid setting: a zero burst
    /// becomes one request, and a zero period or request count falls back to
    /// one request per second.
    ///
    /// # Example
    ///
    /// ```
    /// use tdu_client::application::config::RateLimiterConfig;
    /// use tdu_client::application::rate_limiter::RateLimiter;
    ///
    /// let config = RateLimiterConfig {
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// };
    ///
    /// let limiter = RateLimiter::new(&config);
    /// assert!(limiter.check());
    /// ```
    #[must_use]
    pub fn new(config: &RateLimiterConfig) -> Self {
        let burst_size = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let interval = replenish_interval(config);

        let quota = Quota::with_period(interval)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst_size);

        Self {
            limiter: Arc::new(GovernorRateLimiter::direct(quota)),
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(RATE_LIMIT_POLL_MS)).await;
        }
    }

    /// Takes a cell if one is available right now
    ///
    /// # Returns
    ///
    /// * `true` if a request can be made immediately
    /// * `false` if the rate limit has been reached
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimiterConfig::default())
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}

fn replenish_interval(config: &RateLimiterConfig) -> Duration {
    if config.max_requests == 0 || config.period_seconds == 0 {
        return Duration::from_secs(1);
    }
    Duration::from_secs(config.period_seconds) / config.max_requests
}
