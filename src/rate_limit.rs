//! # Rate Limiting Module
//!
//! ## Purpose
//! Enforces a minimum spacing between outbound API requests by blocking the
//! calling thread for the remainder of the configured interval.
//!
//! The timestamp is stamped unconditionally after the wait, so a request
//! that subsequently fails still consumes its rate-limit slot.

use std::thread;
use std::time::{Duration, Instant};

/// Minimum-interval rate limiter
///
/// Holds only the instant of the last request issuance. Not thread-safe on
/// its own; the client wraps it in a `Mutex`.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Create a limiter enforcing `min_interval` between requests
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: None,
        }
    }

    /// Block until at least `min_interval` has passed since the previous
    /// call, then record the current instant as the new last-request time
    pub fn wait(&mut self) {
        if let Some(last) = self.last_request {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last_request = Some(Instant::now());
    }
}
