use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tokio::time::Instant;
use tracing::debug;

use crate::error::{Result, ThrottleError};

const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 2;
const DEFAULT_MIN_INTERVAL_MS: u64 = 1000;

/// Admission limits, read once at startup
///
/// Only constructible through [`ThrottleConfig::new`] or `Default`, so every
/// instance has a concurrency limit in `1..=MAX_CONCURRENT_REQUESTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleConfig {
    max_concurrent_requests: usize,
    min_interval: Duration,
}

impl ThrottleConfig {
    /// Largest concurrency limit a throttle can hold
    pub const MAX_CONCURRENT_REQUESTS: usize = Semaphore::MAX_PERMITS;

    /// Create a validated configuration
    pub fn new(max_concurrent_requests: usize, min_interval: Duration) -> Result<Self> {
        if max_concurrent_requests == 0 {
            return Err(ThrottleError::InvalidConfig(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        if max_concurrent_requests > Self::MAX_CONCURRENT_REQUESTS {
            return Err(ThrottleError::InvalidConfig(format!(
                "max_concurrent_requests must be at most {}",
                Self::MAX_CONCURRENT_REQUESTS
            )));
        }
        Ok(Self {
            max_concurrent_requests,
            min_interval,
        })
    }

    /// Same concurrency limit, different spacing
    pub fn with_min_interval(self, min_interval: Duration) -> Self {
        Self {
            min_interval,
            ..self
        }
    }

    /// Maximum number of calls in flight at once
    pub fn max_concurrent_requests(&self) -> usize {
        self.max_concurrent_requests
    }

    /// Minimum time between two consecutive call starts
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            min_interval: Duration::from_millis(DEFAULT_MIN_INTERVAL_MS),
        }
    }
}

/// FIFO admission controller for outbound calls
///
/// `acquire` waits (without spinning) until a concurrency slot is free and the
/// minimum interval since the previous start has elapsed. Both waits are FIFO:
/// tokio's `Semaphore` and `Mutex` queue waiters fairly.
pub struct Throttle {
    config: ThrottleConfig,
    /// One permit per concurrency slot
    slots: Arc<Semaphore>,
    /// Earliest instant the next call may start; `None` before the first admission
    next_start: Mutex<Option<Instant>>,
    /// Calls past the spacing wait whose permit is still alive
    admitted: Arc<AtomicUsize>,
}

impl Throttle {
    pub fn new(config: ThrottleConfig) -> Self {
        Self {
            config,
            slots: Arc::new(Semaphore::new(config.max_concurrent_requests)),
            next_start: Mutex::new(None),
            admitted: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn config(&self) -> ThrottleConfig {
        self.config
    }

    /// Number of admitted calls that have not released yet
    ///
    /// A waiter that holds a slot but is still sleeping out the spacing
    /// interval is not counted.
    pub fn active_count(&self) -> usize {
        self.admitted.load(Ordering::SeqCst)
    }

    /// Wait for admission. The returned permit releases the slot when dropped.
    pub async fn acquire(&self) -> Result<ThrottlePermit> {
        let slot = self
            .slots
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| ThrottleError::Closed)?;

        // Held across the sleep so the next admitted waiter measures its
        // spacing from this start, not from a stale one.
        let mut next_start = self.next_start.lock().await;
        if let Some(at) = *next_start {
            let now = Instant::now();
            if at > now {
                debug!(wait_ms = (at - now).as_millis() as u64, "Throttle spacing wait");
                tokio::time::sleep_until(at).await;
            }
        }

        if self.slots.is_closed() {
            return Err(ThrottleError::Closed);
        }

        let started_at = Instant::now();
        *next_start = Some(started_at + self.config.min_interval);
        drop(next_start);

        let active = self.admitted.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(active, "Throttle admitted request");

        Ok(ThrottlePermit {
            _slot: slot,
            admitted: self.admitted.clone(),
            started_at,
        })
    }

    /// Stop admitting. Queued and future `acquire` calls fail with `Closed`;
    /// permits already handed out stay valid until dropped.
    pub fn shutdown(&self) {
        self.slots.close();
    }

    pub fn is_shut_down(&self) -> bool {
        self.slots.is_closed()
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(ThrottleConfig::default())
    }
}

/// Proof of admission. Dropping it releases the concurrency slot, so every
/// exit path (success, error, panic, cancelled future) releases.
#[derive(Debug)]
pub struct ThrottlePermit {
    _slot: OwnedSemaphorePermit,
    admitted: Arc<AtomicUsize>,
    started_at: Instant,
}

impl ThrottlePermit {
    /// When this call was admitted
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Release explicitly (same as dropping)
    pub fn release(self) {}
}

impl Drop for ThrottlePermit {
    fn drop(&mut self) {
        self.admitted.fetch_sub(1, Ordering::SeqCst);
    }
}
