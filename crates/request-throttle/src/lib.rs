//! Request Throttle
//!
//! Process-wide admission control for calls to a rate-limited upstream API.
//! A [`Throttle`] bounds the number of in-flight calls and enforces a minimum
//! spacing between call starts. Waiters are admitted in FIFO order.
//!
//! The throttle is constructed explicitly and shared via `Arc`; there is no
//! global instance.
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use request_throttle::{Throttle, ThrottleConfig};
//!
//! # async fn example() -> Result<(), request_throttle::ThrottleError> {
//! let throttle = Arc::new(Throttle::new(ThrottleConfig::new(2, Duration::from_millis(1000))?));
//!
//! let permit = throttle.acquire().await?;
//! // ... issue the outbound call ...
//! drop(permit); // release
//! # Ok(())
//! # }
//! ```

mod error;
mod throttle;

pub use error::{Result, ThrottleError};
pub use throttle::{Throttle, ThrottleConfig, ThrottlePermit};
