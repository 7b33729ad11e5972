use std::fmt;

/// Errors from the request throttle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThrottleError {
    /// Rejected configuration (e.g. zero concurrency)
    InvalidConfig(String),
    /// The throttle was shut down; no further admissions
    Closed,
}

impl fmt::Display for ThrottleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "Invalid throttle configuration: {msg}"),
            Self::Closed => write!(f, "Request throttle is shut down"),
        }
    }
}

impl std::error::Error for ThrottleError {}

pub type Result<T> = std::result::Result<T, ThrottleError>;
