//! Error types for the Spoonacular client

use std::fmt;

use request_throttle::ThrottleError;

/// Errors that can occur when calling the Spoonacular API
#[derive(Debug)]
pub enum SpoonacularError {
    /// No API key configured for the selected auth mode
    MissingCredentials,
    /// The request throttle refused admission (shutting down)
    Throttle(ThrottleError),
    /// The request never produced a response (connect, timeout, body read)
    Transport(reqwest::Error),
    /// The provider answered with a non-2xx status
    Provider { status: u16, body: String },
    /// A 2xx body that is not the expected JSON shape
    Json(serde_json::Error),
}

impl fmt::Display for SpoonacularError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "Spoonacular API credentials are not configured"),
            Self::Throttle(e) => write!(f, "Spoonacular request not admitted: {e}"),
            Self::Transport(e) => write!(f, "Spoonacular HTTP error: {e}"),
            Self::Provider { status, body } => {
                write!(f, "Spoonacular returned status {status}: {body}")
            }
            Self::Json(e) => write!(f, "Spoonacular JSON parse error: {e}"),
        }
    }
}

impl std::error::Error for SpoonacularError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Throttle(e) => Some(e),
            Self::Transport(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::MissingCredentials | Self::Provider { .. } => None,
        }
    }
}

impl From<ThrottleError> for SpoonacularError {
    fn from(e: ThrottleError) -> Self {
        Self::Throttle(e)
    }
}

impl From<reqwest::Error> for SpoonacularError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e)
    }
}

impl From<serde_json::Error> for SpoonacularError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for Spoonacular API operations
pub type Result<T> = std::result::Result<T, SpoonacularError>;
