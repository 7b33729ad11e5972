//! Error types for lookups

use std::fmt;

use request_throttle::ThrottleError;
use spoonacular_client::SpoonacularError;

/// A provider payload that cannot be projected into a result record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// A required identifying field is absent or wrong-typed
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    /// The body was not the JSON shape the endpoint returns
    Undecodable(String),
}

impl fmt::Display for NormalizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { record, field } => {
                write!(f, "Invalid {record} payload: missing or invalid `{field}`")
            }
            Self::Undecodable(msg) => write!(f, "Invalid provider payload: {msg}"),
        }
    }
}

impl std::error::Error for NormalizationError {}

/// Errors surfaced by lookups
///
/// Cache-store failures are never reported here; they degrade to a cache miss.
#[derive(Debug)]
pub enum LookupError {
    /// Credentials or other required configuration missing
    Configuration(String),
    /// Non-2xx provider response, with the raw body
    Provider { status: u16, body: String },
    /// The provider could not be reached (connect, timeout, body read)
    Transport(reqwest::Error),
    /// The provider payload could not be normalized
    Normalization(NormalizationError),
    /// The throttle is shut down
    Throttle(ThrottleError),
    /// The request could not be serialized for key derivation
    Serialization(serde_json::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::Provider { status, body } => write!(f, "Provider error ({status}): {body}"),
            Self::Transport(e) => write!(f, "Transport error: {e}"),
            Self::Normalization(e) => write!(f, "{e}"),
            Self::Throttle(e) => write!(f, "{e}"),
            Self::Serialization(e) => write!(f, "Serialization error: {e}"),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            Self::Normalization(e) => Some(e),
            Self::Throttle(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Configuration(_) | Self::Provider { .. } => None,
        }
    }
}

impl From<SpoonacularError> for LookupError {
    fn from(e: SpoonacularError) -> Self {
        match e {
            SpoonacularError::MissingCredentials => Self::Configuration(
                "Spoonacular credentials missing (set SPOONACULAR_API_KEY or RAPIDAPI_KEY)"
                    .to_string(),
            ),
            SpoonacularError::Throttle(e) => Self::Throttle(e),
            SpoonacularError::Transport(e) => Self::Transport(e),
            SpoonacularError::Provider { status, body } => Self::Provider { status, body },
            SpoonacularError::Json(e) => {
                Self::Normalization(NormalizationError::Undecodable(e.to_string()))
            }
        }
    }
}

impl From<NormalizationError> for LookupError {
    fn from(e: NormalizationError) -> Self {
        Self::Normalization(e)
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_is_configuration_error() {
        let err = LookupError::from(SpoonacularError::MissingCredentials);
        assert!(matches!(err, LookupError::Configuration(_)));
        assert!(err.to_string().contains("SPOONACULAR_API_KEY"));
    }

    #[test]
    fn test_provider_error_keeps_status_and_body() {
        let err = LookupError::from(SpoonacularError::Provider {
            status: 401,
            body: "{\"message\":\"bad key\"}".to_string(),
        });
        match err {
            LookupError::Provider { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("bad key"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_undecodable_body_is_normalization_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = LookupError::from(SpoonacularError::Json(json_err));
        assert!(matches!(
            err,
            LookupError::Normalization(NormalizationError::Undecodable(_))
        ));
    }

    #[test]
    fn test_missing_field_message() {
        let err = NormalizationError::MissingField {
            record: "grocery product",
            field: "id",
        };
        assert_eq!(
            err.to_string(),
            "Invalid grocery product payload: missing or invalid `id`"
        );
    }
}
