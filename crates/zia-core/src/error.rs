use std::time::Duration;

use thiserror::Error;

/// Result type alias for ZIA operations
pub type Result<T> = std::result::Result<T, ZiaError>;

/// Errors that can occur when mutating the ZIA denylist
#[derive(Error, Debug)]
pub enum ZiaError {
    /// The candidate domain failed local validation
    #[error("invalid domain: '{input}'")]
    InvalidDomain {
        /// The raw input as supplied by the caller
        input: String,
    },

    /// The OAuth2 client-credentials exchange failed
    #[error("token request failed: {status} {message}")]
    Auth {
        /// HTTP status returned by the token endpoint
        status: u16,
        /// Response body from the token endpoint
        message: String,
    },

    /// Too many API requests; the provider asked us to back off
    #[error("rate limited, reset in {reset} seconds")]
    RateLimited {
        /// Seconds until the rate-limit window resets
        reset: u64,
    },

    /// Another editor holds the provider-side configuration lock
    #[error("configuration is locked by another editor")]
    EditLocked,

    /// The provider is in a read-only maintenance window
    #[error("provider is in read-only maintenance mode")]
    ReadOnly,

    /// Transient provider-side failure
    #[error("server error: {status}")]
    Server {
        /// HTTP status code (500 and above)
        status: u16,
    },

    /// Fatal client error returned by the API
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body from the API
        message: String,
    },

    /// HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The denylist was pushed but the activation call failed.
    ///
    /// The policy store holds the new entry; the change is not live.
    /// Callers may retry activation alone rather than repeating the push.
    #[error("denylist updated but activation failed: {0}")]
    Activation(#[source] Box<ZiaError>),

    /// The operation was cancelled before it completed
    #[error("operation cancelled")]
    Cancelled,
}

impl ZiaError {
    /// Returns true if the error is a transient provider condition worth
    /// retrying
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::EditLocked | Self::ReadOnly | Self::Server { .. }
        )
    }

    /// Condition-specific wait the provider recommends before the next
    /// attempt, independent of the dispatcher's own backoff curve
    #[must_use]
    pub const fn advised_wait(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { reset } => Some(Duration::from_secs(*reset)),
            Self::EditLocked => Some(Duration::from_secs(5)),
            Self::ReadOnly => Some(Duration::from_secs(30)),
            _ => None,
        }
    }

    /// Returns the HTTP status code if one was observed
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::EditLocked => Some(409),
            Self::ReadOnly => Some(403),
            Self::Auth { status, .. } | Self::Server { status } | Self::Api { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_conditions_are_retryable() {
        assert!(ZiaError::RateLimited { reset: 3 }.is_retryable());
        assert!(ZiaError::EditLocked.is_retryable());
        assert!(ZiaError::ReadOnly.is_retryable());
        assert!(ZiaError::Server { status: 503 }.is_retryable());
    }

    #[test]
    fn fatal_errors_are_not_retryable() {
        let api = ZiaError::Api {
            status: 403,
            message: "forbidden".into(),
        };
        assert!(!api.is_retryable());
        assert!(!ZiaError::Auth {
            status: 401,
            message: String::new()
        }
        .is_retryable());
        assert!(!ZiaError::Cancelled.is_retryable());
    }

    #[test]
    fn advised_waits_match_provider_contract() {
        assert_eq!(
            ZiaError::RateLimited { reset: 3 }.advised_wait(),
            Some(Duration::from_secs(3))
        );
        assert_eq!(
            ZiaError::EditLocked.advised_wait(),
            Some(Duration::from_secs(5))
        );
        assert_eq!(
            ZiaError::ReadOnly.advised_wait(),
            Some(Duration::from_secs(30))
        );
        assert_eq!(ZiaError::Server { status: 500 }.advised_wait(), None);
    }
}
