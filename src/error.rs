//! Error types for the SES query API client.
//!
//! Every fallible operation in this crate surfaces a [`SesError`]. Failures
//! reported by the service itself (an `ErrorResponse` XML document) are
//! normalized into [`ApiError`], while transport problems and unparseable
//! or unrecognized response bodies get their own variants so callers can
//! always tell which stage of a send attempt broke.

use thiserror::Error;

/// Convenience result alias used throughout the crate.
pub type SesResult<T> = std::result::Result<T, SesError>;

/// Top-level error type for all SES client operations.
#[derive(Debug, Error)]
pub enum SesError {
    /// Client construction or configuration failed.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// Request signing failed.
    #[error("signing error: {message}")]
    Signing {
        /// Description of the signing failure.
        message: String,
    },

    /// A request failed local validation before it was sent.
    #[error("{message}")]
    Validation {
        /// The validation message, e.g. `Subject is required`.
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the transport failure.
        message: String,
        /// Underlying error, when one is available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// SES returned a well-formed error document.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be parsed as XML.
    #[error("malformed response (status {status}): {message}")]
    MalformedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// Description of the parse failure.
        message: String,
    },

    /// The response body was valid XML but not a shape this client knows.
    ///
    /// AWS has historically served generic service-disruption XML from SES
    /// endpoints during outages; those documents parse cleanly but carry no
    /// `ErrorResponse` element.
    #[error("unexpected response (status {status})")]
    UnexpectedResponse {
        /// HTTP status code of the response.
        status: u16,
        /// The raw response body, preserved for inspection.
        body: String,
    },
}

impl SesError {
    /// Request ID associated with this error, if SES reported one.
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SesError::Api(err) => err.request_id.as_deref(),
            _ => None,
        }
    }

    /// Whether retrying the same request might succeed.
    ///
    /// This is informational only; the client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            SesError::Transport { .. } => true,
            SesError::Api(err) => err.is_retryable(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SesError {
    fn from(err: reqwest::Error) -> Self {
        SesError::Transport {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// A normalized SES error document.
///
/// SES reports request failures as an XML `ErrorResponse` containing an
/// `Error` element with `Type`, `Code` and `Message` children plus a
/// top-level `RequestId`. This struct is the parsed form of that document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Who AWS blames for the failure.
    pub kind: ApiErrorKind,
    /// The SES error code, e.g. `MessageRejected` or `Throttling`.
    pub code: String,
    /// Human-readable description from SES.
    pub message: String,
    /// Request ID for support correlation, when present.
    pub request_id: Option<String>,
}

impl ApiError {
    /// Whether this error indicates request throttling.
    ///
    /// SES reports send-rate throttling as `Throttling` or
    /// `MaxSendRateExceeded`; other AWS services use
    /// `ThrottlingException` for the same condition.
    pub fn is_throttling(&self) -> bool {
        matches!(
            self.code.as_str(),
            "Throttling" | "ThrottlingException" | "MaxSendRateExceeded"
        )
    }

    /// Whether retrying the same request might succeed.
    pub fn is_retryable(&self) -> bool {
        self.is_throttling()
            || self.kind == ApiErrorKind::Receiver
            || self.code == "ServiceUnavailable"
            || self.code == "RequestTimeout"
    }
}

/// The `Type` field of an SES error document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request was at fault (bad parameters, unverified identity).
    Sender,
    /// The service was at fault.
    Receiver,
    /// A type string this client does not recognize.
    Unknown(String),
}

impl ApiErrorKind {
    /// Map the raw `Type` element text onto a kind.
    pub fn from_type(raw: &str) -> Self {
        match raw {
            "Sender" => ApiErrorKind::Sender,
            "Receiver" => ApiErrorKind::Receiver,
            other => ApiErrorKind::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorKind::Sender => f.write_str("Sender"),
            ApiErrorKind::Receiver => f.write_str("Receiver"),
            ApiErrorKind::Unknown(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(kind: ApiErrorKind, code: &str) -> ApiError {
        ApiError {
            kind,
            code: code.to_string(),
            message: "test message".to_string(),
            request_id: Some("abc-123".to_string()),
        }
    }

    #[test]
    fn test_api_error_display() {
        let err = api_error(ApiErrorKind::Sender, "MessageRejected");
        assert_eq!(err.to_string(), "MessageRejected: test message");
    }

    #[test]
    fn test_api_error_throttling() {
        assert!(api_error(ApiErrorKind::Sender, "Throttling").is_throttling());
        assert!(api_error(ApiErrorKind::Sender, "ThrottlingException").is_throttling());
        assert!(api_error(ApiErrorKind::Sender, "MaxSendRateExceeded").is_throttling());
        assert!(!api_error(ApiErrorKind::Sender, "MessageRejected").is_throttling());
    }

    #[test]
    fn test_api_error_retryable() {
        assert!(api_error(ApiErrorKind::Sender, "Throttling").is_retryable());
        assert!(api_error(ApiErrorKind::Receiver, "InternalFailure").is_retryable());
        assert!(api_error(ApiErrorKind::Sender, "ServiceUnavailable").is_retryable());
        assert!(!api_error(ApiErrorKind::Sender, "MessageRejected").is_retryable());
    }

    #[test]
    fn test_error_kind_from_type() {
        assert_eq!(ApiErrorKind::from_type("Sender"), ApiErrorKind::Sender);
        assert_eq!(ApiErrorKind::from_type("Receiver"), ApiErrorKind::Receiver);
        assert_eq!(
            ApiErrorKind::from_type("Gateway"),
            ApiErrorKind::Unknown("Gateway".to_string())
        );
    }

    #[test]
    fn test_ses_error_request_id() {
        let err = SesError::Api(api_error(ApiErrorKind::Sender, "MessageRejected"));
        assert_eq!(err.request_id(), Some("abc-123"));

        let err = SesError::Validation {
            message: "Subject is required".to_string(),
        };
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn test_ses_error_retryable() {
        let err = SesError::Transport {
            message: "connection refused".to_string(),
            source: None,
        };
        assert!(err.is_retryable());

        let err = SesError::UnexpectedResponse {
            status: 503,
            body: "<Outage/>".to_string(),
        };
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_validation_error_display_is_bare_message() {
        let err = SesError::Validation {
            message: "From is required".to_string(),
        };
        assert_eq!(err.to_string(), "From is required");
    }
}
