//! Request signing.
//!
//! Two signature schemes are supported:
//!
//! - [`SigningScheme::V4`] (default): AWS Signature Version 4, the current
//!   authentication mechanism. Produces `Authorization`, `x-amz-date` and
//!   `x-amz-content-sha256` headers, plus `x-amz-security-token` when
//!   temporary credentials carry a session token.
//! - [`SigningScheme::V3Https`]: the legacy AWS3-HTTPS header scheme the
//!   SES query API accepted over TLS. It signs only the `Date` header with
//!   an HMAC over the date string and emits an `X-Amzn-Authorization`
//!   header. Kept for parity with older deployments; new code should use
//!   V4.

mod canonical;
mod v3;
mod v4;

pub use canonical::{canonical_headers, canonical_query_string, normalize_uri_path, uri_encode};
pub use v3::{http_date, sign_request_v3};
pub use v4::{
    build_credential_scope, derive_signing_key, format_date_stamp, format_datetime, sha256_hex,
    sign_request_v4, SigningParams, AWS_ALGORITHM, SES_SERVICE,
};

use crate::error::SesError;
use thiserror::Error;

/// Errors raised during request signing.
#[derive(Debug, Error)]
pub enum SigningError {
    /// The signature could not be computed or attached.
    #[error("{message}")]
    Failed {
        /// Description of the failure.
        message: String,
    },
}

impl From<SigningError> for SesError {
    fn from(err: SigningError) -> Self {
        SesError::Signing {
            message: err.to_string(),
        }
    }
}

/// HMAC algorithm used by the legacy AWS3-HTTPS scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    /// HMAC-SHA256 (the recommended choice).
    Sha256,
    /// HMAC-SHA1 (accepted historically; weaker).
    Sha1,
}

impl HmacAlgorithm {
    /// The algorithm label used in the `X-Amzn-Authorization` header.
    pub fn label(&self) -> &'static str {
        match self {
            HmacAlgorithm::Sha256 => "HmacSHA256",
            HmacAlgorithm::Sha1 => "HmacSHA1",
        }
    }
}

/// Which signature scheme the client attaches to outgoing requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningScheme {
    /// AWS Signature Version 4.
    #[default]
    V4,
    /// Legacy AWS3-HTTPS header signature.
    V3Https {
        /// HMAC algorithm for the date signature.
        algorithm: HmacAlgorithm,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme_is_v4() {
        assert_eq!(SigningScheme::default(), SigningScheme::V4);
    }

    #[test]
    fn test_algorithm_labels() {
        assert_eq!(HmacAlgorithm::Sha256.label(), "HmacSHA256");
        assert_eq!(HmacAlgorithm::Sha1.label(), "HmacSHA1");
    }

    #[test]
    fn test_signing_error_maps_to_ses_error() {
        let err: SesError = SigningError::Failed {
            message: "Access key ID is required".to_string(),
        }
        .into();
        assert!(
            matches!(err, SesError::Signing { ref message } if message == "Access key ID is required")
        );
    }
}
