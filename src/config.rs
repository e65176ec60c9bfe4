//! Client configuration.
//!
//! Configuration is assembled through [`SesConfigBuilder`] or loaded from
//! the standard AWS environment variables via [`SesConfig::from_env`].
//! Validation happens once at `build()` time; a constructed [`SesConfig`]
//! is always complete.

use crate::credentials::Credentials;
use crate::error::SesError;
use crate::signing::SigningScheme;
use std::time::Duration;
use thiserror::Error;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while building or loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration field was not provided.
    #[error("missing required configuration field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable was missing or unreadable.
    #[error("environment error: {message}")]
    Environment {
        /// Description of the environment problem.
        message: String,
    },
}

impl From<ConfigError> for SesError {
    fn from(err: ConfigError) -> Self {
        SesError::Configuration {
            message: err.to_string(),
        }
    }
}

/// Validated configuration for an SES client.
#[derive(Debug, Clone)]
pub struct SesConfig {
    /// AWS region, e.g. `us-east-1`.
    pub region: String,
    /// Endpoint override. When unset the regional SES endpoint is derived.
    pub endpoint: Option<String>,
    /// Credentials used to sign requests.
    pub credentials: Credentials,
    /// Which signature scheme to attach to outgoing requests.
    pub scheme: SigningScheme,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Optional `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl SesConfig {
    /// Start building a configuration.
    pub fn builder() -> SesConfigBuilder {
        SesConfigBuilder::default()
    }

    /// Load configuration from the environment.
    ///
    /// Reads `AWS_REGION` (falling back to `AWS_DEFAULT_REGION`),
    /// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and, when set,
    /// `AWS_SESSION_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Environment`] when a required variable is
    /// missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let region = std::env::var("AWS_REGION")
            .or_else(|_| std::env::var("AWS_DEFAULT_REGION"))
            .map_err(|_| ConfigError::Environment {
                message: "AWS_REGION or AWS_DEFAULT_REGION must be set".to_string(),
            })?;
        let access_key_id =
            std::env::var("AWS_ACCESS_KEY_ID").map_err(|_| ConfigError::Environment {
                message: "AWS_ACCESS_KEY_ID must be set".to_string(),
            })?;
        let secret_access_key =
            std::env::var("AWS_SECRET_ACCESS_KEY").map_err(|_| ConfigError::Environment {
                message: "AWS_SECRET_ACCESS_KEY must be set".to_string(),
            })?;

        let mut credentials = Credentials::new(access_key_id, secret_access_key);
        if let Ok(token) = std::env::var("AWS_SESSION_TOKEN") {
            if !token.is_empty() {
                credentials = credentials.with_session_token(token);
            }
        }

        SesConfigBuilder::default()
            .region(region)
            .credentials_provider(credentials)
            .build()
    }

    /// The endpoint URL requests are posted to.
    ///
    /// Uses the configured override when present, otherwise derives the
    /// regional endpoint `https://email.{region}.amazonaws.com`.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://email.{}.amazonaws.com", self.region),
        }
    }
}

/// Builder for [`SesConfig`].
#[derive(Debug, Clone, Default)]
pub struct SesConfigBuilder {
    region: Option<String>,
    endpoint: Option<String>,
    credentials: Option<Credentials>,
    scheme: SigningScheme,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SesConfigBuilder {
    /// Set the AWS region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Override the endpoint URL. Useful for testing against a local server.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set credentials from an access key ID and secret access key.
    pub fn credentials(
        self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.credentials_provider(Credentials::new(access_key_id, secret_access_key))
    }

    /// Set pre-built credentials, including a session token if present.
    pub fn credentials_provider(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Select the signature scheme. Defaults to [`SigningScheme::V4`].
    pub fn signing_scheme(mut self, scheme: SigningScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the overall request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connection establishment timeout.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// Set the `User-Agent` header sent with requests.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when region or credentials
    /// were not provided.
    pub fn build(self) -> Result<SesConfig, ConfigError> {
        let region = self
            .region
            .ok_or(ConfigError::MissingField { field: "region" })?;
        let credentials = self.credentials.ok_or(ConfigError::MissingField {
            field: "credentials",
        })?;

        Ok(SesConfig {
            region,
            endpoint: self.endpoint,
            credentials,
            scheme: self.scheme,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            connect_timeout: self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT),
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let config = SesConfig::builder()
            .region("us-east-1")
            .credentials("key", "secret")
            .build()
            .unwrap();

        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.endpoint_url(), "https://email.us-east-1.amazonaws.com");
        assert_eq!(config.scheme, SigningScheme::V4);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_builder_missing_region() {
        let err = SesConfig::builder()
            .credentials("key", "secret")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field: "region" }));
    }

    #[test]
    fn test_builder_missing_credentials() {
        let err = SesConfig::builder().region("eu-west-1").build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "credentials"
            }
        ));
    }

    #[test]
    fn test_endpoint_override() {
        let config = SesConfig::builder()
            .region("eu-west-1")
            .credentials("key", "secret")
            .endpoint("http://127.0.0.1:9999")
            .build()
            .unwrap();
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_regional_endpoint_derivation() {
        let config = SesConfig::builder()
            .region("ap-southeast-2")
            .credentials("key", "secret")
            .build()
            .unwrap();
        assert_eq!(
            config.endpoint_url(),
            "https://email.ap-southeast-2.amazonaws.com"
        );
    }
}
