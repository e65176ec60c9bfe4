//! Default reqwest-backed transport.

use super::Transport;
use crate::error::{SesError, SesResult};
use async_trait::async_trait;
use std::time::Duration;

/// [`Transport`] implementation backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`SesError::Configuration`] when the underlying client
    /// cannot be constructed (for example, no TLS backend available).
    pub fn new(timeout: Duration, connect_timeout: Duration) -> SesResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| SesError::Configuration {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: reqwest::Request) -> SesResult<reqwest::Response> {
        self.client.execute(request).await.map_err(SesError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_construction() {
        let transport = ReqwestTransport::new(Duration::from_secs(30), Duration::from_secs(10));
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_transport_connection_failure_is_transport_error() {
        let transport =
            ReqwestTransport::new(Duration::from_secs(2), Duration::from_secs(1)).unwrap();
        // Port 9 (discard) on localhost is almost certainly closed.
        let request = reqwest::Request::new(
            reqwest::Method::POST,
            "http://127.0.0.1:9/".parse().unwrap(),
        );
        let err = transport.send(request).await.unwrap_err();
        assert!(matches!(err, SesError::Transport { .. }));
    }
}
