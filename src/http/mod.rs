//! HTTP transport layer.
//!
//! The client talks to SES through the [`Transport`] trait so tests can
//! substitute a fake. The default implementation, [`ReqwestTransport`],
//! wraps a `reqwest::Client` configured with the request and connect
//! timeouts from the client configuration.

mod response;
mod transport;

pub use response::SesResponse;
pub use transport::ReqwestTransport;

use crate::error::SesResult;
use async_trait::async_trait;

/// Abstraction over the HTTP stack used to reach SES.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a prepared request and return the raw response.
    async fn send(&self, request: reqwest::Request) -> SesResult<reqwest::Response>;
}
