//! Buffered HTTP response.

use crate::error::SesResult;
use http::StatusCode;
use std::collections::HashMap;

/// A fully-buffered HTTP response from SES.
///
/// Responses are small XML documents, so the body is read eagerly before
/// any interpretation happens.
#[derive(Debug, Clone)]
pub struct SesResponse {
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl SesResponse {
    /// Create a response from its parts.
    pub fn new(status: StatusCode, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Buffer a `reqwest::Response`.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> SesResult<Self> {
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(Self::new(status, headers, body))
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// A header value by (case-insensitive) name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body decoded as UTF-8, lossily.
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// The AWS request ID, from whichever header variant is present.
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-amzn-requestid")
            .or_else(|| self.header("x-amz-request-id"))
            .or_else(|| self.header("x-request-id"))
    }

    /// Whether the status counts as success.
    ///
    /// SES send responses use the 2xx range, but anything below 400 is
    /// accepted so redirects surface the body rather than a parse error.
    pub fn is_success(&self) -> bool {
        let code = self.status.as_u16();
        (200..400).contains(&code)
    }
}
