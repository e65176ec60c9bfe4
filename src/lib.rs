//! # aws-ses-query
//!
//! A thin asynchronous client for sending email through the AWS SES
//! query API (version `2010-12-01`).
//!
//! The crate does exactly three things:
//!
//! - **Request construction**: flattens structured or raw send requests
//!   into the query API's form-urlencoded parameter shape (`member.N`
//!   recipient lists, UTF-8 charset declarations, base64 raw messages).
//! - **Request signing**: AWS Signature Version 4 by default, with the
//!   legacy AWS3-HTTPS header scheme available for older deployments.
//! - **Error normalization**: SES XML `ErrorResponse` documents become
//!   [`ApiError`]; transport failures, unparseable bodies and
//!   valid-but-unrecognized XML each get their own [`SesError`] variant,
//!   so callers always see a uniform error shape.
//!
//! There is deliberately no connection pooling beyond reqwest's own, no
//! batching, no retries and no response caching; this is a submission
//! client, not a delivery pipeline.
//!
//! ## Example
//!
//! ```no_run
//! use aws_ses_query::{SesClient, SendEmailRequest};
//!
//! # async fn example() -> Result<(), aws_ses_query::SesError> {
//! let client = SesClient::from_env()?;
//!
//! let request = SendEmailRequest::builder()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Quarterly report")
//!     .html("<h1>Numbers</h1>")
//!     .text("Numbers")
//!     .build()?;
//!
//! let response = client.send_email(request).await?;
//! println!("message id: {}", response.message_id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod builders;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod http;
pub mod query;
pub mod signing;
pub mod types;

mod xml;

pub use crate::builders::{BuilderError, EmailBuilder, RawEmailBuilder};
pub use crate::client::{SesClient, SesClientBuilder};
pub use crate::config::{ConfigError, SesConfig, SesConfigBuilder};
pub use crate::credentials::Credentials;
pub use crate::error::{ApiError, ApiErrorKind, SesError, SesResult};
pub use crate::http::{ReqwestTransport, SesResponse, Transport};
pub use crate::signing::{HmacAlgorithm, SigningScheme};
pub use crate::types::{MessageTag, SendEmailRequest, SendEmailResponse, SendRawEmailRequest};
