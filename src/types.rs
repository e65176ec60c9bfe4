//! Request and response types for the send operations.

use crate::builders::{EmailBuilder, RawEmailBuilder};

/// A name/value tag attached to a sent message.
///
/// Tags flow into SES event publishing for the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTag {
    /// Tag name.
    pub name: String,
    /// Tag value.
    pub value: String,
}

impl MessageTag {
    /// Create a new message tag.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A structured email send request (the `SendEmail` action).
///
/// Construct via [`SendEmailRequest::builder`], which enforces the required
/// fields.
#[derive(Debug, Clone)]
pub struct SendEmailRequest {
    /// Sender address.
    pub from: String,
    /// Primary recipients.
    pub to: Vec<String>,
    /// Carbon-copy recipients.
    pub cc: Vec<String>,
    /// Blind-carbon-copy recipients.
    pub bcc: Vec<String>,
    /// Reply-to addresses.
    pub reply_to: Vec<String>,
    /// Message subject.
    pub subject: String,
    /// HTML body.
    pub html: Option<String>,
    /// Plain-text alternative body.
    pub text: Option<String>,
    /// Configuration set name for event publishing.
    pub configuration_set: Option<String>,
    /// Message tags.
    pub tags: Vec<MessageTag>,
}

impl SendEmailRequest {
    /// Start building a send request.
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }
}

/// A raw MIME send request (the `SendRawEmail` action).
///
/// The raw message must be a complete MIME document including its own
/// headers; recipients are taken from the MIME headers by SES.
#[derive(Debug, Clone)]
pub struct SendRawEmailRequest {
    /// Sender address.
    pub from: String,
    /// The complete raw MIME message.
    pub raw_message: Vec<u8>,
    /// Configuration set name for event publishing.
    pub configuration_set: Option<String>,
    /// Message tags.
    pub tags: Vec<MessageTag>,
}

impl SendRawEmailRequest {
    /// Start building a raw send request.
    pub fn builder() -> RawEmailBuilder {
        RawEmailBuilder::default()
    }
}

/// Outcome of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendEmailResponse {
    /// The SES message ID assigned to the accepted message.
    pub message_id: String,
    /// Request ID for support correlation, when reported.
    pub request_id: Option<String>,
}
