//! Fluent builders for send requests.
//!
//! Builders perform the same local validation the service would reject a
//! request for, so obviously incomplete requests fail before any network
//! traffic. The validation messages are stable and part of the public
//! contract.
//!
//! # Examples
//!
//! ```
//! use aws_ses_query::SendEmailRequest;
//!
//! let request = SendEmailRequest::builder()
//!     .from("sender@example.com")
//!     .to("recipient@example.com")
//!     .subject("Greetings")
//!     .html("<p>Hello</p>")
//!     .text("Hello")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(request.to, vec!["recipient@example.com"]);
//! ```

use crate::error::SesError;
use crate::types::{MessageTag, SendEmailRequest, SendRawEmailRequest};
use thiserror::Error;

/// Errors raised when a builder is missing a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// A required field was not provided.
    #[error("{0}")]
    MissingField(&'static str),
}

impl From<BuilderError> for SesError {
    fn from(err: BuilderError) -> Self {
        SesError::Validation {
            message: err.to_string(),
        }
    }
}

/// Builder for [`SendEmailRequest`].
#[derive(Debug, Clone, Default)]
pub struct EmailBuilder {
    from: Option<String>,
    to: Vec<String>,
    cc: Vec<String>,
    bcc: Vec<String>,
    reply_to: Vec<String>,
    subject: Option<String>,
    html: Option<String>,
    text: Option<String>,
    configuration_set: Option<String>,
    tags: Vec<MessageTag>,
}

impl EmailBuilder {
    /// Set the sender address.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Add a primary recipient.
    pub fn to(mut self, address: impl Into<String>) -> Self {
        self.to.push(address.into());
        self
    }

    /// Add several primary recipients.
    pub fn to_addresses<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to.extend(addresses.into_iter().map(Into::into));
        self
    }

    /// Add a carbon-copy recipient.
    pub fn cc(mut self, address: impl Into<String>) -> Self {
        self.cc.push(address.into());
        self
    }

    /// Add several carbon-copy recipients.
    pub fn cc_addresses<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cc.extend(addresses.into_iter().map(Into::into));
        self
    }

    /// Add a blind-carbon-copy recipient.
    pub fn bcc(mut self, address: impl Into<String>) -> Self {
        self.bcc.push(address.into());
        self
    }

    /// Add several blind-carbon-copy recipients.
    pub fn bcc_addresses<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bcc.extend(addresses.into_iter().map(Into::into));
        self
    }

    /// Add a reply-to address.
    pub fn reply_to(mut self, address: impl Into<String>) -> Self {
        self.reply_to.push(address.into());
        self
    }

    /// Set the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the HTML body.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Set the plain-text alternative body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the configuration set name.
    pub fn configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set = Some(name.into());
        self
    }

    /// Add a message tag.
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(MessageTag::new(name, value));
        self
    }

    /// Validate and produce the request.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingField`] when no recipient was given
    /// ("To, Cc or Bcc is required"), the subject is missing ("Subject is
    /// required") or the sender is missing ("From is required").
    pub fn build(self) -> Result<SendEmailRequest, BuilderError> {
        if self.to.is_empty() && self.cc.is_empty() && self.bcc.is_empty() {
            return Err(BuilderError::MissingField("To, Cc or Bcc is required"));
        }
        let subject = match self.subject {
            Some(subject) => subject,
            None => return Err(BuilderError::MissingField("Subject is required")),
        };
        let from = match self.from {
            Some(from) => from,
            None => return Err(BuilderError::MissingField("From is required")),
        };

        Ok(SendEmailRequest {
            from,
            to: self.to,
            cc: self.cc,
            bcc: self.bcc,
            reply_to: self.reply_to,
            subject,
            html: self.html,
            text: self.text,
            configuration_set: self.configuration_set,
            tags: self.tags,
        })
    }
}

/// Builder for [`SendRawEmailRequest`].
#[derive(Debug, Clone, Default)]
pub struct RawEmailBuilder {
    from: Option<String>,
    raw_message: Option<Vec<u8>>,
    configuration_set: Option<String>,
    tags: Vec<MessageTag>,
}

impl RawEmailBuilder {
    /// Set the sender address.
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the complete raw MIME message.
    pub fn raw_message(mut self, raw_message: impl Into<Vec<u8>>) -> Self {
        self.raw_message = Some(raw_message.into());
        self
    }

    /// Set the configuration set name.
    pub fn configuration_set(mut self, name: impl Into<String>) -> Self {
        self.configuration_set = Some(name.into());
        self
    }

    /// Add a message tag.
    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(MessageTag::new(name, value));
        self
    }

    /// Validate and produce the request.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingField`] when the raw message is
    /// missing ("Raw message is required") or the sender is missing ("From
    /// is required").
    pub fn build(self) -> Result<SendRawEmailRequest, BuilderError> {
        let raw_message = match self.raw_message {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(BuilderError::MissingField("Raw message is required")),
        };
        let from = match self.from {
            Some(from) => from,
            None => return Err(BuilderError::MissingField("From is required")),
        };

        Ok(SendRawEmailRequest {
            from,
            raw_message,
            configuration_set: self.configuration_set,
            tags: self.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SendEmailRequest;

    #[test]
    fn test_build_full_email() {
        let request = SendEmailRequest::builder()
            .from("sender@example.com")
            .to("a@example.com")
            .to("b@example.com")
            .cc("c@example.com")
            .bcc_addresses(vec!["d@example.com", "e@example.com"])
            .reply_to("replies@example.com")
            .subject("Hello")
            .html("<b>hi</b>")
            .text("hi")
            .configuration_set("my-config-set")
            .tag("campaign", "launch")
            .build()
            .unwrap();

        assert_eq!(request.from, "sender@example.com");
        assert_eq!(request.to, vec!["a@example.com", "b@example.com"]);
        assert_eq!(request.cc, vec!["c@example.com"]);
        assert_eq!(request.bcc, vec!["d@example.com", "e@example.com"]);
        assert_eq!(request.reply_to, vec!["replies@example.com"]);
        assert_eq!(request.subject, "Hello");
        assert_eq!(request.configuration_set.as_deref(), Some("my-config-set"));
        assert_eq!(request.tags.len(), 1);
    }

    #[test]
    fn test_recipient_required() {
        let err = SendEmailRequest::builder()
            .from("sender@example.com")
            .subject("Hello")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "To, Cc or Bcc is required");
    }

    #[test]
    fn test_cc_alone_satisfies_recipient_rule() {
        let request = SendEmailRequest::builder()
            .from("sender@example.com")
            .cc("c@example.com")
            .subject("Hello")
            .build()
            .unwrap();
        assert!(request.to.is_empty());
        assert_eq!(request.cc, vec!["c@example.com"]);
    }

    #[test]
    fn test_bcc_alone_satisfies_recipient_rule() {
        assert!(SendEmailRequest::builder()
            .from("sender@example.com")
            .bcc("b@example.com")
            .subject("Hello")
            .build()
            .is_ok());
    }

    #[test]
    fn test_subject_required() {
        let err = SendEmailRequest::builder()
            .from("sender@example.com")
            .to("recipient@example.com")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Subject is required");
    }

    #[test]
    fn test_from_required() {
        let err = SendEmailRequest::builder()
            .to("recipient@example.com")
            .subject("Hello")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "From is required");
    }

    #[test]
    fn test_validation_order_checks_recipients_first() {
        // Nothing at all set: the recipient rule fires before subject/from.
        let err = SendEmailRequest::builder().build().unwrap_err();
        assert_eq!(err.to_string(), "To, Cc or Bcc is required");
    }

    #[test]
    fn test_raw_message_required() {
        let err = SendRawEmailRequest::builder()
            .from("sender@example.com")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Raw message is required");

        let err = SendRawEmailRequest::builder()
            .from("sender@example.com")
            .raw_message(Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Raw message is required");
    }

    #[test]
    fn test_raw_from_required() {
        let err = SendRawEmailRequest::builder()
            .raw_message(b"From: a@example.com\r\n\r\nbody".to_vec())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "From is required");
    }

    #[test]
    fn test_build_raw_email() {
        let request = SendRawEmailRequest::builder()
            .from("sender@example.com")
            .raw_message(b"From: sender@example.com\r\n\r\nbody".to_vec())
            .configuration_set("events")
            .tag("kind", "receipt")
            .build()
            .unwrap();

        assert_eq!(request.from, "sender@example.com");
        assert!(request.raw_message.starts_with(b"From:"));
        assert_eq!(request.configuration_set.as_deref(), Some("events"));
        assert_eq!(request.tags.len(), 1);
    }

    #[test]
    fn test_builder_error_maps_to_validation() {
        let err: SesError = BuilderError::MissingField("Subject is required").into();
        assert!(matches!(err, SesError::Validation { ref message } if message == "Subject is required"));
    }
}
