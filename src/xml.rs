//! XML response parsing for the SES query API.
//!
//! Successful sends return a `SendEmailResponse` or `SendRawEmailResponse`
//! document; failures return an `ErrorResponse` document. Parsing walks
//! quick-xml events and matches on element names rather than full paths,
//! which tolerates the namespace attributes and wrapper elements AWS
//! varies between services.

use crate::error::{ApiError, ApiErrorKind};
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Parse failures for response bodies.
#[derive(Debug, Error)]
pub(crate) enum XmlError {
    /// The body was not well-formed XML.
    #[error("{0}")]
    Parse(#[from] quick_xml::Error),

    /// The document ended before all open elements were closed.
    ///
    /// quick-xml reports a plain `Eof` for truncated documents, so this
    /// is detected by element-depth bookkeeping rather than a reader
    /// error.
    #[error("unexpected end of XML document")]
    Truncated,

    /// The body contained no XML elements at all.
    #[error("response body is not XML")]
    NotXml,

    /// The document parsed but a required element was absent.
    #[error("response is missing {0}")]
    MissingElement(&'static str),
}

/// Outcome of parsing a non-success response body.
#[derive(Debug)]
pub(crate) enum ErrorBody {
    /// A recognized `ErrorResponse` document.
    Error(ApiError),
    /// Well-formed XML that is not an SES error document.
    NotAnError,
}

/// Parse a success body, returning `(message_id, request_id)`.
pub(crate) fn parse_send_response(body: &str) -> Result<(String, Option<String>), XmlError> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut current_element = String::new();
    let mut saw_element = false;
    let mut depth = 0usize;
    let mut message_id: Option<String> = None;
    let mut request_id: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                saw_element = true;
                depth += 1;
                current_element = String::from_utf8_lossy(e.name().as_ref()).to_string();
            }
            Event::Empty(_) => saw_element = true,
            Event::Text(e) => {
                let text = e.unescape()?.to_string();
                match current_element.as_str() {
                    "MessageId" => message_id = Some(text),
                    "RequestId" => request_id = Some(text),
                    _ => {}
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                current_element.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_element {
        return Err(XmlError::NotXml);
    }
    if depth > 0 {
        return Err(XmlError::Truncated);
    }

    match message_id {
        Some(id) => Ok((id, request_id)),
        None => Err(XmlError::MissingElement("MessageId")),
    }
}

/// Parse a failure body into a normalized error, when it is one.
pub(crate) fn parse_error_body(body: &str) -> Result<ErrorBody, XmlError> {
    let mut reader = Reader::from_str(body);
    reader.trim_text(true);

    let mut current_element = String::new();
    let mut saw_element = false;
    let mut depth = 0usize;
    let mut saw_error_response = false;
    let mut error_type: Option<String> = None;
    let mut code: Option<String> = None;
    let mut message: Option<String> = None;
    let mut request_id: Option<String> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                saw_element = true;
                depth += 1;
                current_element = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if current_element == "ErrorResponse" {
                    saw_error_response = true;
                }
            }
            Event::Empty(_) => saw_element = true,
            Event::Text(e) => {
                let text = e.unescape()?.to_string();
                match current_element.as_str() {
                    "Type" => error_type = Some(text),
                    "Code" => code = Some(text),
                    "Message" => message = Some(text),
                    "RequestId" => request_id = Some(text),
                    _ => {}
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                current_element.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_element {
        return Err(XmlError::NotXml);
    }
    if depth > 0 {
        return Err(XmlError::Truncated);
    }

    if !saw_error_response || code.is_none() {
        return Ok(ErrorBody::NotAnError);
    }

    Ok(ErrorBody::Error(ApiError {
        kind: error_type
            .as_deref()
            .map(ApiErrorKind::from_type)
            .unwrap_or_else(|| ApiErrorKind::Unknown("Unknown".to_string())),
        code: code.unwrap_or_default(),
        message: message.unwrap_or_default(),
        request_id,
    }))
}
