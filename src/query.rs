//! Flattening of send requests into SES query API parameters.
//!
//! The query API takes a flat, form-urlencoded parameter list in the POST
//! body. List-valued fields use 1-based `member.N` numbering and text
//! fields carry an explicit UTF-8 charset.

use crate::types::{MessageTag, SendEmailRequest, SendRawEmailRequest};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Query API action name for structured sends.
pub const SEND_EMAIL_ACTION: &str = "SendEmail";

/// Query API action name for raw MIME sends.
pub const SEND_RAW_EMAIL_ACTION: &str = "SendRawEmail";

/// Query API version pinned by this client.
pub const API_VERSION: &str = "2010-12-01";

/// Charset declared for subject and body data.
const CHARSET: &str = "UTF-8";

/// Flatten a [`SendEmailRequest`] into ordered wire parameters.
pub fn send_email_params(request: &SendEmailRequest) -> Vec<(String, String)> {
    let mut params = action_params(SEND_EMAIL_ACTION, &request.from);

    push_members(&mut params, "Destination.ToAddresses", &request.to);
    push_members(&mut params, "Destination.CcAddresses", &request.cc);
    push_members(&mut params, "Destination.BccAddresses", &request.bcc);
    push_members(&mut params, "ReplyToAddresses", &request.reply_to);

    push_ses_headers(
        &mut params,
        request.configuration_set.as_deref(),
        &request.tags,
    );

    params.push(("Message.Subject.Data".to_string(), request.subject.clone()));
    params.push(("Message.Subject.Charset".to_string(), CHARSET.to_string()));

    if let Some(html) = &request.html {
        params.push(("Message.Body.Html.Data".to_string(), html.clone()));
        params.push(("Message.Body.Html.Charset".to_string(), CHARSET.to_string()));
    }
    if let Some(text) = &request.text {
        params.push(("Message.Body.Text.Data".to_string(), text.clone()));
        params.push(("Message.Body.Text.Charset".to_string(), CHARSET.to_string()));
    }

    params
}

/// Flatten a [`SendRawEmailRequest`] into ordered wire parameters.
///
/// The raw MIME message goes over the wire as standard base64 in
/// `RawMessage.Data`.
pub fn send_raw_email_params(request: &SendRawEmailRequest) -> Vec<(String, String)> {
    let mut params = action_params(SEND_RAW_EMAIL_ACTION, &request.from);

    push_ses_headers(
        &mut params,
        request.configuration_set.as_deref(),
        &request.tags,
    );

    params.push((
        "RawMessage.Data".to_string(),
        BASE64.encode(&request.raw_message),
    ));

    params
}

/// Encode parameters as an `application/x-www-form-urlencoded` POST body.
pub fn form_urlencode(params: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

fn action_params(action: &str, from: &str) -> Vec<(String, String)> {
    vec![
        ("Action".to_string(), action.to_string()),
        ("Version".to_string(), API_VERSION.to_string()),
        ("Source".to_string(), from.to_string()),
    ]
}

/// Append a `member.N`-numbered list. Numbering is 1-based.
fn push_members(params: &mut Vec<(String, String)>, prefix: &str, values: &[String]) {
    for (index, value) in values.iter().enumerate() {
        params.push((format!("{}.member.{}", prefix, index + 1), value.clone()));
    }
}

fn push_ses_headers(
    params: &mut Vec<(String, String)>,
    configuration_set: Option<&str>,
    tags: &[MessageTag],
) {
    if let Some(name) = configuration_set {
        params.push(("ConfigurationSetName".to_string(), name.to_string()));
    }
    for (index, tag) in tags.iter().enumerate() {
        params.push((format!("Tags.member.{}.Name", index + 1), tag.name.clone()));
        params.push((format!("Tags.member.{}.Value", index + 1), tag.value.clone()));
    }
}
