//! Canonical request building for AWS Signature V4.
//!
//! Canonical requests are a standardized representation of HTTP requests
//! used in the signing process.

use http::HeaderMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters that should NOT be percent-encoded in URI paths.
///
/// RFC 3986 unreserved characters plus the path separator:
/// A-Z, a-z, 0-9, '-', '_', '.', '~' and '/'.
const URI_PATH_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Characters that should NOT be percent-encoded in query strings.
///
/// Unlike path encoding, the forward slash is encoded here.
const QUERY_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// URI-encode a string according to AWS signature requirements.
///
/// All characters except A-Z, a-z, 0-9, '-', '_', '.', and '~' are
/// percent-encoded; spaces become `%20`, never `+`. The forward slash is
/// encoded only when `encode_slash` is true (query values) and preserved
/// for paths.
///
/// # Examples
///
/// ```
/// use aws_ses_query::signing::uri_encode;
///
/// assert_eq!(uri_encode("/my-path/file.txt", false), "/my-path/file.txt");
/// assert_eq!(uri_encode("hello world", false), "hello%20world");
/// assert_eq!(uri_encode("value/with/slash", true), "value%2Fwith%2Fslash");
/// ```
pub fn uri_encode(input: &str, encode_slash: bool) -> String {
    if encode_slash {
        utf8_percent_encode(input, QUERY_SET).to_string()
    } else {
        utf8_percent_encode(input, URI_PATH_SET).to_string()
    }
}

/// Normalize a URI path.
///
/// Removes duplicate slashes, resolves `.` and `..` segments, ensures a
/// leading `/` and preserves a trailing slash.
///
/// # Examples
///
/// ```
/// use aws_ses_query::signing::normalize_uri_path;
///
/// assert_eq!(normalize_uri_path("/foo//bar"), "/foo/bar");
/// assert_eq!(normalize_uri_path("/foo/./bar"), "/foo/bar");
/// assert_eq!(normalize_uri_path("/foo/../bar"), "/bar");
/// assert_eq!(normalize_uri_path(""), "/");
/// ```
pub fn normalize_uri_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }

    let has_trailing_slash = path.ends_with('/');

    let mut segments = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    let mut result = String::from("/");
    result.push_str(&segments.join("/"));

    if has_trailing_slash && !result.ends_with('/') && result.len() > 1 {
        result.push('/');
    }

    result
}

/// Build a canonical query string from query parameters.
///
/// Parameters are URI-encoded, sorted by name then value, and joined with
/// `&`. SES send requests carry their parameters in the POST body, so the
/// canonical query string is usually empty, but pre-signed variants need
/// the full treatment.
///
/// # Examples
///
/// ```
/// use aws_ses_query::signing::canonical_query_string;
///
/// let params = vec![
///     ("Version".to_string(), "2010-12-01".to_string()),
///     ("Action".to_string(), "SendEmail".to_string()),
/// ];
/// assert_eq!(
///     canonical_query_string(&params),
///     "Action=SendEmail&Version=2010-12-01"
/// );
/// ```
pub fn canonical_query_string(query_params: &[(String, String)]) -> String {
    if query_params.is_empty() {
        return String::new();
    }

    let mut encoded_params: Vec<(String, String)> = query_params
        .iter()
        .map(|(key, value)| (uri_encode(key, true), uri_encode(value, true)))
        .collect();

    encoded_params.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    encoded_params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the canonical headers string and signed headers string.
///
/// Header names are lowercased, values trimmed with internal whitespace
/// collapsed, and entries sorted by name. Only `host`, `x-amz-*` and the
/// content headers participate in signing.
///
/// Returns a tuple of (canonical_headers, signed_headers).
pub fn canonical_headers(headers: &HeaderMap) -> (String, String) {
    use std::collections::BTreeMap;

    let mut header_map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (name, value) in headers {
        let name_lower = name.as_str().to_lowercase();
        if !should_sign_header(&name_lower) {
            continue;
        }

        let value_str = value.to_str().unwrap_or("");
        let trimmed = value_str.split_whitespace().collect::<Vec<_>>().join(" ");

        header_map.entry(name_lower).or_default().push(trimmed);
    }

    let canonical_headers_str = header_map
        .iter()
        .map(|(name, values)| format!("{}:{}\n", name, values.join(",")))
        .collect::<String>();

    let signed_headers_str = header_map
        .keys()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(";");

    (canonical_headers_str, signed_headers_str)
}

/// Whether a header participates in the signature.
fn should_sign_header(header_name: &str) -> bool {
    if header_name == "host" || header_name.starts_with("x-amz-") {
        return true;
    }

    matches!(
        header_name,
        "content-type" | "content-md5" | "content-length"
    )
}
