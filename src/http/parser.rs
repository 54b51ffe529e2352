use thiserror::Error;

use crate::http::headers::HeaderMap;
use crate::http::request::{Method, Request};

/// Failure to decode a request line. Carries no further detail; the
/// request is either fully parsed or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Missing method, path or version token
    #[error("malformed request line")]
    InvalidRequest,
    /// Method token is not one of the known methods
    #[error("unknown request method")]
    InvalidMethod,
}

/// Decodes a buffered header block into a [`Request`].
///
/// Lines are split on `\n`. The first line must hold method, path and
/// version separated by single spaces. Every following non-blank line is
/// treated as a header, including lines after the blank separator line;
/// the payload is never extracted.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let text = String::from_utf8_lossy(buf);
    let mut lines = text.split('\n');

    // Request line
    let request_line = lines.next().unwrap_or_default().trim();
    let mut parts = request_line.split(' ');

    let method_str = next_token(&mut parts)?;
    let path = next_token(&mut parts)?;
    let version = next_token(&mut parts)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    // Headers
    let mut headers = HeaderMap::new();

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }

        // Lines without a colon or with an empty name are ignored
        if let Some((key, value)) = line.split_once(':').filter(|(k, _)| !k.is_empty()) {
            headers.insert(key, value.trim());
        }
    }

    Ok(Request {
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        payload: None,
    })
}

fn next_token<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Result<&'a str, ParseError> {
    parts
        .next()
        .filter(|token| !token.is_empty())
        .ok_or(ParseError::InvalidRequest)
}
