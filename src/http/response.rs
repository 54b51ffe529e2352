use crate::http::headers::{HeaderMap, HeaderName};
use crate::http::writer::serialize_response;

/// Version used by the presets when none is given.
pub const DEFAULT_HTTP_VERSION: &str = "1.1";

/// HTTP status codes the server produces.
///
/// - `Ok` (200): File served
/// - `Forbidden` (403): Path rejected by the traversal guard
/// - `NotFound` (404): File missing or unreadable
/// - `InternalServerError` (500): Server error
/// - `NotImplemented` (501): Method other than GET
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use rawserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use rawserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::Forbidden.reason_phrase(), "Forbidden");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Nothing is derived automatically: a `Content-Length` header is only sent
/// when the caller sets one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Numeric status code
    pub status_code: u16,
    /// Text after the status code on the status line
    pub reason_phrase: String,
    /// Full version token, e.g. "HTTP/1.1"
    pub http_version: String,
    /// Headers in insertion order
    pub headers: HeaderMap,
    /// Raw payload bytes
    pub payload: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// Starts out as `HTTP/1.1 200 OK` with no headers and an empty payload.
///
/// # Example
///
/// ```
/// # use rawserve::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new()
///     .status(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .payload("hi")
///     .build();
/// assert_eq!(response.message(), b"HTTP/1.1 200 OK\r\nContent-Type:text/plain\r\n\r\nhi");
/// ```
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status_code: u16,
    reason_phrase: String,
    http_version: String,
    headers: HeaderMap,
    payload: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            status_code: StatusCode::Ok.as_u16(),
            reason_phrase: StatusCode::Ok.reason_phrase().to_string(),
            http_version: format!("HTTP/{}", DEFAULT_HTTP_VERSION),
            headers: HeaderMap::new(),
            payload: Vec::new(),
        }
    }

    /// Sets status code and reason phrase together.
    pub fn status(self, status: StatusCode) -> Self {
        self.status_code(status.as_u16())
            .reason_phrase(status.reason_phrase())
    }

    pub fn status_code(mut self, code: u16) -> Self {
        self.status_code = code;
        self
    }

    pub fn reason_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.reason_phrase = phrase.into();
        self
    }

    /// Sets the version; `"1.1"` is stored as `"HTTP/1.1"`.
    pub fn http_version(mut self, version: &str) -> Self {
        self.http_version = format!("HTTP/{}", version);
        self
    }

    /// Adds or replaces a header.
    ///
    /// # Example
    ///
    /// ```ignore
    /// builder.header(HeaderName::ContentType, "text/plain")
    ///     .header("X-Custom", "yes")
    /// ```
    pub fn header(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(key, value);
        self
    }

    /// Sets the response payload.
    pub fn payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = payload.into();
        self
    }

    /// 403 Forbidden with no headers.
    pub fn forbidden(self, version: &str) -> Self {
        self.status(StatusCode::Forbidden).http_version(version)
    }

    /// 404 Not Found, plain text, `Connection: close`.
    pub fn not_found(self, version: &str) -> Self {
        self.status(StatusCode::NotFound)
            .http_version(version)
            .header(HeaderName::ContentType, "text/plain")
            .header(HeaderName::Connection, "close")
    }

    /// 500 Internal Server Error, plain text, `Connection: close`.
    pub fn server_error(self, version: &str) -> Self {
        self.status(StatusCode::InternalServerError)
            .http_version(version)
            .header(HeaderName::ContentType, "text/plain")
            .header(HeaderName::Connection, "close")
    }

    /// Builds the final Response.
    pub fn build(self) -> Response {
        Response {
            status_code: self.status_code,
            reason_phrase: self.reason_phrase,
            http_version: self.http_version,
            headers: self.headers,
            payload: self.payload,
        }
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// Serializes the response into wire bytes.
    pub fn message(&self) -> Vec<u8> {
        serialize_response(self)
    }

    pub fn header(&self, key: impl AsRef<str>) -> Option<&str> {
        self.headers.get(key)
    }

    pub fn forbidden() -> Self {
        ResponseBuilder::new()
            .forbidden(DEFAULT_HTTP_VERSION)
            .build()
    }

    pub fn not_found() -> Self {
        ResponseBuilder::new()
            .not_found(DEFAULT_HTTP_VERSION)
            .build()
    }

    pub fn server_error() -> Self {
        ResponseBuilder::new()
            .server_error(DEFAULT_HTTP_VERSION)
            .build()
    }

    /// 501 with a short plain-text explanation.
    pub fn not_implemented() -> Self {
        ResponseBuilder::new()
            .status(StatusCode::NotImplemented)
            .header(HeaderName::ContentType, "text/plain")
            .header(HeaderName::Connection, "close")
            .payload("501 Not Implemented")
            .build()
    }
}
