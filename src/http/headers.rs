use indexmap::IndexMap;

/// Header names the server knows about.
///
/// This list is informational: [`HeaderMap`] stores any string key, and
/// nothing rejects a header because it is missing from here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderName {
    Host,
    UserAgent,
    Accept,
    AcceptLanguage,
    AcceptEncoding,
    Connection,
    CacheControl,
    ContentType,
    ContentEncoding,
    Date,
    KeepAlive,
    Server,
    SetCookie,
    ContentLength,
    ContentRange,
}

impl HeaderName {
    /// Returns the canonical wire spelling of the header name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderName::Host => "Host",
            HeaderName::UserAgent => "User-Agent",
            HeaderName::Accept => "Accept",
            HeaderName::AcceptLanguage => "Accept-Language",
            HeaderName::AcceptEncoding => "Accept-Encoding",
            HeaderName::Connection => "Connection",
            HeaderName::CacheControl => "Cache-Control",
            HeaderName::ContentType => "Content-Type",
            HeaderName::ContentEncoding => "Content-Encoding",
            HeaderName::Date => "Date",
            HeaderName::KeepAlive => "Keep-Alive",
            HeaderName::Server => "Server",
            HeaderName::SetCookie => "Set-Cookie",
            HeaderName::ContentLength => "Content-Length",
            HeaderName::ContentRange => "Content-Range",
        }
    }

    /// Looks up a recognised header by its exact (case-sensitive) spelling.
    ///
    /// ```
    /// # use rawserve::http::headers::HeaderName;
    /// assert_eq!(HeaderName::from_str("Host"), Some(HeaderName::Host));
    /// assert_eq!(HeaderName::from_str("host"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Host" => Some(HeaderName::Host),
            "User-Agent" => Some(HeaderName::UserAgent),
            "Accept" => Some(HeaderName::Accept),
            "Accept-Language" => Some(HeaderName::AcceptLanguage),
            "Accept-Encoding" => Some(HeaderName::AcceptEncoding),
            "Connection" => Some(HeaderName::Connection),
            "Cache-Control" => Some(HeaderName::CacheControl),
            "Content-Type" => Some(HeaderName::ContentType),
            "Content-Encoding" => Some(HeaderName::ContentEncoding),
            "Date" => Some(HeaderName::Date),
            "Keep-Alive" => Some(HeaderName::KeepAlive),
            "Server" => Some(HeaderName::Server),
            "Set-Cookie" => Some(HeaderName::SetCookie),
            "Content-Length" => Some(HeaderName::ContentLength),
            "Content-Range" => Some(HeaderName::ContentRange),
            _ => None,
        }
    }
}

impl AsRef<str> for HeaderName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Ordered header collection.
///
/// Keys are compared byte-for-byte (no case folding, no trimming).
/// Inserting an existing key replaces its value in place, so the entry
/// keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: IndexMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, overwriting any earlier value for the same key.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries.insert(key.as_ref().to_string(), value.into());
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        self.entries.get(key.as_ref()).map(|v| v.as_str())
    }

    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut headers = HeaderMap::new();
        headers.insert("A", "1");
        headers.insert("B", "2");
        headers.insert("A", "3");

        let entries: Vec<_> = headers.iter().collect();
        assert_eq!(entries, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::Host, "a");
        headers.insert("host", "b");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Host"), Some("a"));
        assert_eq!(headers.get("host"), Some("b"));
    }
}
