//! Static file responder.
//!
//! Maps a parsed request to a response using only the method, the path and
//! a public root directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::http::headers::HeaderName;
use crate::http::request::{Method, Request};
use crate::http::response::{DEFAULT_HTTP_VERSION, Response, ResponseBuilder, StatusCode};

/// Path served for a request to `/`.
pub const INDEX_PATH: &str = "/index.html";

#[derive(Debug, Clone)]
pub struct Dispatcher {
    root: PathBuf,
}

impl Dispatcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Produces the response for `req`.
    ///
    /// The traversal guard only rejects paths containing `..` literally; it
    /// does not decode percent escapes or canonicalize the result.
    pub async fn dispatch(&self, req: &Request) -> Response {
        if req.method != Method::GET {
            debug!(method = %req.method, "Method not implemented");
            return Response::not_implemented();
        }

        let path = effective_path(&req.path);

        if path.contains("..") {
            debug!(path = %path, "Rejected path traversal");
            return Response::forbidden();
        }

        let file = self.resolve(path);

        match tokio::fs::read(&file).await {
            Ok(content) => {
                debug!(file = %file.display(), bytes = content.len(), "Serving file");
                ResponseBuilder::new()
                    .status(StatusCode::Ok)
                    .http_version(DEFAULT_HTTP_VERSION)
                    .header(HeaderName::ContentType, "text/html")
                    .header(HeaderName::ContentLength, content.len().to_string())
                    .header(HeaderName::Connection, "close")
                    .payload(content)
                    .build()
            }
            Err(e) => {
                debug!(file = %file.display(), error = %e, "File not readable");
                ResponseBuilder::new()
                    .not_found(DEFAULT_HTTP_VERSION)
                    .payload("File Not Found")
                    .build()
            }
        }
    }

    /// Joins a request path under the root without canonicalizing it.
    pub fn resolve(&self, path: &str) -> PathBuf {
        // An absolute component would replace the root in `Path::join`.
        self.root.join(path.trim_start_matches('/'))
    }
}

/// `/` becomes [`INDEX_PATH`]; anything else is used verbatim.
pub fn effective_path(path: &str) -> &str {
    if path == "/" { INDEX_PATH } else { path }
}
