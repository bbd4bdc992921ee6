use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};
use std::collections::HashMap;

/// Caller-supplied request headers, name to value.
pub type HeaderParameters = HashMap<String, String>;

/// A fully read HTTP response.
///
/// The body is drained from the connection before the response is handed
/// back, so the client that produced it has already been released.
#[derive(Debug, Clone)]
pub struct WorkerResponse {
    status: StatusCode,
    version: Version,
    url: String,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl WorkerResponse {
    pub fn new(
        status: StatusCode,
        version: Version,
        url: String,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        Self {
            status,
            version,
            url,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// True when the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn version_str(&self) -> &'static str {
        version_to_string(self.version)
    }

    /// The final URL, after any redirects the client followed.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a response header value if present and valid visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Converts an HTTP version to its string representation.
pub fn version_to_string(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/1.1",
    }
}
