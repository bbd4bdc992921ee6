//! Convenience decoding of response bodies.

use super::types::WorkerResponse;
use crate::error::{Result, WorkerError};
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extension trait for decoding a response body as text or JSON.
pub trait ResponseExt {
    /// Returns the body as a string, decoded with the `charset` declared in
    /// `Content-Type` (UTF-8 when absent or unknown). A byte order mark
    /// overrides the declared charset. Malformed sequences are replaced.
    fn as_text(&self) -> String;

    /// Parses the body as a generic JSON tree.
    ///
    /// Malformed JSON is logged and returned as [`WorkerError::Parse`].
    fn as_json_tree(&self) -> Result<Value>;

    /// Parses the body into `T`.
    ///
    /// A shape mismatch is returned as [`WorkerError::Deserialize`] without
    /// being logged.
    fn as_typed<T: DeserializeOwned>(&self) -> Result<T>;
}

impl ResponseExt for WorkerResponse {
    fn as_text(&self) -> String {
        let encoding = self
            .header(CONTENT_TYPE.as_str())
            .and_then(charset_label)
            .and_then(|label| Encoding::for_label(label.as_bytes()))
            .unwrap_or(UTF_8);
        let (text, _, _) = encoding.decode(self.body());
        text.into_owned()
    }

    fn as_json_tree(&self) -> Result<Value> {
        serde_json::from_str(&self.as_text()).map_err(|e| {
            tracing::error!(url = %self.url(), error = %e, "Response body is not valid JSON");
            WorkerError::Parse(e)
        })
    }

    fn as_typed<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.as_text()).map_err(WorkerError::Deserialize)
    }
}

/// Extracts the `charset` parameter from a `Content-Type` value.
fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}
