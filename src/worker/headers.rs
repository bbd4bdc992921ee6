//! Header injection for outgoing requests.

use super::types::HeaderParameters;
use crate::error::{Result, WorkerError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::str::FromStr;

/// Adds caller-supplied headers to a client's default header set.
///
/// Entries whose name is already present (compared case-insensitively) are
/// skipped, so existing defaults are never overwritten. Iteration follows the
/// map's order, which is unspecified.
pub fn inject_headers(defaults: &mut HeaderMap, headers: Option<&HeaderParameters>) -> Result<()> {
    let Some(headers) = headers else {
        return Ok(());
    };

    for (key, value) in headers {
        let name = HeaderName::from_str(key)
            .map_err(|e| WorkerError::InvalidHeader(format!("{}: {}", key, e)))?;
        if defaults.contains_key(&name) {
            tracing::trace!(header = %name, "Header already present, skipping");
            continue;
        }
        let value = HeaderValue::from_str(value)
            .map_err(|e| WorkerError::InvalidHeader(format!("{}: {}", key, e)))?;
        defaults.insert(name, value);
    }

    Ok(())
}
