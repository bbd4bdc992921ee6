//! JSON request body encoding.

use crate::error::{Result, WorkerError};
use crate::infra::compressor::{Compressor, GzipCompressor};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_ENCODING, CONTENT_TYPE};
use serde::Serialize;

/// Content type attached to every JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// An encoded request body ready to attach to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    /// Value for the `Content-Encoding` header, if the bytes are compressed.
    pub content_encoding: Option<&'static str>,
}

impl EncodedBody {
    /// Entity headers describing the bytes: `Content-Type`, plus
    /// `Content-Encoding` when compressed.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.content_type));
        if let Some(encoding) = self.content_encoding {
            headers.insert(CONTENT_ENCODING, HeaderValue::from_static(encoding));
        }
        headers
    }
}

/// Serializes `body` to UTF-8 JSON text.
pub fn encode_json<B>(body: &B) -> Result<EncodedBody>
where
    B: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(body).map_err(WorkerError::Serialize)?;
    Ok(EncodedBody {
        bytes,
        content_type: JSON_CONTENT_TYPE,
        content_encoding: None,
    })
}

/// Serializes `body` to JSON text and gzip-compresses the result.
pub fn encode_json_compressed<B>(body: &B) -> Result<EncodedBody>
where
    B: Serialize + ?Sized,
{
    compress(encode_json(body)?, &GzipCompressor::new())
}

fn compress(plain: EncodedBody, compressor: &dyn Compressor) -> Result<EncodedBody> {
    let result = compressor
        .compress(&plain.bytes)
        .map_err(WorkerError::Compression)?;
    tracing::debug!(
        encoding = compressor.encoding(),
        uncompressed = result.uncompressed_size,
        compressed = result.compressed_size,
        "Compressed request body"
    );
    Ok(EncodedBody {
        bytes: result.data,
        content_type: plain.content_type,
        content_encoding: Some(compressor.encoding()),
    })
}
