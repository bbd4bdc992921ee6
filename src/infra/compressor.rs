//! Request body compression.
//!
//! Provides a trait-based abstraction for encoding outgoing request bodies.
//! Only gzip is offered; the receiving side is expected to decode it.

use std::io::Write;

/// Result of a compression operation.
#[derive(Debug)]
pub struct CompressResult {
    /// The compressed data.
    pub data: Vec<u8>,
    /// Size of the input before compression.
    pub uncompressed_size: usize,
    /// Size of the compressed output.
    pub compressed_size: usize,
}

/// Trait for content compression.
pub trait Compressor: Send + Sync {
    /// The content-encoding token this compressor produces (e.g., "gzip").
    fn encoding(&self) -> &'static str;

    /// Compresses the given data.
    fn compress(&self, data: &[u8]) -> std::io::Result<CompressResult>;
}

/// Gzip compressor implementation.
#[derive(Default)]
pub struct GzipCompressor {
    level: flate2::Compression,
}

impl GzipCompressor {
    /// Creates a gzip compressor with the default compression level.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Compressor for GzipCompressor {
    fn encoding(&self) -> &'static str {
        "gzip"
    }

    fn compress(&self, data: &[u8]) -> std::io::Result<CompressResult> {
        let mut encoder = flate2::write::GzEncoder::new(Vec::new(), self.level);
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;
        Ok(CompressResult {
            uncompressed_size: data.len(),
            compressed_size: compressed.len(),
            data: compressed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut decoder = flate2::read::GzDecoder::new(data);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).unwrap();
        out
    }

    #[test]
    fn test_gzip_compression() {
        let original = b"Hello, World!";
        let result = GzipCompressor::new().compress(original).unwrap();

        assert_eq!(result.uncompressed_size, original.len());
        assert_eq!(result.compressed_size, result.data.len());
        // gzip magic bytes
        assert_eq!(&result.data[..2], &[0x1f, 0x8b]);
        assert_eq!(gunzip(&result.data), original);
    }

    #[test]
    fn test_repetitive_payload_shrinks() {
        let original = "{\"k\":\"value\"},".repeat(500);
        let result = GzipCompressor::new()
            .compress(original.as_bytes())
            .unwrap();

        assert!(result.compressed_size < result.uncompressed_size);
        assert_eq!(gunzip(&result.data), original.as_bytes());
    }

    #[test]
    fn test_empty_input() {
        let result = GzipCompressor::new().compress(b"").unwrap();
        assert_eq!(result.uncompressed_size, 0);
        assert!(gunzip(&result.data).is_empty());
    }

    #[test]
    fn test_encoding_token() {
        assert_eq!(GzipCompressor::new().encoding(), "gzip");
    }
}
