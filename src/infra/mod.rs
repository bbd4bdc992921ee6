//! Infrastructure layer providing abstractions for external dependencies.
//!
//! Currently holds request body compression behind the `Compressor` trait.

pub mod compressor;

pub use compressor::{CompressResult, Compressor, GzipCompressor};
