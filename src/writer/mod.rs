//! # Row-Group Writer Module
//!
//! Turns chunks of sanitized serials into single-column Parquet row groups.
//!
//! ## Design Principles
//!
//! 1. **Streaming Architecture**: one chunk in, one row group out; nothing
//!    is buffered beyond the current chunk, so memory stays bounded over an
//!    unbounded input stream.
//!
//! 2. **Chunk-Boundary Cancellation**: the cancellation token is polled
//!    once per chunk, never per value; a chunk that has started encoding
//!    always completes.
//!
//! 3. **Configurable Compression**: a closed table of named presets (gzip,
//!    LZ4, Snappy, ZSTD at fixed levels); anything else means uncompressed.

mod config;
mod error;
mod stats;
mod writer_impl;

#[cfg(test)]
mod tests;

pub use config::{CompressionPreset, WriterConfig};
pub use error::WriterError;
pub use stats::WriterStats;
pub use writer_impl::SerialWriter;
