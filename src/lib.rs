//! # serial2parquet - Stream Integer Serials into a Parquet Column
//!
//! `serial2parquet` converts an unbounded stream of newline-delimited
//! integer serials into a compact, single-column, optionally compressed
//! Apache Parquet file.
//!
//! ## Key Properties
//!
//! - **Bounded Memory**: values are batched into fixed-capacity chunks of
//!   4096 backed by one reusable buffer; each chunk becomes exactly one
//!   row group and is flushed before the next is read.
//!
//! - **Sanitized Values**: each token is parsed as a signed integer and the
//!   sign bit is stripped, so every stored value lies in `[0, 2^31 - 1]`.
//!   The first unparseable token ends the stream silently.
//!
//! - **Pluggable Compression**: a closed table of named presets
//!   (`gzip-fast`, `gzip-best`, `lz4-fast`, `snappy`, `zstd-fast`,
//!   `zstd-best`); unrecognized names mean uncompressed output.
//!
//! - **Cooperative Cancellation**: a [`pipeline::CancelToken`] checked at
//!   chunk boundaries; on cancellation the container is sealed so the
//!   already-written prefix stays readable.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::io::{self, BufWriter};
//!
//! use serial2parquet::pipeline::{self, CancelToken};
//! use serial2parquet::writer::WriterConfig;
//!
//! let config = WriterConfig::default().with_compression_name("zstd-fast");
//! let cancel = CancelToken::new();
//!
//! let stdin = io::stdin();
//! let stdout = io::stdout();
//! let stats = pipeline::run(stdin.lock(), BufWriter::new(stdout), config, &cancel)?;
//! eprintln!("{stats}");
//! # Ok::<(), serial2parquet::writer::WriterError>(())
//! ```
//!
//! The output is a standard Parquet file and can be read with any
//! Parquet-compatible tool:
//!
//! ```sql
//! -- DuckDB
//! SELECT serial FROM read_parquet('serials.parquet');
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`sanitize`]: token parsing and sign-bit stripping
//! - [`chunk`]: fixed-capacity batching over a reusable buffer
//! - [`schema`]: the single-column Arrow schema and its validation
//! - [`writer`]: streaming Parquet writer, compression presets, stats
//! - [`pipeline`]: the cancellable end-to-end driver

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod chunk;
pub mod pipeline;
pub mod sanitize;
pub mod schema;
pub mod writer;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::chunk::{Chunker, CHUNK_CAPACITY};
    pub use crate::pipeline::{config_from_env, run, CancelToken, COMPRESSION_ENV};
    pub use crate::sanitize::{sanitize_token, serials, Serial};
    pub use crate::schema::{
        columns, create_serial_schema, create_serial_schema_arc, validate_serial_schema,
        SchemaValidationError,
    };
    pub use crate::writer::{
        CompressionPreset, SerialWriter, WriterConfig, WriterError, WriterStats,
    };
}
