use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;

use crate::chunk::CHUNK_CAPACITY;

/// Named compression presets for the output file.
///
/// Each preset pins its codec and level as fixed constants; no numeric
/// tuning is exposed. [`CompressionPreset::None`] means uncompressed output
/// and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionPreset {
    /// Gzip at the fastest level
    GzipFast,
    /// Gzip at the best-compression level
    GzipBest,
    /// LZ4 raw frames (the Parquet codec carries no level)
    Lz4Fast,
    /// Snappy (no level)
    Snappy,
    /// ZSTD at the fastest level
    ZstdFast,
    /// ZSTD at the best-compression level
    ZstdBest,
    /// No compression
    #[default]
    None,
}

impl CompressionPreset {
    /// Look up a preset by its configuration name.
    ///
    /// Returns `None` for unrecognized names, including the empty string;
    /// callers treat that as "leave the configuration unchanged", not as an
    /// error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gzip-fast" => Some(Self::GzipFast),
            "gzip-best" => Some(Self::GzipBest),
            "lz4-fast" => Some(Self::Lz4Fast),
            "snappy" => Some(Self::Snappy),
            "zstd-fast" => Some(Self::ZstdFast),
            "zstd-best" => Some(Self::ZstdBest),
            _ => None,
        }
    }

    /// Map the preset onto a Parquet compression codec.
    pub(super) fn to_parquet(self) -> Compression {
        match self {
            Self::GzipFast => {
                Compression::GZIP(GzipLevel::try_new(1).unwrap_or(GzipLevel::default()))
            }
            Self::GzipBest => {
                Compression::GZIP(GzipLevel::try_new(9).unwrap_or(GzipLevel::default()))
            }
            Self::Lz4Fast => Compression::LZ4_RAW,
            Self::Snappy => Compression::SNAPPY,
            Self::ZstdFast => {
                Compression::ZSTD(ZstdLevel::try_new(1).unwrap_or(ZstdLevel::default()))
            }
            Self::ZstdBest => {
                Compression::ZSTD(ZstdLevel::try_new(22).unwrap_or(ZstdLevel::default()))
            }
            Self::None => Compression::UNCOMPRESSED,
        }
    }
}

/// Configuration for the serial writer.
///
/// Built once before the pipeline starts and never mutated mid-stream;
/// every modifier consumes the value and returns an updated copy.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Compression preset applied to the whole file
    pub compression: CompressionPreset,

    /// Upper bound on rows per row group. The pipeline flushes one row
    /// group per chunk, so this only takes effect for chunks larger than
    /// the bound.
    pub row_group_size: usize,

    /// Whether to write column chunk statistics
    pub write_statistics: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: CompressionPreset::None,
            row_group_size: CHUNK_CAPACITY,
            write_statistics: true,
        }
    }
}

impl WriterConfig {
    /// Return a copy carrying the given compression preset.
    pub fn with_compression(mut self, compression: CompressionPreset) -> Self {
        self.compression = compression;
        self
    }

    /// Return a copy with the preset named by `name` applied.
    ///
    /// Unrecognized names (including the empty string) leave the
    /// configuration unchanged; selecting an unknown codec is not an error.
    pub fn with_compression_name(mut self, name: &str) -> Self {
        if let Some(preset) = CompressionPreset::from_name(name) {
            self.compression = preset;
        }
        self
    }

    /// Create writer properties from this configuration
    pub(super) fn to_writer_properties(&self) -> WriterProperties {
        let statistics = if self.write_statistics {
            EnabledStatistics::Chunk
        } else {
            EnabledStatistics::None
        };

        WriterProperties::builder()
            .set_compression(self.compression.to_parquet())
            .set_statistics_enabled(statistics)
            .set_max_row_group_size(self.row_group_size)
            .set_key_value_metadata(Some(vec![KeyValue {
                key: "serial2parquet:version".to_string(),
                value: Some(env!("CARGO_PKG_VERSION").to_string()),
            }]))
            .build()
    }
}
