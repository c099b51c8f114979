use std::io::Cursor;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};
use bytes::Bytes;
use parquet::basic::Compression;
use parquet::file::reader::{FileReader, SerializedFileReader};

use crate::pipeline::CancelToken;
use crate::schema::SchemaValidationError;

use super::*;

fn write_and_close(chunks: &[&[i32]], config: WriterConfig) -> (WriterStats, Vec<u8>) {
    let mut out = Vec::new();
    let cancel = CancelToken::new();
    let mut writer = SerialWriter::new(&mut out, config).expect("writer");
    for chunk in chunks {
        writer.write_chunk(chunk, &cancel).expect("write chunk");
    }
    let stats = writer.finish().expect("finish");
    (stats, out)
}

#[test]
fn one_row_group_per_chunk() {
    let (stats, out) = write_and_close(&[&[1, 2, 3], &[4, 5]], WriterConfig::default());
    assert_eq!(stats.serials_written, 5);
    assert_eq!(stats.chunks_written, 2);
    assert_eq!(stats.row_groups_written, 2);

    let reader = SerializedFileReader::new(Bytes::from(out)).expect("reader");
    let metadata = reader.metadata();
    assert_eq!(metadata.num_row_groups(), 2);
    assert_eq!(metadata.row_group(0).num_rows(), 3);
    assert_eq!(metadata.row_group(1).num_rows(), 2);
}

#[test]
fn empty_chunk_is_a_no_op() {
    let (stats, out) = write_and_close(&[&[]], WriterConfig::default());
    assert_eq!(stats.serials_written, 0);
    assert_eq!(stats.row_groups_written, 0);

    // Still a complete, footer-carrying container.
    let reader = SerializedFileReader::new(Bytes::from(out)).expect("reader");
    assert_eq!(reader.metadata().file_metadata().num_rows(), 0);
}

#[test]
fn finish_without_writes_produces_valid_empty_container() {
    let (stats, out) = write_and_close(&[], WriterConfig::default());
    assert_eq!(stats.row_groups_written, 0);

    let reader = SerializedFileReader::new(Bytes::from(out)).expect("reader");
    assert_eq!(reader.metadata().num_row_groups(), 0);
}

#[test]
fn cancelled_token_aborts_before_encoding() {
    let mut out = Vec::new();
    let cancel = CancelToken::new();
    cancel.cancel();

    let mut writer = SerialWriter::new(&mut out, WriterConfig::default()).expect("writer");
    let err = writer.write_chunk(&[1, 2, 3], &cancel).unwrap_err();
    assert!(matches!(err, WriterError::Cancelled));

    // Nothing was encoded; sealing the file yields zero row groups.
    let stats = writer.finish().expect("finish");
    assert_eq!(stats.serials_written, 0);
    assert_eq!(stats.row_groups_written, 0);
}

#[test]
fn rejects_schema_with_extra_columns() {
    let schema = Arc::new(Schema::new(vec![
        Field::new("serial", DataType::Int32, false),
        Field::new("extra", DataType::Int32, false),
    ]));
    let err = SerialWriter::with_schema(Cursor::new(Vec::new()), schema, WriterConfig::default())
        .err()
        .expect("construction must fail");
    assert!(matches!(
        err,
        WriterError::SchemaMismatch(SchemaValidationError::ColumnCountMismatch(2))
    ));
}

#[test]
fn rejects_column_without_int32_support() {
    let schema = Arc::new(Schema::new(vec![Field::new("serial", DataType::Utf8, false)]));
    let err = SerialWriter::with_schema(Cursor::new(Vec::new()), schema, WriterConfig::default())
        .err()
        .expect("construction must fail");
    assert!(matches!(
        err,
        WriterError::SchemaMismatch(SchemaValidationError::UnsupportedColumnType { .. })
    ));
}

#[test]
fn preset_names_resolve_to_their_codecs() {
    assert_eq!(
        CompressionPreset::from_name("gzip-fast"),
        Some(CompressionPreset::GzipFast)
    );
    assert_eq!(
        CompressionPreset::from_name("gzip-best"),
        Some(CompressionPreset::GzipBest)
    );
    assert_eq!(
        CompressionPreset::from_name("lz4-fast"),
        Some(CompressionPreset::Lz4Fast)
    );
    assert_eq!(
        CompressionPreset::from_name("snappy"),
        Some(CompressionPreset::Snappy)
    );
    assert_eq!(
        CompressionPreset::from_name("zstd-fast"),
        Some(CompressionPreset::ZstdFast)
    );
    assert_eq!(
        CompressionPreset::from_name("zstd-best"),
        Some(CompressionPreset::ZstdBest)
    );
    assert_eq!(CompressionPreset::from_name(""), None);
    assert_eq!(CompressionPreset::from_name("bzip2"), None);
    assert_eq!(CompressionPreset::from_name("ZSTD-FAST"), None);
}

#[test]
fn unknown_name_leaves_config_unchanged() {
    let config = WriterConfig::default()
        .with_compression(CompressionPreset::Snappy)
        .with_compression_name("bzip2");
    assert_eq!(config.compression, CompressionPreset::Snappy);

    let config = config.with_compression_name("zstd-best");
    assert_eq!(config.compression, CompressionPreset::ZstdBest);
}

#[test]
fn compression_metadata_reflects_the_preset() {
    let config = WriterConfig::default().with_compression_name("snappy");
    let (_, out) = write_and_close(&[&[10, 20, 30]], config);

    let reader = SerializedFileReader::new(Bytes::from(out)).expect("reader");
    let column = reader.metadata().row_group(0).column(0);
    assert_eq!(column.compression(), Compression::SNAPPY);
}
