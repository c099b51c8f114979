/// Errors that can occur while encoding chunks
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// I/O error on the underlying output stream
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the Arrow library during array or batch construction
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Error from the Parquet library while encoding or flushing
    #[error("Parquet error: {0}")]
    ParquetError(#[from] parquet::errors::ParquetError),

    /// The writer schema violates the single-column serial contract
    #[error("schema mismatch: {0}")]
    SchemaMismatch(#[from] crate::schema::SchemaValidationError),

    /// A cancellation request was observed at a chunk boundary
    #[error("write cancelled")]
    Cancelled,
}
