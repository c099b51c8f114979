use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Builder};
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use log::debug;
use parquet::arrow::ArrowWriter;

use crate::chunk::{Chunker, CHUNK_CAPACITY};
use crate::pipeline::CancelToken;
use crate::sanitize::Serial;
use crate::schema::{create_serial_schema_arc, validate_serial_schema};

use super::config::WriterConfig;
use super::error::WriterError;
use super::stats::WriterStats;

/// Streaming writer that encodes serial chunks into single-column row groups
///
/// Each chunk becomes exactly one row group: the chunk is appended in order
/// to a reusable column buffer, materialized as one record batch, and
/// flushed before the next chunk arrives. The writer never retries a failed
/// encode or flush.
pub struct SerialWriter<W: Write + Send> {
    writer: ArrowWriter<W>,
    schema: Arc<Schema>,
    column: Int32Builder,
    serials_written: usize,
    chunks_written: usize,
}

impl SerialWriter<File> {
    /// Create a new writer to a file path
    pub fn new_file<P: AsRef<Path>>(path: P, config: WriterConfig) -> Result<Self, WriterError> {
        let file = File::create(path)?;
        Self::new(file, config)
    }
}

impl<W: Write + Send> SerialWriter<W> {
    /// Create a new writer to any `Write` implementation
    pub fn new(writer: W, config: WriterConfig) -> Result<Self, WriterError> {
        Self::with_schema(writer, create_serial_schema_arc(), config)
    }

    /// Create a writer against a caller-supplied schema.
    ///
    /// The schema must expose exactly one `Int32` column; anything else is
    /// a configuration defect and fails construction before any byte is
    /// written.
    pub fn with_schema(
        writer: W,
        schema: Arc<Schema>,
        config: WriterConfig,
    ) -> Result<Self, WriterError> {
        validate_serial_schema(&schema)?;

        let props = config.to_writer_properties();
        let arrow_writer = ArrowWriter::try_new(writer, schema.clone(), Some(props))?;

        Ok(Self {
            writer: arrow_writer,
            schema,
            column: Int32Builder::with_capacity(CHUNK_CAPACITY),
            serials_written: 0,
            chunks_written: 0,
        })
    }

    /// Encode one chunk as a single row group and append it to the output.
    ///
    /// The cancellation token is checked before any encoding work; once a
    /// chunk has begun encoding it always completes. The column buffer is
    /// drained back to empty by the write, ready for the next chunk. An
    /// empty chunk is caller misuse (the pipeline never produces one) and
    /// is ignored.
    pub fn write_chunk(&mut self, chunk: &[Serial], cancel: &CancelToken) -> Result<(), WriterError> {
        if cancel.is_cancelled() {
            return Err(WriterError::Cancelled);
        }

        if chunk.is_empty() {
            return Ok(());
        }

        self.column.append_slice(chunk);
        let array: ArrayRef = Arc::new(self.column.finish());
        let batch = RecordBatch::try_new(self.schema.clone(), vec![array])?;

        self.writer.write(&batch)?;
        // One row group per chunk.
        self.writer.flush()?;

        self.serials_written += chunk.len();
        self.chunks_written += 1;
        debug!("encoded chunk {} ({} serials)", self.chunks_written, chunk.len());

        Ok(())
    }

    /// Drain a chunker into the writer.
    ///
    /// Stops at source exhaustion, the first encode failure, or an observed
    /// cancellation; no chunk is pulled after a failed write.
    pub fn write_chunks<I>(
        &mut self,
        chunker: &mut Chunker<I>,
        cancel: &CancelToken,
    ) -> Result<(), WriterError>
    where
        I: Iterator<Item = Serial>,
    {
        while let Some(chunk) = chunker.next_chunk() {
            self.write_chunk(chunk, cancel)?;
        }
        Ok(())
    }

    /// Finish the file: flush buffered writer-level state and write the
    /// container footer.
    ///
    /// Skipping this produces a truncated, unreadable file, so every exit
    /// path that wants readable output must come through here.
    pub fn finish(self) -> Result<WriterStats, WriterError> {
        let file_metadata = self.writer.close()?;

        Ok(WriterStats {
            serials_written: self.serials_written,
            chunks_written: self.chunks_written,
            row_groups_written: file_metadata.row_groups.len(),
        })
    }
}
