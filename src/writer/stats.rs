use std::fmt;

/// Statistics from a completed write operation
#[derive(Debug, Clone, Default)]
pub struct WriterStats {
    /// Number of serials written to the file
    pub serials_written: usize,
    /// Number of chunks encoded
    pub chunks_written: usize,
    /// Number of Parquet row groups in the finished file
    pub row_groups_written: usize,
}

impl fmt::Display for WriterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} serials ({} chunks) in {} row groups",
            self.serials_written, self.chunks_written, self.row_groups_written
        )
    }
}
