//! Fixed-capacity batching of the sanitized serial stream.

use crate::sanitize::Serial;

/// Number of serials per chunk, and therefore per output row group.
pub const CHUNK_CAPACITY: usize = 4096;

/// Accumulates serials into fixed-capacity chunks backed by a single
/// reusable buffer.
///
/// `Chunker` is a pull-driven, single-pass stage: each call to
/// [`next_chunk`](Self::next_chunk) consumes just enough of the upstream
/// source to fill one chunk, then lends out the buffer contents. The borrow
/// ends before the next call, so one allocation backs every chunk and
/// memory stays bounded however long the input stream runs. Ceasing to call
/// `next_chunk` (or dropping the chunker) stops all upstream consumption;
/// the sequence is not restartable.
pub struct Chunker<I> {
    source: I,
    buf: Vec<Serial>,
    capacity: usize,
}

impl<I> Chunker<I>
where
    I: Iterator<Item = Serial>,
{
    /// Create a chunker with the default [`CHUNK_CAPACITY`].
    pub fn new(source: I) -> Self {
        Self::with_capacity(source, CHUNK_CAPACITY)
    }

    /// Create a chunker with a custom non-zero capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(source: I, capacity: usize) -> Self {
        assert!(capacity > 0, "chunk capacity must be non-zero");
        Self {
            source,
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Pull the next chunk from the source.
    ///
    /// Returns `None` once the source is exhausted. Every chunk except
    /// possibly the last has exactly `capacity` elements; the last carries
    /// whatever remained. An empty chunk is never produced.
    pub fn next_chunk(&mut self) -> Option<&[Serial]> {
        self.buf.clear();
        while self.buf.len() < self.capacity {
            match self.source.next() {
                Some(serial) => self.buf.push(serial),
                None => break,
            }
        }
        if self.buf.is_empty() {
            None
        } else {
            Some(&self.buf)
        }
    }
}
