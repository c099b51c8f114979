//! End-to-end driver composing the sanitizer, chunker, and writer.
//!
//! The driver owns the only success/failure decision for a run: it forwards
//! the first error or cancellation encountered by any stage, and otherwise
//! reports success after the final flush. All stages are pull-driven: no
//! line is read and no serial is buffered ahead of the writer's demand.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use crate::chunk::Chunker;
use crate::sanitize::serials;
use crate::writer::{SerialWriter, WriterConfig, WriterError, WriterStats};

/// Name of the environment variable carrying the compression preset.
pub const COMPRESSION_ENV: &str = "SERIAL2PARQUET_COMPRESSION";

/// Cooperative cancellation signal shared between a pipeline run and its
/// owner.
///
/// Cloning is cheap; all clones observe the same signal. The writer polls
/// the token at chunk boundaries only, so cancellation latency is bounded
/// by one chunk, never by the whole stream.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent; never un-cancels.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Resolve the writer configuration from the process environment.
///
/// A missing variable or an unrecognized codec name leaves the default
/// (uncompressed) configuration unchanged; neither is an error.
pub fn config_from_env() -> WriterConfig {
    let config = WriterConfig::default();
    match std::env::var(COMPRESSION_ENV) {
        Ok(name) => config.with_compression_name(&name),
        Err(_) => config,
    }
}

/// Run the full pipeline: read lines from `input`, sanitize and chunk them,
/// and encode the chunks into `out`.
///
/// Input ends at EOF or at the first line that fails to parse (including a
/// read error); both are ordinary termination, and the run reports success
/// for whatever was written. On an observed cancellation the container is
/// still sealed (the already-flushed row groups remain a readable file)
/// and [`WriterError::Cancelled`] is returned. Any other failure is fatal
/// and propagates immediately.
pub fn run<R, W>(
    input: R,
    out: W,
    config: WriterConfig,
    cancel: &CancelToken,
) -> Result<WriterStats, WriterError>
where
    R: BufRead,
    W: Write + Send,
{
    debug!("starting pipeline with {:?}", config.compression);

    let mut writer = SerialWriter::new(out, config)?;

    let lines = input.lines().map_while(Result::ok);
    let mut chunker = Chunker::new(serials(lines));

    match writer.write_chunks(&mut chunker, cancel) {
        Ok(()) => writer.finish(),
        Err(WriterError::Cancelled) => {
            // Seal the container so the flushed prefix stays readable.
            writer.finish()?;
            Err(WriterError::Cancelled)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_clear() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn clones_share_the_signal() {
        let token = CancelToken::new();
        let observer = token.clone();
        token.cancel();
        assert!(observer.is_cancelled());
        // Idempotent.
        token.cancel();
        assert!(observer.is_cancelled());
    }
}
