//! Tokenization statistics.

use std::time::Duration;

/// Counters gathered during one tokenization run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LexerStats {
    /// Tokens emitted, including the final `Eof`.
    pub tokens_produced: u64,
    /// Bytes of source consumed.
    pub bytes_processed: u64,
    /// Lines seen (line feeds + 1 for non-empty input).
    pub lines_processed: u64,
    /// Errors recovered from in non-strict mode.
    pub errors_recovered: u64,
    /// High-water mark of arena bytes in use during the scan.
    pub peak_arena_bytes: usize,
    /// Wall-clock duration of the scan.
    pub duration: Duration,
}

impl LexerStats {
    /// Token throughput derived from the wall-clock duration; zero when
    /// the scan was too fast to measure.
    pub fn tokens_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.tokens_produced as f64 / secs
        } else {
            0.0
        }
    }
}
