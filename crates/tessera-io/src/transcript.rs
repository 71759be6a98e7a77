//! Batch run transcripts.

use std::fmt;
use std::io::{self, Write};

use tessera_plan::RunStats;

/// Streams one tab-separated line per instance to a `Write` sink.
///
/// Generic over `W` so tests use `Vec<u8>` and the CLI uses stdout.
/// Successful runs print `name<TAB>gather<TAB>compact<TAB>total`;
/// failures print `name<TAB><error>`.
#[derive(Debug)]
pub struct TranscriptWriter<W: Write> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> TranscriptWriter<W> {
    /// Wrap a sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Record a completed run.
    pub fn record(&mut self, name: &str, stats: RunStats) -> io::Result<()> {
        writeln!(
            self.writer,
            "{name}\t{}\t{}\t{}",
            stats.gather,
            stats.compact,
            stats.total()
        )?;
        self.lines_written += 1;
        Ok(())
    }

    /// Record a failed run.
    pub fn record_error(&mut self, name: &str, err: &dyn fmt::Display) -> io::Result<()> {
        writeln!(self.writer, "{name}\t{err}")?;
        self.lines_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Consume the writer and return the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_tab_separated() {
        let mut w = TranscriptWriter::new(Vec::new());
        w.record(
            "u-shape",
            RunStats {
                gather: 1,
                compact: 0,
            },
        )
        .unwrap();
        w.record_error("broken", &"instance is not 4-connected")
            .unwrap();
        assert_eq!(w.lines_written(), 2);

        let text = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            text,
            "u-shape\t1\t0\t1\nbroken\tinstance is not 4-connected\n"
        );
    }
}
