//! Diagnostic sink for human-readable status lines.
//!
//! The retry operations report every failed attempt and their final
//! outcome through a [`DiagnosticSink`]. The sink is separate from the
//! returned value and is best-effort: it cannot fail the call.

use std::io::Write;
use std::sync::Mutex;

/// Write-only, line-oriented output channel back to the caller.
pub trait DiagnosticSink: Send + Sync {
    /// Emits one line. Delivery is not guaranteed.
    fn emit(&self, line: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

/// Sink that forwards lines as `tracing` info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, line: &str) {
        tracing::info!(target: "dbcurl::diagnostic", "{line}");
    }
}

/// Sink that writes each line to an [`std::io::Write`] and flushes it.
///
/// Write errors are ignored.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl WriterSink<std::io::Stderr> {
    /// Creates a sink writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> DiagnosticSink for WriterSink<W> {
    fn emit(&self, line: &str) {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let _ = writeln!(writer, "{line}").and_then(|()| writer.flush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_sink_writes_one_line_per_emit() {
        let sink = WriterSink::new(Vec::new());

        sink.emit("first");
        sink.emit("second\tline");

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "first\nsecond\tline\n");
    }

    #[test]
    fn writer_sink_ignores_write_errors() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = WriterSink::new(FailingWriter);
        sink.emit("dropped");
    }

    #[test]
    fn reference_forwards_to_sink() {
        fn emit_through<K: DiagnosticSink>(sink: K) {
            sink.emit("via reference");
        }

        let sink = WriterSink::new(Vec::new());
        emit_through(&sink);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "via reference\n");
    }

    #[test]
    fn tracing_sink_does_not_panic_without_subscriber() {
        TracingSink.emit("no subscriber installed");
    }

    #[test]
    fn sinks_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingSink>();
        assert_send_sync::<WriterSink<Vec<u8>>>();
        assert_send_sync::<WriterSink<std::io::Stderr>>();
    }
}
