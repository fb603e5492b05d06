//! Terminal notification sink

use std::io::{self, Write};

use crate::notify::{Notification, NotificationSink, Severity};

/// Prints notifications as they arrive; errors go to stderr
pub struct ConsoleSink<W: Write = io::Stdout, E: Write = io::Stderr> {
    out: W,
    err: E,
    errors: usize,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_writers(io::stdout(), io::stderr())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write, E: Write> ConsoleSink<W, E> {
    pub fn with_writers(out: W, err: E) -> Self {
        Self { out, err, errors: 0 }
    }

    /// Number of error notifications printed so far
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn into_writers(self) -> (W, E) {
        (self.out, self.err)
    }
}

impl<W: Write, E: Write> NotificationSink for ConsoleSink<W, E> {
    fn notify(&mut self, notification: Notification) {
        // Write failures are ignored
        let _ = if notification.severity == Severity::Error {
            self.errors += 1;
            writeln!(self.err, "{}", notification)
        } else {
            writeln!(self.out, "{}", notification)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_by_severity() {
        let mut sink = ConsoleSink::with_writers(Vec::new(), Vec::new());
        sink.notify(Notification::info("Export Started", "Exporting a.csv"));
        sink.notify(Notification::error("Export Failed", "disk full"));

        assert_eq!(sink.error_count(), 1);
        let (out, err) = sink.into_writers();
        assert_eq!(String::from_utf8(out).unwrap(), "[i] Export Started: Exporting a.csv\n");
        assert_eq!(String::from_utf8(err).unwrap(), "[x] Export Failed: disk full\n");
    }
}
