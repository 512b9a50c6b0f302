//! The buffer behind the shared logger.
//!
//! `MessageLog` is a plain ordered list of strings. It never reorders, never
//! deduplicates and never validates: empty strings are stored like any other
//! message. The list grows without bound; only [`MessageLog::take`] shrinks
//! it.

use std::io::{self, Write};

/// An ordered, append-only sequence of log messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<String>,
}

impl MessageLog {
    // ── Constructors ─────────────────────────────────────────────────────

    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no messages are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The stored messages in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Iterate over the messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    // ── Mutators ─────────────────────────────────────────────────────────

    /// Append a message at the end of the log.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push(message.into());
    }

    /// Remove every message, returning them in insertion order.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.entries)
    }

    // ── Output ───────────────────────────────────────────────────────────

    /// Write one line per message to `writer`, in insertion order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for message in &self.entries {
            writeln!(writer, "{message}")?;
        }
        writer.flush()
    }
}

impl<S: Into<String>> FromIterator<S> for MessageLog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for MessageLog {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(Into::into));
    }
}

impl std::fmt::Display for MessageLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for message in &self.entries {
            writeln!(f, "{message}")?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_construction() {
        let log = MessageLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log, MessageLog::default());
    }

    #[test]
    fn push_keeps_order() {
        let mut log = MessageLog::new();
        log.push("First message.");
        log.push(String::from("Second message."));
        assert_eq!(log.len(), 2);
        assert_eq!(log.as_slice(), ["First message.", "Second message."]);
    }

    #[test]
    fn empty_and_duplicate_messages_are_kept() {
        let mut log = MessageLog::new();
        log.push("");
        log.push("again");
        log.push("again");
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["", "again", "again"]);
    }

    #[test]
    fn take_empties_the_log() {
        let mut log: MessageLog = ["a", "b"].into_iter().collect();
        assert_eq!(log.take(), vec!["a".to_string(), "b".to_string()]);
        assert!(log.is_empty());
        log.push("c");
        assert_eq!(log.as_slice(), ["c"]);
    }

    #[test]
    fn extend_appends_at_the_end() {
        let mut log: MessageLog = ["a"].into_iter().collect();
        log.extend(["b", "c"]);
        assert_eq!(log.as_slice(), ["a", "b", "c"]);
    }

    #[test]
    fn write_to_emits_one_line_per_message() {
        let log: MessageLog = ["First message.", "Second message."].into_iter().collect();
        let mut out = Vec::new();
        log.write_to(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "First message.\nSecond message.\n"
        );
    }

    #[test]
    fn display_matches_written_output() {
        let log: MessageLog = ["x", "", "y"].into_iter().collect();
        let mut out = Vec::new();
        log.write_to(&mut out).unwrap();
        assert_eq!(format!("{log}"), String::from_utf8(out).unwrap());
    }

    #[test]
    fn empty_log_writes_nothing() {
        let mut out = Vec::new();
        MessageLog::new().write_to(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
