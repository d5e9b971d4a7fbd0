//! In-memory record of what was generated this session. Nothing is ever
//! written to disk; the list dies with the process.

use std::fmt;

use chrono::{DateTime, Local};

use crate::Secret;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Password,
    Passphrase,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::Password => "password",
            EntryKind::Passphrase => "passphrase",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub kind: EntryKind,
    pub secret: Secret,
    pub generated_at: DateTime<Local>,
}

/// Generated outputs, oldest first. Owned by whoever runs the session loop
/// and passed down to the actions that need it.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn record(&mut self, kind: EntryKind, secret: Secret) {
        self.entries.push(HistoryEntry {
            kind,
            secret,
            generated_at: Local::now(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The most recent `n` entries, oldest of those first.
    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut history = History::default();
        assert!(history.is_empty());
        history.record(EntryKind::Password, Secret::from("first".to_owned()));
        history.record(EntryKind::Passphrase, Secret::from("second".to_owned()));
        assert_eq!(history.len(), 2);
        let entries = history.recent(10);
        assert_eq!(entries[0].secret.as_str(), "first");
        assert_eq!(entries[0].kind, EntryKind::Password);
        assert_eq!(entries[1].secret.as_str(), "second");
    }

    #[test]
    fn recent_returns_the_tail() {
        let mut history = History::default();
        for i in 0..15 {
            history.record(EntryKind::Password, Secret::from(format!("pw{i}")));
        }
        let tail = history.recent(10);
        assert_eq!(tail.len(), 10);
        assert_eq!(tail[0].secret.as_str(), "pw5");
        assert_eq!(tail[9].secret.as_str(), "pw14");
    }

    #[test]
    fn recent_handles_short_histories() {
        let mut history = History::default();
        history.record(EntryKind::Password, Secret::from("only".to_owned()));
        assert_eq!(history.recent(10).len(), 1);
    }
}
