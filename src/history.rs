//! Bounded memory of recently emitted messages, backed by an append-only file.

use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

pub const DEFAULT_CAPACITY: usize = 50;

pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    path: PathBuf,
}

impl History {
    pub fn new(path: impl AsRef<Path>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a history and populates it from the backing file.
    pub fn open(path: impl AsRef<Path>, capacity: usize) -> Self {
        let mut history = Self::new(path, capacity);
        history.load();
        history
    }

    /// Reads the last `capacity` non-empty lines of the backing file.
    /// A missing or unreadable file just means no history yet. Lines are
    /// decoded one by one so a stray invalid byte only affects its own line.
    pub fn load(&mut self) {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No history loaded from {}: {}", self.path.display(), e);
                return;
            }
        };

        self.entries.clear();
        for raw in content.split(|byte| *byte == b'\n') {
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);
            if !line.trim().is_empty() {
                self.push(line.into_owned());
            }
        }
        debug!(
            "Loaded {} history entries from {}",
            self.len(),
            self.path.display()
        );
    }

    pub fn remember(&mut self, message: &str) {
        self.push(message.to_string());

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", message));

        if let Err(e) = result {
            error!(
                "Failed to append to history file {}: {}",
                self.path.display(),
                e
            );
        }
    }

    pub fn is_recent(&self, message: &str) -> bool {
        self.entries.iter().any(|entry| entry == message)
    }

    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn push(&mut self, message: String) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn collect(history: &History) -> Vec<&str> {
        history.entries().collect()
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = tempdir().unwrap();
        let history = History::open(dir.path().join("none.txt"), 5);
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_capacity_keeps_most_recent_in_order() {
        let dir = tempdir().unwrap();
        let mut history = History::new(dir.path().join("h.txt"), 3);
        for i in 0..10 {
            history.remember(&format!("m{}", i));
            assert!(history.len() <= 3);
        }
        assert_eq!(collect(&history), vec!["m7", "m8", "m9"]);
        assert!(history.is_recent("m9"));
        assert!(!history.is_recent("m6"));
    }

    #[test]
    fn test_reload_restores_tail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h.txt");
        {
            let mut history = History::new(&path, 4);
            for msg in ["a", "b", "c", "d", "e", "f"] {
                history.remember(msg);
            }
        }
        let reloaded = History::open(&path, 4);
        assert_eq!(collect(&reloaded), vec!["c", "d", "e", "f"]);

        let file = fs::read_to_string(&path).unwrap();
        assert_eq!(file.lines().count(), 6);
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h.txt");
        fs::write(&path, "one\n\n  \ntwo\nthree\n").unwrap();
        let history = History::open(&path, 10);
        assert_eq!(collect(&history), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_invalid_utf8_line_keeps_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("h.txt");
        fs::write(&path, b"one\ntw\xffo\r\nthree\nfour\n").unwrap();

        let history = History::open(&path, 10);
        assert_eq!(history.len(), 4);
        assert!(history.is_recent("one"));
        assert!(history.is_recent("three"));
        assert!(history.is_recent("four"));
        assert!(history.is_recent("tw\u{FFFD}o"));
    }

    #[test]
    fn test_exact_match_only() {
        let dir = tempdir().unwrap();
        let mut history = History::new(dir.path().join("h.txt"), 5);
        history.remember("Ship with purpose.");
        assert!(history.is_recent("Ship with purpose."));
        assert!(!history.is_recent("ship with purpose."));
        assert!(!history.is_recent("Ship with purpose"));
    }

    #[test]
    fn test_unwritable_file_keeps_memory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("h.txt");
        let mut history = History::new(&path, 2);
        history.remember("still here");
        assert!(history.is_recent("still here"));
        assert!(!path.exists());
    }
}
