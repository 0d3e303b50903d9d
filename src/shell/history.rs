//! Command history ring.

use std::collections::VecDeque;

/// Bounded history, newest first. Pushing at capacity evicts the oldest entry.
///
/// Also tracks where Up/Down navigation currently points.
#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<String>,
    capacity: usize,
    position: Option<usize>,
}

impl HistoryRing {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            position: None,
        }
    }

    /// Record a submitted command. Empty commands are not recorded.
    pub fn push(&mut self, command: &str) {
        self.position = None;
        if command.is_empty() || self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(command.to_string());
    }

    /// Step to the next older entry. `None` when already at the oldest.
    pub fn older(&mut self) -> Option<&str> {
        let next = self.position.map_or(0, |p| p + 1);
        if next >= self.entries.len() {
            return None;
        }
        self.position = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Step to the next newer entry. `None` once navigation moves past the newest.
    pub fn newer(&mut self) -> Option<&str> {
        match self.position {
            Some(p) if p > 0 => {
                self.position = Some(p - 1);
                self.entries.get(p - 1).map(String::as_str)
            }
            _ => {
                self.position = None;
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, oldest first.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation() {
        let mut history = HistoryRing::new(10);
        history.push("ls");
        history.push("pwd");
        history.push("cd home");

        assert_eq!(history.older(), Some("cd home"));
        assert_eq!(history.older(), Some("pwd"));
        assert_eq!(history.older(), Some("ls"));
        assert_eq!(history.older(), None);
        assert_eq!(history.newer(), Some("pwd"));
        assert_eq!(history.newer(), Some("cd home"));
        assert_eq!(history.newer(), None);
        assert_eq!(history.older(), Some("cd home"));
    }

    #[test]
    fn test_empty_history() {
        let mut history = HistoryRing::new(3);
        history.push("");
        assert!(history.is_empty());
        assert_eq!(history.older(), None);
        assert_eq!(history.newer(), None);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut history = HistoryRing::new(3);
        for cmd in ["a", "b", "c", "d"] {
            history.push(cmd);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.iter_oldest_first().collect::<Vec<_>>(), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_push_resets_navigation() {
        let mut history = HistoryRing::new(3);
        history.push("a");
        history.push("b");
        assert_eq!(history.older(), Some("b"));
        assert_eq!(history.older(), Some("a"));
        history.push("c");
        assert_eq!(history.older(), Some("c"));
    }
}
