//! Scrollback buffer and line reflow.

use super::types::ShellError;
use crate::fs::{BoundedVec, Capacity};

/// Split `text` into segments of at most `width` characters.
///
/// Each segment breaks at the last space inside the limit when there is one,
/// otherwise it is cut hard. A single space after each break is dropped.
/// A `width` of 0 means the viewport is not known yet and nothing wraps.
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if width == 0 || chars.len() <= width {
        return vec![text.to_string()];
    }

    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let rest = &chars[pos..];
        let mut take = rest.len();
        if rest.len() > width {
            take = width;
            // A space right after the limit still counts as a clean break.
            if let Some(space) = (1..=width).rev().find(|&i| rest[i] == ' ') {
                take = space;
            }
        }
        segments.push(rest[..take].iter().collect());
        pos += take;
        if chars.get(pos) == Some(&' ') {
            pos += 1;
        }
    }
    segments
}

/// Bounded, ordered output lines.
#[derive(Debug, Clone)]
pub struct Scrollback {
    lines: BoundedVec<String>,
}

impl Scrollback {
    pub fn new(capacity: usize) -> Self {
        Self { lines: BoundedVec::new(capacity) }
    }

    /// Append `text` reflowed to `width`. Returns how many lines were added.
    ///
    /// When the wrapped segments do not all fit, nothing is added and the newest
    /// output is the one dropped.
    pub fn push_wrapped(&mut self, text: &str, width: usize) -> Result<usize, ShellError> {
        let segments = wrap_line(text, width);
        if segments.len() > self.lines.remaining() {
            return Err(ShellError::CapacityExceeded {
                what: Capacity::Scrollback,
                limit: self.lines.capacity(),
            });
        }
        let added = segments.len();
        for segment in segments {
            if self.lines.try_push(segment).is_err() {
                break;
            }
        }
        Ok(added)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Up to `count` lines starting at `offset`.
    pub fn window(&self, offset: usize, count: usize) -> &[String] {
        let start = offset.min(self.lines.len());
        let end = start.saturating_add(count).min(self.lines.len());
        &self.lines[start..end]
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
