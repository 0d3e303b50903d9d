//! Shell Types
//!
//! Errors, input events and the render frame handed to the host.

use serde::Serialize;
use thiserror::Error;

use crate::fs::Capacity;

/// Shell errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("capacity exceeded: {what} limited to {limit}")]
    CapacityExceeded { what: Capacity, limit: usize },
}

/// Discrete input events delivered by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
}

/// Work the shell hands back to the host instead of doing itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostRequest {
    /// Open the editor on an existing file (absolute path).
    OpenEditor(String),
    /// Reset the whole system.
    Reboot,
}

/// Content-area size in pixels, supplied by the renderer on every pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentArea {
    pub width: u32,
    pub height: u32,
}

impl ContentArea {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Scrollbar geometry in pixels, relative to the top of the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scrollbar {
    pub position: u32,
    pub extent: u32,
    pub track: u32,
}

/// Everything the renderer needs for one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub lines: Vec<String>,
    pub cwd: String,
    pub prompt: String,
    pub cursor_column: usize,
    pub scrollbar: Option<Scrollbar>,
    pub line_count: usize,
    pub scroll_position: usize,
    pub visible_lines: usize,
}
