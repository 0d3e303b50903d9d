//! Shell Module
//!
//! The command shell and its pieces:
//! - CommandShell: input handling, dispatch and rendering
//! - Scrollback: bounded output with word-wrap reflow
//! - HistoryRing: recent commands with up/down recall
//! - InputLine: the line being edited
//! - viewport: metrics derived from the content area

pub mod history;
pub mod input;
pub mod scrollback;
pub mod terminal;
pub mod types;
pub mod viewport;

pub use history::HistoryRing;
pub use input::InputLine;
pub use scrollback::{wrap_line, Scrollback};
pub use terminal::{CommandShell, SharedFs, PROMPT, WELCOME_LINES};
pub use types::*;
pub use viewport::{cwd_indicator, scrollbar, ViewportMetrics};
