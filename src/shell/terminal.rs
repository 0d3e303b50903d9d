//! Command Shell
//!
//! Owns the input line, scrollback, history and scroll state, and dispatches
//! submitted commands against the shared file system. Every call completes
//! synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use super::history::HistoryRing;
use super::input::InputLine;
use super::scrollback::Scrollback;
use super::types::*;
use super::viewport::{cwd_indicator, scrollbar, ViewportMetrics};
use crate::commands::{create_builtin_registry, CommandContext, CommandEffect, CommandRegistry};
use crate::config::{Config, GlyphMetrics};
use crate::fs::VirtualFileSystem;

/// File system handle shared with the editor, the file browser and the shell.
pub type SharedFs = Rc<RefCell<VirtualFileSystem>>;

pub const PROMPT: &str = "> ";

/// Lines present after creation and after every reset.
pub const WELCOME_LINES: [&str; 2] = ["MicroOS Terminal v1.0", "Type 'help' for available commands"];

pub struct CommandShell {
    fs: SharedFs,
    registry: CommandRegistry,
    scrollback: Scrollback,
    history: HistoryRing,
    input: InputLine,
    scroll_position: usize,
    // Derived on every render pass; kept so output between passes reflows to
    // the last known width.
    metrics: ViewportMetrics,
    glyph: GlyphMetrics,
}

impl CommandShell {
    pub fn new(fs: SharedFs, config: &Config) -> Self {
        let mut shell = Self {
            fs,
            registry: create_builtin_registry(),
            scrollback: Scrollback::new(config.shell.max_scrollback),
            history: HistoryRing::new(config.shell.max_history),
            input: InputLine::new(config.shell.max_input),
            scroll_position: 0,
            metrics: ViewportMetrics::default(),
            glyph: config.glyph.clone(),
        };
        shell.emit_welcome();
        shell
    }

    pub fn fs(&self) -> &SharedFs {
        &self.fs
    }

    pub fn lines(&self) -> &[String] {
        self.scrollback.lines()
    }

    pub fn input(&self) -> &str {
        self.input.as_str()
    }

    pub fn cursor(&self) -> usize {
        self.input.cursor()
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position
    }

    pub fn metrics(&self) -> ViewportMetrics {
        self.metrics
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// Append a line, reflowed to the current width.
    ///
    /// A full scrollback rejects the whole line. Afterwards the view follows
    /// the newest line.
    pub fn append_line(&mut self, text: &str) -> Result<(), ShellError> {
        self.scrollback.push_wrapped(text, self.metrics.max_chars_per_line)?;
        let count = self.scrollback.len();
        if count > self.metrics.visible_lines {
            self.scroll_position = count - self.metrics.visible_lines;
        }
        Ok(())
    }

    // Keeps going after a rejected line; the first rejection is kept in
    // `dropped` for the caller to report.
    fn emit(&mut self, text: &str, dropped: &mut Option<ShellError>) {
        if let Err(e) = self.append_line(text) {
            log::warn!("dropped scrollback line: {}", e);
            dropped.get_or_insert(e);
        }
    }

    /// Process one key event.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<HostRequest>, ShellError> {
        match key {
            KeyEvent::Enter => return self.submit(),
            KeyEvent::Char(c) if !c.is_control() => self.input.insert(c)?,
            KeyEvent::Char(_) => {}
            KeyEvent::Backspace => self.input.backspace(),
            KeyEvent::Left => self.input.left(),
            KeyEvent::Right => self.input.right(),
            KeyEvent::Up => self.history_up(),
            KeyEvent::Down => self.history_down(),
            KeyEvent::PageUp => self.page_up(),
            KeyEvent::PageDown => self.page_down(),
        }
        Ok(None)
    }

    /// Insert each character of `text` at the cursor.
    pub fn type_text(&mut self, text: &str) -> Result<(), ShellError> {
        for c in text.chars() {
            self.handle_key(KeyEvent::Char(c))?;
        }
        Ok(())
    }

    /// Run the input line. The input is cleared whatever the outcome.
    ///
    /// Output rejected by a full scrollback fails the submit with
    /// `CapacityExceeded` once the command and its effect have run; a host
    /// request is not returned in that case.
    pub fn submit(&mut self) -> Result<Option<HostRequest>, ShellError> {
        let mut dropped = None;
        let request = self.dispatch(&mut dropped);
        match dropped {
            Some(e) => Err(e),
            None => Ok(request),
        }
    }

    fn dispatch(&mut self, dropped: &mut Option<ShellError>) -> Option<HostRequest> {
        let line = self.input.take();
        self.history.push(&line);
        self.emit(&format!("{}{}", PROMPT, line), dropped);

        let tokens: Vec<String> = line.split_whitespace().map(String::from).collect();
        let (name, args) = tokens.split_first()?;
        let Some(command) = self.registry.get(name) else {
            // No output for unknown commands beyond the echo.
            log::debug!("unrecognized command '{}'", name);
            return None;
        };

        let result = match self.fs.try_borrow_mut() {
            Ok(mut fs) => command.execute(CommandContext {
                args,
                fs: &mut fs,
                history: &self.history,
            }),
            Err(_) => {
                log::warn!("'{}' skipped: filesystem is borrowed elsewhere", name);
                crate::commands::CommandResult::error("Error: Filesystem busy")
            }
        };
        log::debug!("'{}' produced {} lines", name, result.lines.len());

        for line in &result.lines {
            self.emit(line, dropped);
        }
        match result.effect? {
            CommandEffect::ClearScrollback => {
                self.scrollback.clear();
                self.scroll_position = 0;
                None
            }
            CommandEffect::OpenEditor(path) => Some(HostRequest::OpenEditor(path)),
            CommandEffect::Reboot => Some(HostRequest::Reboot),
        }
    }

    pub fn history_up(&mut self) {
        if let Some(entry) = self.history.older() {
            let entry = entry.to_string();
            self.input.set(&entry);
        }
    }

    pub fn history_down(&mut self) {
        match self.history.newer() {
            Some(entry) => {
                let entry = entry.to_string();
                self.input.set(&entry);
            }
            None => self.input.clear(),
        }
    }

    fn max_scroll(&self) -> usize {
        self.metrics.max_scroll(self.scrollback.len())
    }

    pub fn page_up(&mut self) {
        self.scroll_position = self
            .scroll_position
            .saturating_sub(self.metrics.visible_lines)
            .min(self.max_scroll());
    }

    pub fn page_down(&mut self) {
        self.scroll_position = self
            .scroll_position
            .saturating_add(self.metrics.visible_lines)
            .min(self.max_scroll());
    }

    /// Scroll by wheel notches; positive moves toward older lines.
    pub fn scroll_wheel(&mut self, notches: i32) {
        let steps = notches.unsigned_abs() as usize;
        self.scroll_position = if notches > 0 {
            self.scroll_position.saturating_sub(steps)
        } else {
            self.scroll_position.saturating_add(steps)
        }
        .min(self.max_scroll());
    }

    /// Recompute the viewport for `area` and describe what to draw.
    pub fn render(&mut self, area: ContentArea) -> Frame {
        self.metrics = ViewportMetrics::from_area(area, &self.glyph);
        self.scroll_position = self.scroll_position.min(self.max_scroll());

        let line_count = self.scrollback.len();
        let cwd = match self.fs.try_borrow() {
            Ok(fs) => fs.current_path(),
            Err(_) => "?".to_string(),
        };
        Frame {
            lines: self
                .scrollback
                .window(self.scroll_position, self.metrics.visible_lines)
                .to_vec(),
            cwd: cwd_indicator(&cwd, self.metrics.max_chars_per_line),
            prompt: format!("{}{}", PROMPT, self.input.as_str()),
            cursor_column: PROMPT.len() + self.input.cursor(),
            scrollbar: scrollbar(area, &self.glyph, self.metrics, line_count, self.scroll_position),
            line_count,
            scroll_position: self.scroll_position,
            visible_lines: self.metrics.visible_lines,
        }
    }

    /// Back to the welcome lines with empty history and input. The file
    /// system is left as it is.
    pub fn reset(&mut self) {
        self.scrollback.clear();
        self.history.clear();
        self.input.clear();
        self.scroll_position = 0;
        self.emit_welcome();
        log::info!("shell reset");
    }

    fn emit_welcome(&mut self) {
        let mut dropped = None;
        for line in WELCOME_LINES {
            self.emit(line, &mut dropped);
        }
    }
}
