// src/commands/types.rs
use crate::fs::VirtualFileSystem;
use crate::shell::HistoryRing;

/// Side effects a command asks the shell to carry out after its lines are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    ClearScrollback,
    OpenEditor(String),
    Reboot,
}

/// Command output: scrollback lines plus an optional effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub lines: Vec<String>,
    pub effect: Option<CommandEffect>,
}

impl CommandResult {
    pub fn success(lines: Vec<String>) -> Self {
        Self { lines, effect: None }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::success(vec![line.into()])
    }

    /// A failed command reports exactly one line.
    pub fn error(message: impl Into<String>) -> Self {
        Self::line(message)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_effect(mut self, effect: CommandEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Execution context. `args` excludes the command name.
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub fs: &'a mut VirtualFileSystem,
    pub history: &'a HistoryRing,
}

impl<'a> CommandContext<'a> {
    /// Argument at `index`, if any.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }
}

pub trait Command {
    fn name(&self) -> &'static str;

    /// Other names the command answers to.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
