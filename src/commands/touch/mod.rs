// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::NodeKind;

/// `touch <file>`: create an empty file.
pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.arg(0) else {
            return CommandResult::error("Error: No file specified.");
        };
        match ctx.fs.create(path, NodeKind::File) {
            Ok(_) => CommandResult::line("File created"),
            Err(e) => CommandResult::error(format!("Error: Could not create file ({})", e)),
        }
    }
}
