// src/commands/mv/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

/// `mv <from> <to>`
pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let (Some(from), Some(to)) = (ctx.arg(0), ctx.arg(1)) else {
            return CommandResult::error("Error: Usage: mv <from> <to>");
        };
        match ctx.fs.rename(from, to) {
            Ok(_) => CommandResult::line("Renamed"),
            Err(e) => CommandResult::error(format!("Error: Could not rename ({})", e)),
        }
    }
}
