use crate::commands::{Command, CommandContext, CommandEffect, CommandResult};

/// `edit <file>`: hands an existing file to the host's editor.
pub struct EditCommand;

impl Command for EditCommand {
    fn name(&self) -> &'static str {
        "edit"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.arg(0) else {
            return CommandResult::error("Error: No file specified.");
        };
        let target = match ctx.fs.read(path) {
            Ok(_) => ctx.fs.resolve(path).ok().and_then(|id| ctx.fs.path_of(id)),
            Err(e) => {
                log::debug!("edit {}: {}", path, e);
                None
            }
        };
        match target {
            Some(absolute) => CommandResult::empty().with_effect(CommandEffect::OpenEditor(absolute)),
            None => CommandResult::error("Error: File not found or cannot be read."),
        }
    }
}
