use crate::commands::{Command, CommandContext, CommandEffect, CommandResult};

pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::empty().with_effect(CommandEffect::ClearScrollback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FsLimits;
    use crate::fs::VirtualFileSystem;
    use crate::shell::HistoryRing;

    #[test]
    fn test_clear_requests_scrollback_reset() {
        let mut fs = VirtualFileSystem::new(FsLimits::default());
        let history = HistoryRing::new(4);
        let result = ClearCommand.execute(CommandContext { args: &[], fs: &mut fs, history: &history });
        assert!(result.lines.is_empty());
        assert_eq!(result.effect, Some(CommandEffect::ClearScrollback));
    }
}
