use crate::commands::{Command, CommandContext, CommandEffect, CommandResult};

/// `reboot`: asks the host to reset the system.
pub struct RebootCommand;

impl Command for RebootCommand {
    fn name(&self) -> &'static str {
        "reboot"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::line("Rebooting...").with_effect(CommandEffect::Reboot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FsLimits;
    use crate::fs::VirtualFileSystem;
    use crate::shell::HistoryRing;

    #[test]
    fn test_reboot_signals_host() {
        let mut fs = VirtualFileSystem::new(FsLimits::default());
        let history = HistoryRing::new(4);
        let result = RebootCommand.execute(CommandContext { args: &[], fs: &mut fs, history: &history });
        assert_eq!(result.lines, vec!["Rebooting..."]);
        assert_eq!(result.effect, Some(CommandEffect::Reboot));
    }
}
