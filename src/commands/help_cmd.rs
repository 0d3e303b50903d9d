use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show this list"),
    ("ls", "List files in current directory"),
    ("dir", "List files and directories in current directory"),
    ("cd <dir>", "Change directory"),
    ("pwd", "Print working directory"),
    ("view <file>", "Display file contents"),
    ("cat <file>", "Print file contents"),
    ("edit <file>", "Edit file"),
    ("nedir <dir>", "Create a new directory"),
    ("mkdir <dir>", "Create directory"),
    ("touch <file>", "Create empty file"),
    ("rm [-r] <path>", "Delete file or directory"),
    ("mv <from> <to>", "Rename or move"),
    ("history", "Show command history"),
    ("clear", "Clear terminal"),
    ("reboot", "Reboots / Restarts the system"),
];

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        let mut lines = vec!["Available commands:".to_string()];
        lines.extend(
            COMMANDS
                .iter()
                .map(|(usage, summary)| format!("  {:<14}- {}", usage, summary)),
        );
        CommandResult::success(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create_builtin_registry;
    use crate::config::FsLimits;
    use crate::fs::VirtualFileSystem;
    use crate::shell::HistoryRing;

    fn run() -> CommandResult {
        let mut fs = VirtualFileSystem::new(FsLimits::default());
        let history = HistoryRing::new(4);
        HelpCommand.execute(CommandContext { args: &[], fs: &mut fs, history: &history })
    }

    #[test]
    fn test_help_layout() {
        let result = run();
        assert_eq!(result.lines[0], "Available commands:");
        assert_eq!(result.lines[2], "  ls            - List files in current directory");
        assert_eq!(result.lines.len(), COMMANDS.len() + 1);
    }

    #[test]
    fn test_every_listed_command_is_registered() {
        let registry = create_builtin_registry();
        for (usage, _) in COMMANDS {
            let name = usage.split_whitespace().next().unwrap();
            assert!(registry.contains(name), "{} is not registered", name);
        }
    }
}
