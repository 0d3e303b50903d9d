// src/commands/rm/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

/// `rm [-r] <path>`
pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut recursive = false;
        let mut target = None;
        for arg in ctx.args {
            match arg.as_str() {
                "-r" | "-R" | "--recursive" => recursive = true,
                _ if target.is_none() => target = Some(arg.as_str()),
                _ => {}
            }
        }

        let Some(path) = target else {
            return CommandResult::error("Error: No path specified.");
        };
        match ctx.fs.delete(path, recursive) {
            Ok(()) => CommandResult::line("Deleted"),
            Err(e) => CommandResult::error(format!("Error: Could not delete ({})", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FsLimits;
    use crate::fs::VirtualFileSystem;
    use crate::shell::HistoryRing;

    fn run(fs: &mut VirtualFileSystem, args: &[&str]) -> CommandResult {
        let history = HistoryRing::new(4);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        RmCommand.execute(CommandContext { args: &args, fs, history: &history })
    }

    #[test]
    fn test_rm_file() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        assert_eq!(run(&mut fs, &["/home/welcome.txt"]).lines, vec!["Deleted"]);
        assert!(fs.resolve("/home/welcome.txt").is_err());
    }

    #[test]
    fn test_rm_directory_needs_recursive() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        let result = run(&mut fs, &["/home"]);
        assert!(result.lines[0].contains("directory not empty"));
        assert!(fs.resolve("/home").is_ok());

        assert_eq!(run(&mut fs, &["-r", "/home"]).lines, vec!["Deleted"]);
        assert!(fs.resolve("/home").is_err());
    }

    #[test]
    fn test_rm_missing_argument() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        assert_eq!(run(&mut fs, &["-r"]).lines, vec!["Error: No path specified."]);
    }
}
