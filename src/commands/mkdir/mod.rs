// src/commands/mkdir/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::NodeKind;

/// `nedir <dir>` / `mkdir <dir>`
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "nedir"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["mkdir"]
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.arg(0) else {
            return CommandResult::error("Error: Could not create directory");
        };
        match ctx.fs.create(path, NodeKind::Directory) {
            Ok(_) => CommandResult::line("Directory created"),
            Err(e) => CommandResult::error(format!("Error: Could not create directory ({})", e)),
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
        MkdirCommand.execute(CommandContext { args: &args, fs, history: &history })
    }

    #[test]
    fn test_creates_directory() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        assert_eq!(run(&mut fs, &["/home/projects"]).lines, vec!["Directory created"]);
        let id = fs.resolve("/home/projects").unwrap();
        assert!(fs.node(id).unwrap().is_directory());
    }

    #[test]
    fn test_reports_failures() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        assert_eq!(run(&mut fs, &[]).lines, vec!["Error: Could not create directory"]);

        let result = run(&mut fs, &["home"]);
        assert_eq!(result.lines.len(), 1);
        assert!(result.lines[0].starts_with("Error: Could not create directory"));
        assert!(result.lines[0].contains("already exists"));

        let result = run(&mut fs, &["/missing/dir"]);
        assert!(result.lines[0].contains("parent directory not found"));
    }
}
