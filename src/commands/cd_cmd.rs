use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let changed = match ctx.arg(0) {
            Some(dir) => ctx.fs.change_directory(dir).map_err(|e| log::debug!("cd: {}", e)).is_ok(),
            None => false,
        };
        if changed {
            CommandResult::line("Directory changed")
        } else {
            CommandResult::error("Error: Invalid directory")
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
        CdCommand.execute(CommandContext { args: &args, fs, history: &history })
    }

    #[test]
    fn test_cd_changes_directory() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        assert_eq!(run(&mut fs, &["home"]).lines, vec!["Directory changed"]);
        assert_eq!(fs.current_path(), "/home");
        run(&mut fs, &[".."]);
        assert_eq!(fs.current_path(), "/");
    }

    #[test]
    fn test_cd_failures_keep_directory() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        fs.change_directory("/apps").unwrap();
        for args in [&[][..], &["/nope"][..], &["/home/welcome.txt"][..]] {
            assert_eq!(run(&mut fs, args).lines, vec!["Error: Invalid directory"]);
        }
        assert_eq!(fs.current_path(), "/apps");
    }
}
