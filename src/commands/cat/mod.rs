// src/commands/cat/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{FsError, VirtualFileSystem};

const NO_FILE: &str = "Error: No file specified.";
const UNREADABLE: &str = "Error: File not found or cannot be read.";

fn read_lines(fs: &VirtualFileSystem, path: &str) -> Result<Vec<String>, FsError> {
    let content = fs.read(path)?;
    Ok(String::from_utf8_lossy(content).lines().map(String::from).collect())
}

/// `view <file>`: non-empty lines of a file under a header line.
pub struct ViewCommand;

impl Command for ViewCommand {
    fn name(&self) -> &'static str {
        "view"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(path) = ctx.arg(0) else {
            return CommandResult::error(NO_FILE);
        };
        match read_lines(ctx.fs, path) {
            Ok(lines) => {
                let mut out = vec!["Viewing file:".to_string()];
                // Blank lines are not shown.
                out.extend(lines.into_iter().filter(|line| !line.is_empty()));
                CommandResult::success(out)
            }
            Err(e) => {
                log::debug!("view {}: {}", path, e);
                CommandResult::error(UNREADABLE)
            }
        }
    }
}

/// `cat [-n] <file>`: bare file content.
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut show_line_numbers = false;
        let mut file = None;
        for arg in ctx.args {
            match arg.as_str() {
                "-n" | "--number" => show_line_numbers = true,
                _ if file.is_none() => file = Some(arg.as_str()),
                _ => {}
            }
        }

        let Some(path) = file else {
            return CommandResult::error(NO_FILE);
        };
        match read_lines(ctx.fs, path) {
            Ok(lines) if show_line_numbers => CommandResult::success(
                lines
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| format!("{:6}  {}", i + 1, line))
                    .collect(),
            ),
            Ok(lines) => CommandResult::success(lines),
            Err(e) => {
                log::debug!("cat {}: {}", path, e);
                CommandResult::error(UNREADABLE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FsLimits;
    use crate::fs::NodeKind;
    use crate::shell::HistoryRing;

    fn run(cmd: &dyn Command, args: &[&str]) -> CommandResult {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        let history = HistoryRing::new(4);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        cmd.execute(CommandContext { args: &args, fs: &mut fs, history: &history })
    }

    #[test]
    fn test_view_welcome() {
        let result = run(&ViewCommand, &["/home/welcome.txt"]);
        assert_eq!(
            result.lines,
            vec!["Viewing file:", "Welcome to MicroOS!", "Type 'help' for commands."]
        );
    }

    #[test]
    fn test_view_errors() {
        assert_eq!(run(&ViewCommand, &[]).lines, vec![NO_FILE]);
        assert_eq!(run(&ViewCommand, &["/home"]).lines, vec![UNREADABLE]);
        assert_eq!(run(&ViewCommand, &["/missing"]).lines, vec![UNREADABLE]);
    }

    #[test]
    fn test_view_skips_blank_lines_cat_keeps_them() {
        let mut fs = VirtualFileSystem::seeded(FsLimits::default()).unwrap();
        fs.create("/home/notes", NodeKind::File).unwrap();
        fs.write("/home/notes", b"first\n\n\nsecond\n").unwrap();
        let history = HistoryRing::new(4);
        let args = vec!["/home/notes".to_string()];

        let result = ViewCommand.execute(CommandContext { args: &args, fs: &mut fs, history: &history });
        assert_eq!(result.lines, vec!["Viewing file:", "first", "second"]);

        let result = CatCommand.execute(CommandContext { args: &args, fs: &mut fs, history: &history });
        assert_eq!(result.lines, vec!["first", "", "", "second"]);
    }

    #[test]
    fn test_cat_plain_and_numbered() {
        let result = run(&CatCommand, &["home/welcome.txt"]);
        assert_eq!(result.lines, vec!["Welcome to MicroOS!", "Type 'help' for commands."]);

        let result = run(&CatCommand, &["-n", "/home/welcome.txt"]);
        assert_eq!(result.lines[0], "     1  Welcome to MicroOS!");
        assert_eq!(result.lines.len(), 2);
    }
}
