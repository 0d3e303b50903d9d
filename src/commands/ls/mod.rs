// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{format_size, format_time, DirEntry};

/// `ls` / `dir`: list a directory, one level into each subdirectory.
pub struct LsCommand;

fn format_entry(entry: &DirEntry, indent: &str) -> String {
    format!(
        "{}{}  {}  {}",
        indent,
        entry.name,
        format_size(entry.size),
        format_time(&entry.modified)
    )
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["dir"]
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let dir = match ctx.arg(0) {
            Some(path) => match ctx.fs.resolve(path) {
                Ok(id) if ctx.fs.node(id).is_some_and(|n| n.is_directory()) => id,
                _ => return CommandResult::error("Error: Invalid directory"),
            },
            None => ctx.fs.current_directory(),
        };

        let mut lines = Vec::new();
        for entry in ctx.fs.list_node(dir) {
            lines.push(format_entry(&entry, ""));
            if entry.is_directory() {
                for child in ctx.fs.list_node(entry.id) {
                    lines.push(format_entry(&child, "  "));
                }
            }
        }
        CommandResult::success(lines)
    }
}
