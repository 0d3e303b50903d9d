use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let total = ctx.history.len();
        let count = ctx
            .arg(0)
            .and_then(|arg| arg.parse::<usize>().ok())
            .unwrap_or(total)
            .min(total);

        let start = total - count;
        let lines = ctx
            .history
            .iter_oldest_first()
            .enumerate()
            .skip(start)
            .map(|(i, cmd)| format!("{:5}  {}", i + 1, cmd))
            .collect();
        CommandResult::success(lines)
    }
}
