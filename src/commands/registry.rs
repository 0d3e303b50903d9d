// src/commands/registry.rs
use indexmap::IndexMap;

use super::types::Command;

/// Command table keyed by name, in registration order.
pub struct CommandRegistry {
    commands: IndexMap<&'static str, Box<dyn Command>>,
    aliases: IndexMap<&'static str, &'static str>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
            aliases: IndexMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        for &alias in cmd.aliases() {
            self.aliases.insert(alias, cmd.name());
        }
        self.commands.insert(cmd.name(), cmd);
    }

    /// Exact, case-sensitive lookup by name or alias.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        let name = self.aliases.get(name).copied().unwrap_or(name);
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn names(&self) -> Vec<&str> {
        self.commands.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat::{CatCommand, ViewCommand};
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::edit_cmd::EditCommand;
use super::help_cmd::HelpCommand;
use super::history_cmd::HistoryCommand;
use super::ls::LsCommand;
use super::mkdir::MkdirCommand;
use super::mv::MvCommand;
use super::pwd::PwdCommand;
use super::reboot_cmd::RebootCommand;
use super::rm::RmCommand;
use super::touch::TouchCommand;

/// Register every built-in shell command.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(PwdCommand));
    registry.register(Box::new(ViewCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(EditCommand));
    registry.register(Box::new(MkdirCommand));
    registry.register(Box::new(TouchCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(MvCommand));
    registry.register(Box::new(HistoryCommand));
    registry.register(Box::new(ClearCommand));
    registry.register(Box::new(RebootCommand));
}

/// Create a registry holding the built-in commands.
pub fn create_builtin_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_and_aliases() {
        let registry = create_builtin_registry();
        assert_eq!(registry.get("dir").map(|c| c.name()), Some("ls"));
        assert_eq!(registry.get("mkdir").map(|c| c.name()), Some("nedir"));
        assert!(registry.contains("reboot"));
        assert!(!registry.contains("LS"));
        assert!(!registry.contains("frobnicate"));
        assert_eq!(registry.names()[..3], ["help", "ls", "cd"]);
    }
}
