use crate::command::Command;
use crate::error::{Error, Result};

/// Sibling commands keyed by name, kept in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command; names and aliases must not collide with existing ones.
    pub fn register(&mut self, command: Command) -> Result<()> {
        for key in command.keys() {
            if self.get(key).is_some() {
                return Err(Error::DuplicateCommand(key.to_string()));
            }
        }
        self.commands.push(command);
        Ok(())
    }

    /// Exact match on name or alias.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.keys().any(|k| k == name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.commands.iter_mut().find(|c| c.keys().any(|k| k == name))
    }

    pub fn names(&self) -> Vec<String> {
        self.commands.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
