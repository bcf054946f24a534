//! Command definitions
//!
//! Represents one edit of a block.

use std::fmt;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Create,
    List,
    Get,
    Set,
    Unset,
    Clear,
}

impl CommandType {
    /// Name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::Create => "create",
            CommandType::List => "list",
            CommandType::Get => "get",
            CommandType::Set => "set",
            CommandType::Unset => "unset",
            CommandType::Clear => "clear",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start over with a blank block holding the header comment
    Create,

    /// List every record
    List,

    /// Get the value of a key
    Get { key: String },

    /// Set a key from a raw `KEY=VALUE` assignment
    Set { assignment: String },

    /// Remove a key
    Unset { key: String },

    /// Wipe every record
    Clear,
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::Create => CommandType::Create,
            Command::List => CommandType::List,
            Command::Get { .. } => CommandType::Get,
            Command::Set { .. } => CommandType::Set,
            Command::Unset { .. } => CommandType::Unset,
            Command::Clear => CommandType::Clear,
        }
    }

    /// True if the block must be saved after this command
    pub fn mutates(&self) -> bool {
        !matches!(self, Command::List | Command::Get { .. })
    }

    /// True if the command works on the block already stored
    ///
    /// `create` builds its block from scratch, so nothing is loaded for it.
    pub fn needs_existing(&self) -> bool {
        !matches!(self, Command::Create)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_only_commands() {
        assert!(!Command::List.mutates());
        assert!(!Command::Get { key: "k".into() }.mutates());
        assert!(Command::Clear.mutates());
        assert!(Command::Unset { key: "k".into() }.mutates());
        assert!(Command::Set { assignment: "k=v".into() }.mutates());
        assert!(Command::Create.mutates());
    }

    #[test]
    fn test_only_create_skips_load() {
        assert!(!Command::Create.needs_existing());
        assert!(Command::Clear.needs_existing());
        assert!(Command::List.needs_existing());
    }

    #[test]
    fn test_command_type_names() {
        assert_eq!(Command::Unset { key: "k".into() }.command_type().to_string(), "unset");
        assert_eq!(CommandType::Create.name(), "create");
    }
}
