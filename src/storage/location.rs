//! Block location
//!
//! Where a block is loaded from and saved to.

use std::fmt;
use std::path::{Path, PathBuf};

/// Source and sink of a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLocation {
    /// A file, created on save if missing
    File(PathBuf),

    /// Standard input for loading, standard output for saving
    Stdio,
}

impl BlockLocation {
    /// Name used on the command line for standard streams
    pub const STDIO_NAME: &'static str = "-";

    /// Interpret a command-line path argument (`-` means standard streams)
    pub fn parse(arg: &str) -> Self {
        if arg == Self::STDIO_NAME {
            Self::Stdio
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// File path, if this is a file location
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdio => None,
        }
    }
}

impl fmt::Display for BlockLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdio => f.write_str(Self::STDIO_NAME),
        }
    }
}
