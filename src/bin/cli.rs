//! envblock CLI
//!
//! Command-line editor for a fixed-size environment block file.

use std::io;

use clap::{Parser, Subcommand};
use envblock::command::Command;
use envblock::config::{parse_block_size, DEFAULT_BLOCK_SIZE};
use envblock::storage::BlockLocation;
use envblock::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// envblock
#[derive(Parser, Debug)]
#[command(name = "envblock")]
#[command(about = "Edit a GRUB-style environment block (checksum ignored)")]
#[command(version)]
struct Args {
    /// Block size in bytes (decimal, 0x hex or leading-0 octal)
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE, value_parser = parse_size)]
    size: usize,

    /// Environment block file, or "-" for stdin/stdout
    file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new blank block (or clear an existing one)
    Create,

    /// Print all variables
    List,

    /// Print the value of a single variable
    Get {
        /// The variable to read
        #[arg(allow_hyphen_values = true)]
        key: String,
    },

    /// Add or update a variable
    Set {
        /// Assignment in VAR=value form
        #[arg(allow_hyphen_values = true)]
        assignment: String,
    },

    /// Delete a variable
    Unset {
        /// The variable to delete
        #[arg(allow_hyphen_values = true)]
        key: String,
    },

    /// Wipe all variables
    Clear,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Create => Command::Create,
            Commands::List => Command::List,
            Commands::Get { key } => Command::Get { key },
            Commands::Set { assignment } => Command::Set { assignment },
            Commands::Unset { key } => Command::Unset { key },
            Commands::Clear => Command::Clear,
        }
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    parse_block_size(s).map_err(|e| e.to_string())
}

fn main() {
    // Logs go to stderr: stdout may be carrying the block itself
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let location = BlockLocation::parse(&args.file);
    tracing::debug!(%location, size = args.size, "envblock v{}", envblock::VERSION);

    let config = match Config::builder()
        .block_size(args.size)
        .location(location)
        .build()
    {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let command = Command::from(args.command);
    let engine = Engine::new(config);

    let response = match engine.run(&command) {
        Ok(response) => response,
        Err(e) => fail(e),
    };

    if let Err(e) = response.write_to(&mut io::stdout().lock()) {
        fail(e);
    }
}

fn fail(error: impl std::fmt::Display) -> ! {
    tracing::error!("{}", error);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Command {
        Command::from(Args::try_parse_from(argv).unwrap().command)
    }

    #[test]
    fn test_keys_may_start_with_hyphen() {
        assert_eq!(
            parse(&["envblock", "grubenv", "get", "-weird"]),
            Command::Get { key: "-weird".into() }
        );
        assert_eq!(
            parse(&["envblock", "grubenv", "unset", "-x"]),
            Command::Unset { key: "-x".into() }
        );
        assert_eq!(
            parse(&["envblock", "grubenv", "set", "-k=v"]),
            Command::Set { assignment: "-k=v".into() }
        );
    }

    #[test]
    fn test_size_option() {
        let args = Args::try_parse_from(["envblock", "-s", "0x200", "-", "list"]).unwrap();
        assert_eq!(args.size, 512);
        assert_eq!(args.file, "-");
    }
}
