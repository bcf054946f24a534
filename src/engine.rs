//! Engine Module
//!
//! Runs commands against a stored block.
//!
//! ## Responsibilities
//! - Load the block from its configured location
//! - Apply one command to it
//! - Save it back when the command changed it
//!
//! Every run is load → execute → save on a single in-memory block; nothing
//! is written if the command fails.

use crate::block::RecordBlock;
use crate::command::{Command, Response};
use crate::config::Config;
use crate::error::Result;
use crate::storage;

/// Header comment written as the first record of a fresh block
pub const HEADER: &str = "# GRUB Environment Block\n";

/// Applies commands to the block described by a [`Config`]
#[derive(Debug, Clone)]
pub struct Engine {
    /// Engine configuration
    config: Config,
}

impl Engine {
    /// Create an engine for the given config
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run a command end to end
    ///
    /// Steps:
    /// 1. Load the block (blank for `create`)
    /// 2. Execute the command
    /// 3. Save the block if the command mutates it
    pub fn run(&self, command: &Command) -> Result<Response> {
        let size = self.config.block_size;
        let location = &self.config.location;

        // Step 1: Load
        let mut block = if command.needs_existing() {
            storage::load(location, size)?
        } else {
            RecordBlock::new(size)
        };

        // Step 2: Execute
        let response = Self::execute(&mut block, command)?;

        // Step 3: Save
        if command.mutates() {
            storage::save(location, &block)?;
            tracing::debug!(command = %command.command_type(), %location, "block saved");
        }

        Ok(response)
    }

    /// Apply a command to an in-memory block
    pub fn execute(block: &mut RecordBlock, command: &Command) -> Result<Response> {
        tracing::debug!(command = %command.command_type(), "executing");

        match command {
            Command::Create => {
                let written = block.write_header(HEADER);
                if written < HEADER.len() {
                    tracing::warn!(
                        capacity = block.capacity(),
                        written,
                        "block too small for the full header, truncated"
                    );
                }
                Ok(Response::Done)
            }
            Command::List => Ok(Response::Records(
                block.records().map(|record| record.to_string_lossy()).collect(),
            )),
            Command::Get { key } => Ok(Response::Value(block.get(key))),
            Command::Set { assignment } => {
                block.set_assignment(assignment)?;
                Ok(Response::Done)
            }
            Command::Unset { key } => {
                if !block.unset(key) {
                    tracing::debug!(key = %key, "unset: key not present");
                }
                Ok(Response::Done)
            }
            Command::Clear => {
                block.clear();
                Ok(Response::Done)
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
