//! Configuration for envblock
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{EnvError, Result};
use crate::storage::BlockLocation;

/// Block size used when none is given (matches GRUB's env block)
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Smallest block size accepted
pub const MIN_BLOCK_SIZE: usize = 8;

/// Main configuration for an envblock session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Block Configuration
    // -------------------------------------------------------------------------
    /// Fixed size of the block in bytes, for both reading and writing
    pub block_size: usize,

    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Where the block is read from and written back to
    pub location: BlockLocation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            location: BlockLocation::File(PathBuf::from("grubenv")),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the block size (in bytes)
    pub fn block_size(mut self, size: usize) -> Self {
        self.config.block_size = size;
        self
    }

    /// Set the block location
    pub fn location(mut self, location: BlockLocation) -> Self {
        self.config.location = location;
        self
    }

    /// Read and write the block at `path`
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.location = BlockLocation::File(path.into());
        self
    }

    /// Validate and produce the config
    pub fn build(self) -> Result<Config> {
        if self.config.block_size < MIN_BLOCK_SIZE {
            return Err(EnvError::InvalidArgument(format!(
                "block size {} is below the minimum of {}",
                self.config.block_size, MIN_BLOCK_SIZE
            )));
        }
        Ok(self.config)
    }
}

/// Parse a block size the way C's `strtoul(s, NULL, 0)` does:
/// `0x`/`0X` prefix is hex, a leading `0` is octal, anything else decimal.
pub fn parse_block_size(input: &str) -> Result<usize> {
    let s = input.trim();
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.starts_with('0') {
        (&s[1..], 8)
    } else {
        (s, 10)
    };

    usize::from_str_radix(digits, radix)
        .map_err(|e| EnvError::Config(format!("invalid block size '{}': {}", input, e)))
}
