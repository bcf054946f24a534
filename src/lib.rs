//! # envblock
//!
//! Editor for fixed-size environment blocks in the GRUB `grubenv` layout:
//! - `KEY=VALUE` records, each terminated by a single NUL byte
//! - Records packed from offset 0, zero padding up to the block size
//! - No checksum; the bytes on disk are the in-memory buffer
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     CLI (envblock)                          │
//! │            create | list | get | set | unset | clear        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Engine                                │
//! │                load → execute → save                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Storage   │          │ RecordBlock │
//!   │ (file/stdio)│          │ (fixed buf) │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod block;
pub mod storage;
pub mod command;
pub mod engine;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{EnvError, Result};
pub use config::Config;
pub use block::RecordBlock;
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of envblock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
