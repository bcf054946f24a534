//! Storage Module
//!
//! Moves whole blocks between memory and the outside world.
//!
//! ## Responsibilities
//! - Resolve where a block lives (a file, or stdin/stdout for `-`)
//! - Read exactly one block, zero-padding short input
//! - Write exactly one block, padding included
//!
//! The block format has no header or checksum: the bytes on disk are the
//! in-memory buffer, so there is no encoding step here.

mod location;
mod stream;

pub use location::BlockLocation;
pub use stream::{load, read_block, save, write_block};
