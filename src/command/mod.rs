//! Command Module
//!
//! The edit commands understood by the engine and what they answer with.
//!
//! ### Commands
//! - create       - blank block carrying only the header comment
//! - list         - every record, as stored
//! - get KEY      - value of one key
//! - set KEY=VAL  - insert or update a key
//! - unset KEY    - remove a key
//! - clear        - blank block

mod request;
mod response;

pub use request::{Command, CommandType};
pub use response::Response;
