//! Record views and assignment parsing
//!
//! A record is one `KEY=VALUE` string followed by a single NUL byte.

use crate::error::{EnvError, Result};

/// Byte separating key from value
pub const SEPARATOR: u8 = b'=';

/// Record terminator, also the padding byte
pub const TERMINATOR: u8 = 0;

/// Position of a record inside a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLocation {
    /// Byte offset of the first key byte
    pub offset: usize,

    /// Bytes occupied on disk, terminator included
    pub len: usize,
}

impl RecordLocation {
    /// Offset one past the record's last byte
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Borrowed view of one record in a block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    location: RecordLocation,
    raw: &'a [u8],
}

impl<'a> Record<'a> {
    pub(crate) fn new(location: RecordLocation, raw: &'a [u8]) -> Self {
        Self { location, raw }
    }

    /// Where this record sits in the block
    pub fn location(&self) -> RecordLocation {
        self.location
    }

    /// Record text without the terminator
    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }

    /// Bytes before the first `=`, or `None` if the record has no `=`
    pub fn key(&self) -> Option<&'a [u8]> {
        self.split().map(|(key, _)| key)
    }

    /// Bytes after the first `=`, or `None` if the record has no `=`
    pub fn value(&self) -> Option<&'a [u8]> {
        self.split().map(|(_, value)| value)
    }

    /// True if this record's key is exactly `key`
    pub fn has_key(&self, key: &[u8]) -> bool {
        self.key() == Some(key)
    }

    /// Record text, with invalid UTF-8 replaced
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.raw).into_owned()
    }

    fn split(&self) -> Option<(&'a [u8], &'a [u8])> {
        let eq = self.raw.iter().position(|&b| b == SEPARATOR)?;
        Some((&self.raw[..eq], &self.raw[eq + 1..]))
    }
}

/// Iterator over the records of a block, in storage order
///
/// Stops at the first zero byte or at the end of the buffer. A final record
/// that runs into the end of the buffer without a terminator is still
/// yielded; its length then stops at the buffer end.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Records<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Offset the scan has reached so far
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset;
        if start >= self.bytes.len() || self.bytes[start] == TERMINATOR {
            return None;
        }

        let rest = &self.bytes[start..];
        let (raw, len) = match rest.iter().position(|&b| b == TERMINATOR) {
            Some(nul) => (&rest[..nul], nul + 1),
            None => (rest, rest.len()),
        };

        self.offset = start + len;
        Some(Record::new(RecordLocation { offset: start, len }, raw))
    }
}

/// Split a `KEY=VALUE` argument at its first `=`
///
/// Fails if there is no `=` or the key would be empty.
pub fn parse_assignment(arg: &str) -> Result<(&str, &str)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(EnvError::InvalidArgument(format!(
            "set: VAR=value required, got '{}'",
            arg
        ))),
    }
}

/// Check that `key` can be stored as a record key
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(EnvError::InvalidArgument("key must not be empty".to_string()));
    }
    if key.as_bytes().contains(&SEPARATOR) {
        return Err(EnvError::InvalidArgument(format!(
            "key '{}' must not contain '='",
            key
        )));
    }
    if key.as_bytes().contains(&TERMINATOR) {
        return Err(EnvError::InvalidArgument("key must not contain NUL".to_string()));
    }
    Ok(())
}

/// Check that `value` can be stored as a record value
pub fn validate_value(value: &str) -> Result<()> {
    if value.as_bytes().contains(&TERMINATOR) {
        return Err(EnvError::InvalidArgument(
            "value must not contain NUL".to_string(),
        ));
    }
    Ok(())
}
