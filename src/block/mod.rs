//! Record Block Module
//!
//! Fixed-size buffer holding `KEY=VALUE` records.
//!
//! ## Responsibilities
//! - Parse records straight out of the buffer (no separate index)
//! - Look up, insert, update and remove records in place
//! - Keep the padding zeroed and the last byte free
//!
//! ## Block Layout
//! ```text
//! ┌────────────┬──┬─────────────┬──┬─────┬─────────────────────────┐
//! │ KEY=VALUE  │\0│ KEY=VALUE   │\0│ ... │ \0 \0 \0 ... (padding)  │
//! └────────────┴──┴─────────────┴──┴─────┴─────────────────────────┘
//! 0                                      used_length          capacity
//! ```
//!
//! The buffer is the only source of truth: every lookup is a linear scan,
//! and what is in memory is byte-for-byte what gets written out.

mod record;

pub use record::{
    parse_assignment, validate_key, validate_value, Record, RecordLocation, Records, SEPARATOR,
    TERMINATOR,
};

use crate::error::{EnvError, Result};

/// Fixed-capacity block of NUL-terminated records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBlock {
    /// Always exactly `capacity` bytes long
    bytes: Vec<u8>,
}

impl RecordBlock {
    /// Create a blank block of `capacity` zero bytes
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity],
        }
    }

    /// Build a block from raw bytes
    ///
    /// Copies at most `capacity` bytes from `source`; anything past the end
    /// of `source` is zero. An empty source gives a blank block.
    pub fn load(capacity: usize, source: &[u8]) -> Self {
        let mut block = Self::new(capacity);
        let n = source.len().min(capacity);
        block.bytes[..n].copy_from_slice(&source[..n]);
        block
    }

    /// Total size of the block in bytes
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Iterate over the records currently in the block
    pub fn records(&self) -> Records<'_> {
        Records::new(&self.bytes)
    }

    /// Snapshot of all `(key, value)` pairs in storage order
    ///
    /// Records without a `=` (such as the header comment) carry no pair and
    /// are skipped; use [`RecordBlock::records`] to see them.
    pub fn entries(&self) -> Vec<(String, String)> {
        self.records()
            .filter_map(|record| {
                let key = record.key()?;
                let value = record.value()?;
                Some((
                    String::from_utf8_lossy(key).into_owned(),
                    String::from_utf8_lossy(value).into_owned(),
                ))
            })
            .collect()
    }

    /// Locate the first record whose key is exactly `key`
    pub fn find(&self, key: &str) -> Option<RecordLocation> {
        self.records()
            .find(|record| record.has_key(key.as_bytes()))
            .map(|record| record.location())
    }

    /// Value stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<String> {
        self.records()
            .find(|record| record.has_key(key.as_bytes()))
            .and_then(|record| record.value())
            .map(|value| String::from_utf8_lossy(value).into_owned())
    }

    /// Bytes occupied by records, i.e. where the next record would go
    pub fn used_length(&self) -> usize {
        let mut records = self.records();
        while records.next().is_some() {}
        records.offset()
    }

    /// True if a record of `additional` bytes fits and still leaves one
    /// zero byte at the end of the block
    pub fn has_room(&self, additional: usize) -> bool {
        self.fits(self.used_length(), additional)
    }

    /// Raw block contents, padding included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the block, returning its buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert or update `key`
    ///
    /// An existing record for `key` is removed and the new one appended at
    /// the end. Room is checked against the block as it would be after the
    /// removal, before anything is touched: on `CapacityExceeded` the block
    /// is left exactly as it was.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        validate_value(value)?;

        // key + '=' + value + terminator
        let needed = key.len() + 1 + value.len() + 1;
        let existing = self.find(key);
        let used = self.used_length() - existing.map_or(0, |loc| loc.len);

        if !self.fits(used, needed) {
            return Err(EnvError::CapacityExceeded {
                needed,
                available: self.capacity().saturating_sub(used + 1),
            });
        }

        if let Some(location) = existing {
            self.remove(location);
        }

        let offset = self.used_length();
        let end = offset + needed - 1;
        self.bytes[offset..offset + key.len()].copy_from_slice(key.as_bytes());
        self.bytes[offset + key.len()] = SEPARATOR;
        self.bytes[offset + key.len() + 1..end].copy_from_slice(value.as_bytes());
        self.bytes[end] = TERMINATOR;

        tracing::trace!(key, offset, len = needed, "record written");
        Ok(())
    }

    /// Parse `KEY=VALUE` and set it
    pub fn set_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = parse_assignment(assignment)?;
        self.set(key, value)
    }

    /// Remove `key` if present; returns whether anything was removed
    pub fn unset(&mut self, key: &str) -> bool {
        match self.find(key) {
            Some(location) => {
                self.remove(location);
                tracing::trace!(key, offset = location.offset, "record removed");
                true
            }
            None => false,
        }
    }

    /// Zero the whole block
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Clear the block and write `header` raw at offset 0
    ///
    /// The header is not a `KEY=VALUE` pair; it is cut short if needed so the
    /// last byte of the block stays zero. Returns the bytes written.
    pub fn write_header(&mut self, header: &str) -> usize {
        self.clear();
        let n = header.len().min(self.capacity().saturating_sub(1));
        self.bytes[..n].copy_from_slice(&header.as_bytes()[..n]);
        n
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn fits(&self, used: usize, additional: usize) -> bool {
        used.checked_add(additional).is_some_and(|total| total < self.capacity())
    }

    /// Close the gap left by `location` and zero the vacated tail
    fn remove(&mut self, location: RecordLocation) {
        let capacity = self.capacity();
        self.bytes.copy_within(location.end().., location.offset);
        self.bytes[capacity - location.len..].fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_zeroes_tail() {
        let mut block = RecordBlock::load(12, b"A=1\0BB=22\0");
        block.remove(RecordLocation { offset: 0, len: 4 });

        assert_eq!(block.as_bytes(), b"BB=22\0\0\0\0\0\0\0");
    }

    #[test]
    fn test_remove_unterminated_tail_record() {
        let mut block = RecordBlock::load(8, b"A=1\0B=22");
        assert_eq!(block.used_length(), 8);

        assert!(block.unset("B"));
        assert_eq!(block.as_bytes(), b"A=1\0\0\0\0\0");
        assert_eq!(block.used_length(), 4);
    }

    #[test]
    fn test_full_unterminated_block_has_no_room() {
        let block = RecordBlock::load(8, b"ABCDEFGH");
        assert_eq!(block.used_length(), 8);
        assert!(!block.has_room(0));
    }
}
