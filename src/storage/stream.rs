//! Block reading and writing
//!
//! Reads stop at `capacity` bytes or end of input; writes always emit the
//! full buffer.

use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};

use crate::block::RecordBlock;
use crate::error::Result;

use super::BlockLocation;

/// Read one block of `capacity` bytes from `reader`
///
/// Short input is zero-padded; input past `capacity` is left unread.
pub fn read_block<R: Read>(reader: &mut R, capacity: usize) -> Result<RecordBlock> {
    let mut buf = vec![0u8; capacity];
    let mut filled = 0;

    while filled < capacity {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }

    if filled < capacity {
        tracing::debug!(read = filled, capacity, "short read, padding block with zeros");
    }

    Ok(RecordBlock::load(capacity, &buf[..filled]))
}

/// Write the whole block to `writer` and flush it
pub fn write_block<W: Write>(writer: &mut W, block: &RecordBlock) -> Result<()> {
    writer.write_all(block.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Load a block from `location`
///
/// A file that does not exist yields a blank block.
pub fn load(location: &BlockLocation, capacity: usize) -> Result<RecordBlock> {
    match location {
        BlockLocation::Stdio => {
            tracing::debug!(capacity, "loading block from stdin");
            read_block(&mut io::stdin().lock(), capacity)
        }
        BlockLocation::File(path) => match File::open(path) {
            Ok(mut file) => {
                tracing::debug!(path = %path.display(), capacity, "loading block");
                read_block(&mut file, capacity)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no block file, starting blank");
                Ok(RecordBlock::new(capacity))
            }
            Err(e) => Err(e.into()),
        },
    }
}

/// Save `block` to `location`, replacing any previous contents
pub fn save(location: &BlockLocation, block: &RecordBlock) -> Result<()> {
    match location {
        BlockLocation::Stdio => {
            tracing::debug!(capacity = block.capacity(), "writing block to stdout");
            write_block(&mut io::stdout().lock(), block)
        }
        BlockLocation::File(path) => {
            tracing::debug!(path = %path.display(), capacity = block.capacity(), "saving block");
            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o644);
            }
            let mut file = options.open(path)?;
            write_block(&mut file, block)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reader that hands out one byte per call and fails once with Interrupted
    struct Trickle<'a> {
        data: &'a [u8],
        interrupted: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(ErrorKind::Interrupted, "signal"));
            }
            if self.data.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[0];
            self.data = &self.data[1..];
            Ok(1)
        }
    }

    #[test]
    fn test_read_block_retries_and_pads() {
        let mut reader = Trickle {
            data: b"A=1\0",
            interrupted: false,
        };
        let block = read_block(&mut reader, 8).unwrap();

        assert_eq!(block.as_bytes(), b"A=1\0\0\0\0\0");
    }

    #[test]
    fn test_read_block_ignores_excess_input() {
        let mut input: &[u8] = b"A=1\0B=2\0C=3\0";
        let block = read_block(&mut input, 8).unwrap();

        assert_eq!(block.as_bytes(), b"A=1\0B=2\0");
        assert_eq!(input, b"C=3\0");
    }
}
