use std::io::{self, Read};

use thiserror::Error;

/// Chunk size used when validating a stream.
const CHUNK_SIZE: usize = 1024;

/// Byte source that emits an infinite stream of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatReader {
    pub byte: u8,
}

impl RepeatReader {
    pub fn new(byte: u8) -> RepeatReader {
        RepeatReader { byte }
    }
}

impl Default for RepeatReader {
    fn default() -> Self {
        RepeatReader::new(b'A')
    }
}

impl Read for RepeatReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        buf.fill(self.byte);
        Ok(buf.len())
    }
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("byte {offset}: expected {expected:#04x}, found {found:#04x}")]
    Mismatch { offset: usize, expected: u8, found: u8 },

    #[error("stream ended after {offset} bytes")]
    EndOfStream { offset: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Reads `total` bytes from `reader` and checks that every one of them is
/// `expected`. Returns the number of bytes checked.
pub fn validate_stream<R: Read>(
    reader: &mut R,
    expected: u8,
    total: usize,
) -> Result<usize, StreamError> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut offset = 0;
    while offset < total {
        let request = CHUNK_SIZE.min(total - offset);
        let count = match reader.read(&mut buffer[..request]) {
            Ok(0) => return Err(StreamError::EndOfStream { offset }),
            Ok(count) => count,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if let Some(position) = buffer[..count].iter().position(|&b| b != expected) {
            return Err(StreamError::Mismatch {
                offset: offset + position,
                expected,
                found: buffer[position],
            });
        }
        offset += count;
    }
    tracing::debug!(bytes = offset, "stream validated");
    Ok(offset)
}
