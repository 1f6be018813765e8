use std::{fs, io::SeekFrom, path::Path};

use super::Store;
use crate::{Error::InvalidOffset, Result};

/// Store backed by a growable in-memory buffer
///
/// Reads past the end return no data; writes past the end extend the buffer, zero-filling any gap
/// between the old end and the write position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    data: Vec<u8>,
    position: u64,
}

impl Memory {
    /// Create a new memory store positioned at the start
    ///
    /// ## Arguments
    /// * 'data' - The data buffer to consume
    #[must_use]
    pub fn new(data: Vec<u8>) -> Memory {
        Memory { data, position: 0 }
    }

    /// Create a memory store from a string of hex digit pairs
    ///
    /// ## Arguments
    /// * 'hex' - Digit pairs in storage order, e.g. `"0102ff"`; case does not matter
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedHex`] for odd-length input or a non-hex digit.
    pub fn from_hex(hex: impl AsRef<[u8]>) -> Result<Memory> {
        Ok(Memory::new(hex::decode(hex)?))
    }

    /// Load the complete content of a file into a new memory store
    ///
    /// The content is copied, so later changes to the buffer never reach the file.
    ///
    /// ## Arguments
    /// * 'path' - File to load
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Memory> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        tracing::debug!(path = %path.display(), len = data.len(), "loaded file into memory");

        Ok(Memory::new(data))
    }

    /// The complete buffer, independent of the position
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// A copy of the complete buffer; the position is not touched
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Consume the store and return its buffer
    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Buffer length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the buffer holds no bytes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for Memory {
    fn from(data: Vec<u8>) -> Self {
        Memory::new(data)
    }
}

impl Store for Memory {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let Ok(start) = usize::try_from(self.position) else {
            return Ok(0);
        };
        if start >= self.data.len() {
            return Ok(0);
        }

        let count = buf.len().min(self.data.len() - start);
        buf[..count].copy_from_slice(&self.data[start..start + count]);
        self.position += count as u64;

        Ok(count)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let start = usize::try_from(self.position).map_err(|_| InvalidOffset)?;
        let Some(end) = start.checked_add(buf.len()) else {
            return Err(InvalidOffset);
        };

        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[start..end].copy_from_slice(buf);
        self.position = end as u64;

        Ok(buf.len())
    }

    fn tell(&mut self) -> Result<u64> {
        Ok(self.position)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => (self.data.len() as u64).checked_add_signed(delta),
            SeekFrom::Current(delta) => self.position.checked_add_signed(delta),
        };

        let Some(target) = target else {
            return Err(InvalidOffset);
        };
        self.position = target;

        Ok(target)
    }
}
