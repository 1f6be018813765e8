//! Backing stores: the byte-addressable objects a [`crate::Stream`] reads from and writes to.
//!
//! # Architecture
//!
//! All stores are reached through one capability trait, [`crate::store::Store`], so the stream
//! adapter never knows whether it talks to memory, a file or a caller-supplied object. The trait
//! is deliberately small: raw `read`, `write`, `tell`, `seek` and `flush`. Everything typed lives
//! on top of it in [`crate::stream`].
//!
//! # Key Components
//!
//! - [`crate::store::Store`] - Capability trait consumed by the adapter
//! - [`crate::store::Capabilities`] - Which of read / write / seek / tell a store really supports
//! - [`crate::store::Memory`] - Growable in-memory buffer
//! - [`crate::store::Physical`] - File on disk, opened with a [`crate::store::Mode`]
//! - [`crate::store::Wrapper`] - Any `std::io::Read + Write + Seek` object
//!
//! # Ownership
//!
//! [`crate::store::Store`] is implemented for `&mut S` and `Box<S>`, so an adapter may either own
//! its store (closing it when dropped or on [`crate::Stream::close`]) or borrow it, in which case
//! the store outlives the adapter and is never closed by it.
//!
//! # Examples
//!
//! ```rust
//! use binscope::{Memory, Store};
//! use std::io::SeekFrom;
//!
//! let mut memory = Memory::new(vec![0xAA, 0xBB, 0xCC]);
//! memory.seek(SeekFrom::End(-1))?;
//!
//! let mut buffer = [0u8; 4];
//! assert_eq!(memory.read(&mut buffer)?, 1);
//! assert_eq!(buffer[0], 0xCC);
//! assert_eq!(memory.tell()?, 3);
//! # Ok::<(), binscope::Error>(())
//! ```

mod memory;
mod physical;
mod wrapper;

use std::io::SeekFrom;

use bitflags::bitflags;

pub use memory::Memory;
pub use physical::{Mode, Physical};
pub use wrapper::Wrapper;

use crate::Result;

bitflags! {
    /// Operations a [`Store`] supports.
    ///
    /// A [`crate::Stream`] needs all four; construction reports the missing ones through
    /// [`crate::Error::UnsupportedStore`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Raw reads
        const READ = 0x01;
        /// Raw writes
        const WRITE = 0x02;
        /// Repositioning
        const SEEK = 0x04;
        /// Position queries
        const TELL = 0x08;
    }
}

/// Capability interface of a backing store.
///
/// Implementations must follow `std::io` conventions: `read` may return fewer bytes than
/// requested at the end of data (and `0` once exhausted), `write` returns how many bytes were
/// accepted, and positions are absolute byte offsets from the start.
pub trait Store {
    /// Reads up to `buf.len()` bytes at the current position, advancing it.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the underlying object fails.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Writes `buf` at the current position, advancing it.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the underlying object fails.
    fn write(&mut self, buf: &[u8]) -> Result<usize>;

    /// Returns the current position.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the position cannot be queried.
    fn tell(&mut self) -> Result<u64>;

    /// Moves the position and returns the new absolute offset.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOffset`] or [`crate::Error::FileError`] if the target is
    /// before the start or the object cannot seek.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64>;

    /// Pushes buffered writes to the underlying object.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if flushing fails.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// The operations this store really supports.
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }
}

impl<S: Store + ?Sized> Store for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf)
    }

    fn tell(&mut self) -> Result<u64> {
        (**self).tell()
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        (**self).seek(pos)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        (**self).write(buf)
    }

    fn tell(&mut self) -> Result<u64> {
        (**self).tell()
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        (**self).seek(pos)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}
