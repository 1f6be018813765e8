//! Physical file store.
//!
//! This module provides the [`crate::store::Physical`] store that implements the
//! [`crate::store::Store`] trait on top of a `std::fs::File`. Unlike [`crate::store::Memory`],
//! writes go straight to the file, so writing past the end grows the file on disk.
//!
//! # Key Components
//!
//! - [`crate::store::Physical`] - The file store
//! - [`crate::store::Mode`] - How a file is opened, named after the classic `fopen` mode strings
//!
//! # Capabilities
//!
//! Every file handle can read and write (a handle opened read-only fails the write itself, not the
//! construction of the adapter). Seeking is probed once when the store is created: handles on
//! pipes, sockets or character devices report neither [`crate::store::Capabilities::SEEK`] nor
//! [`crate::store::Capabilities::TELL`], and a [`crate::Stream`] over them is rejected.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use binscope::{Mode, Physical, Stream};
//!
//! let file = Physical::open("header.bin", Mode::ReadWrite)?;
//! let mut stream = Stream::new(file)?;
//! let magic = stream.read_uint()?;
//! stream.close()?;
//! # Ok::<(), binscope::Error>(())
//! ```

use std::{
    fs,
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
};

use strum::{Display, EnumIter, EnumString};

use super::{Capabilities, Store};
use crate::Result;

/// How [`Physical::open`] opens a file.
///
/// Parses from the usual mode strings; the binary flag `b` is accepted and ignored since every
/// file is binary here.
///
/// | Mode | Strings | Reads | Writes | Creates | Truncates |
/// |------|---------|-------|--------|---------|-----------|
/// | [`Mode::Read`] | `r`, `rb` | yes | no | no | no |
/// | [`Mode::ReadWrite`] | `r+`, `rb+`, `r+b` | yes | yes | no | no |
/// | [`Mode::Write`] | `w`, `wb` | no | yes | yes | yes |
/// | [`Mode::WriteRead`] | `w+`, `wb+`, `w+b` | yes | yes | yes | yes |
/// | [`Mode::Append`] | `a`, `ab` | no | at end | yes | no |
/// | [`Mode::AppendRead`] | `a+`, `ab+`, `a+b` | yes | at end | yes | no |
/// | [`Mode::Create`] | `x`, `xb` | no | yes | must not exist | - |
/// | [`Mode::CreateRead`] | `x+`, `xb+`, `x+b` | yes | yes | must not exist | - |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
pub enum Mode {
    /// Open an existing file for reading
    #[default]
    #[strum(to_string = "r", serialize = "rb")]
    Read,
    /// Open an existing file for reading and writing
    #[strum(to_string = "r+", serialize = "rb+", serialize = "r+b")]
    ReadWrite,
    /// Create or truncate a file for writing
    #[strum(to_string = "w", serialize = "wb")]
    Write,
    /// Create or truncate a file for reading and writing
    #[strum(to_string = "w+", serialize = "wb+", serialize = "w+b")]
    WriteRead,
    /// Create a file if needed and append to it
    #[strum(to_string = "a", serialize = "ab")]
    Append,
    /// Create a file if needed, read anywhere, append at the end
    #[strum(to_string = "a+", serialize = "ab+", serialize = "a+b")]
    AppendRead,
    /// Create a new file for writing, failing if it exists
    #[strum(to_string = "x", serialize = "xb")]
    Create,
    /// Create a new file for reading and writing, failing if it exists
    #[strum(to_string = "x+", serialize = "xb+", serialize = "x+b")]
    CreateRead,
}

impl Mode {
    /// The equivalent `std::fs::OpenOptions`.
    #[must_use]
    pub fn options(self) -> fs::OpenOptions {
        let mut options = fs::OpenOptions::new();
        match self {
            Mode::Read => options.read(true),
            Mode::ReadWrite => options.read(true).write(true),
            Mode::Write => options.write(true).create(true).truncate(true),
            Mode::WriteRead => options.read(true).write(true).create(true).truncate(true),
            Mode::Append => options.append(true).create(true),
            Mode::AppendRead => options.read(true).append(true).create(true),
            Mode::Create => options.write(true).create_new(true),
            Mode::CreateRead => options.read(true).write(true).create_new(true),
        };
        options
    }
}

/// A store backed by a file on disk.
///
/// Every `read` and `write` is passed straight to the operating system; there is no buffering in
/// between, so the file position and the store position are always the same.
#[derive(Debug)]
pub struct Physical {
    file: fs::File,
    capabilities: Capabilities,
}

impl Physical {
    /// Opens the file at `path` in the given mode.
    ///
    /// # Arguments
    /// * `path` - Path to the file. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    /// * `mode` - How the file is opened, see [`Mode`]
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened in that mode.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Physical> {
        let path = path.as_ref();
        let file = mode.options().open(path)?;
        tracing::debug!(path = %path.display(), %mode, "opened file store");

        Ok(Physical::from_std_file(file))
    }

    /// Creates a store from an already-opened `std::fs::File`.
    ///
    /// The handle keeps its current position. Seek support is probed once here.
    #[must_use]
    pub fn from_std_file(mut file: fs::File) -> Physical {
        let mut capabilities = Capabilities::READ | Capabilities::WRITE;
        if file.stream_position().is_ok() {
            capabilities |= Capabilities::SEEK | Capabilities::TELL;
        }

        Physical { file, capabilities }
    }

    /// The underlying file handle.
    #[must_use]
    pub fn get_ref(&self) -> &fs::File {
        &self.file
    }

    /// Releases the file handle without closing it.
    #[must_use]
    pub fn into_inner(self) -> fs::File {
        self.file
    }
}

impl Store for Physical {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.file.read(buf)?)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.file.write(buf)?)
    }

    fn tell(&mut self) -> Result<u64> {
        Ok(self.file.stream_position()?)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.file.seek(pos)?)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.file.flush()?)
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}
