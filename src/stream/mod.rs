//! Positioned stream adapter: typed, endian-aware access to a backing store.
//!
//! A [`crate::Stream`] binds the codec table to exactly one [`crate::store::Store`] and one
//! mutable byte order. Every call goes straight to the store; the adapter keeps no buffer and no
//! position of its own, so the store position is always the truth.
//!
//! # Architecture
//!
//! - **Typed methods** - `read_<p>`, `write_<p>`, `peek_<p>` for every primitive of the table,
//!   generated at compile time from the same list as [`crate::codec::encode`]
//! - **Runtime dispatch** - [`crate::Stream::read_value`], [`crate::Stream::write_value`] and
//!   [`crate::Stream::peek_value`] take a [`crate::Primitive`] chosen at runtime
//! - **Raw bytes** - [`crate::Stream::read_bytes`], [`crate::Stream::write_bytes`],
//!   [`crate::Stream::peek`], [`crate::Stream::fill`], [`crate::Stream::read_to_end`]
//! - **Hex and text** - Byte runs rendered as lowercase hex or decoded as NUL-terminated text
//!
//! # Position Semantics
//!
//! - A read either returns a complete value and advances by its width, or fails with
//!   [`crate::Error::EndOfStream`] and leaves the position where it was
//! - A write encodes first; nothing reaches the store if encoding fails
//! - A peek saves the position, reads, and restores the position on every exit path, including
//!   failed reads (see [`crate::Stream::peeking`])
//!
//! # Usage Examples
//!
//! ```rust
//! use binscope::{Endian, Stream};
//!
//! let mut stream = Stream::memory(Vec::new());
//! stream.write_uint(1)?;
//! stream.write_ushort(2)?;
//! assert_eq!(stream.to_bytes(), [0x00, 0x00, 0x00, 0x01, 0x00, 0x02]);
//!
//! stream.seek(std::io::SeekFrom::Start(0))?;
//! assert_eq!(stream.peek_uint()?, 1);
//! assert_eq!((stream.read_uint()?, stream.read_ushort()?), (1, 2));
//!
//! stream.set_endian(Endian::Little);
//! stream.write_ushort(0x0102)?;
//! assert_eq!(stream.to_bytes()[6..], [0x02, 0x01]);
//! # Ok::<(), binscope::Error>(())
//! ```
//!
//! # Thread Safety
//!
//! [`crate::Stream`] is not synchronized. A peek is a save/read/restore sequence, so a store
//! shared between adapters needs external locking.

mod config;

use std::{
    io::{self, SeekFrom},
    path::Path,
};

pub use config::StreamConfig;

use crate::{
    codec::{
        self,
        io::CodecIO,
        text::{self, ErrorPolicy, TextEncoding},
        Endian, Primitive, Value,
    },
    store::{Capabilities, Memory, Mode, Physical, Store, Wrapper},
    Error::{EndOfStream, UnsupportedStore},
    Result,
};

const READ_CHUNK: usize = 8 * 1024;

/// Typed, endian-aware reader and writer over a [`Store`].
///
/// The adapter either owns its store (`Stream<Memory>`, `Stream<Physical>`, ...) and releases it
/// when dropped or [`Stream::close`]d, or borrows it (`Stream<&mut S>`), in which case the store
/// outlives the adapter. [`Stream::into_inner`] hands an owned store back without closing it.
///
/// # Examples
///
/// ```rust
/// use binscope::{Memory, Stream};
///
/// let mut memory = Memory::new(vec![0x01, 0x02, 0x03, 0x04]);
/// {
///     let mut stream = Stream::new(&mut memory)?;
///     assert_eq!(stream.peek_int()?, 16909060);
///     assert_eq!(stream.position()?, 0);
///     assert_eq!(stream.read_int()?, 16909060);
///     assert_eq!(stream.position()?, 4);
/// }
/// assert_eq!(memory.len(), 4);
/// # Ok::<(), binscope::Error>(())
/// ```
#[derive(Debug)]
pub struct Stream<S: Store> {
    store: S,
    endian: Endian,
    encoding: TextEncoding,
    errors: ErrorPolicy,
}

impl<S: Store> Stream<S> {
    /// Creates an adapter over `store` with [`StreamConfig::default`].
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedStore`] if the store cannot read, write, seek and tell.
    pub fn new(store: S) -> Result<Self> {
        Self::with_config(store, StreamConfig::default())
    }

    /// Creates an adapter over `store` with the given settings.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedStore`] if the store cannot read, write, seek and tell.
    pub fn with_config(store: S, config: StreamConfig) -> Result<Self> {
        let missing = Capabilities::all().difference(store.capabilities());
        if !missing.is_empty() {
            return Err(UnsupportedStore { missing });
        }

        tracing::debug!(
            endian = %config.endian,
            encoding = %config.encoding,
            errors = %config.errors,
            "created stream"
        );

        Ok(Self::from_parts(store, config))
    }

    fn from_parts(store: S, config: StreamConfig) -> Self {
        Stream {
            store,
            endian: config.endian,
            encoding: config.encoding,
            errors: config.errors,
        }
    }

    /// The current settings.
    #[must_use]
    pub fn config(&self) -> StreamConfig {
        StreamConfig {
            endian: self.endian,
            encoding: self.encoding,
            errors: self.errors,
        }
    }

    /// Byte order used by the typed methods.
    #[must_use]
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Changes the byte order for all subsequent calls.
    pub fn set_endian(&mut self, endian: Endian) {
        if self.endian != endian {
            tracing::debug!(from = %self.endian, to = %endian, "changed stream endianness");
        }
        self.endian = endian;
    }

    /// Changes the default text encoding.
    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.encoding = encoding;
    }

    /// Changes the default decode error policy.
    pub fn set_errors(&mut self, errors: ErrorPolicy) {
        self.errors = errors;
    }

    /// Current position of the store.
    ///
    /// # Errors
    /// Returns the store's error if the position cannot be queried.
    pub fn position(&mut self) -> Result<u64> {
        self.store.tell()
    }

    /// Moves the store position and returns the new absolute offset.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidOffset`] or the store's error if the target is invalid.
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.store.seek(pos)
    }

    /// The backing store.
    pub fn get_ref(&self) -> &S {
        &self.store
    }

    /// The backing store, mutably.
    ///
    /// Moving its position directly is allowed; the adapter has no cached state to invalidate.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Releases the store without closing it.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Flushes and closes an owned store; a borrowed store is only flushed.
    ///
    /// # Errors
    /// Returns the store's error if flushing fails. The store is released either way.
    pub fn close(mut self) -> Result<()> {
        self.store.flush()
    }

    /// Runs `f` and restores the position afterwards, whether `f` succeeds or not.
    ///
    /// This is the building block of every `peek_*` method. If `f` fails, its error is returned
    /// even when restoring the position fails as well.
    ///
    /// # Errors
    /// Returns the error of `f`, or the store's error if the position cannot be saved or restored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binscope::Stream;
    ///
    /// let mut stream = Stream::memory(vec![0x00, 0x2A, 0xFF]);
    /// let pair = stream.peeking(|s| Ok((s.read_ubyte()?, s.read_ubyte()?)))?;
    /// assert_eq!(pair, (0x00, 0x2A));
    /// assert_eq!(stream.position()?, 0);
    ///
    /// assert!(stream.peeking(|s| s.read_long()).is_err());
    /// assert_eq!(stream.position()?, 0);
    /// # Ok::<(), binscope::Error>(())
    /// ```
    pub fn peeking<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved_position = self.store.tell()?;
        let result = f(self);
        let restored = self.store.seek(SeekFrom::Start(saved_position));

        match (result, restored) {
            (Ok(value), Ok(_)) => {
                tracing::trace!(position = saved_position, "restored position after peek");
                Ok(value)
            }
            (Ok(_), Err(error)) => Err(error),
            (Err(error), Ok(_)) => Err(error),
            (Err(error), Err(restore_error)) => {
                tracing::warn!(
                    position = saved_position,
                    error = %restore_error,
                    "could not restore position after failed peek"
                );
                Err(error)
            }
        }
    }

    /// Runs `f`, restoring the position only if `f` fails.
    ///
    /// # Errors
    /// Returns the error of `f`, or the store's error if the position cannot be saved.
    pub fn transactional<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let saved_position = self.store.tell()?;
        let result = f(self);
        if result.is_err() {
            if let Err(restore_error) = self.store.seek(SeekFrom::Start(saved_position)) {
                tracing::warn!(
                    position = saved_position,
                    error = %restore_error,
                    "could not restore position after failed read"
                );
            }
        }
        result
    }

    /// Fills `buf` completely from the store, or reports how much was available.
    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.store.read(&mut buf[filled..])? {
                0 => {
                    return Err(EndOfStream {
                        requested: buf.len(),
                        available: filled,
                    })
                }
                count => filled += count,
            }
        }
        Ok(())
    }

    /// Reads exactly `length` bytes.
    ///
    /// The buffer grows with the bytes actually delivered, so `length` may come from untrusted
    /// data.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer bytes remain; the position is unchanged then.
    pub fn read_bytes(&mut self, length: usize) -> Result<Vec<u8>> {
        self.transactional(|stream| {
            let mut bytes = Vec::with_capacity(length.min(READ_CHUNK));
            let mut chunk = [0_u8; READ_CHUNK];
            while bytes.len() < length {
                let wanted = (length - bytes.len()).min(READ_CHUNK);
                match stream.store.read(&mut chunk[..wanted])? {
                    0 => {
                        return Err(EndOfStream {
                            requested: length,
                            available: bytes.len(),
                        })
                    }
                    count => bytes.extend_from_slice(&chunk[..count]),
                }
            }
            Ok(bytes)
        })
    }

    /// Reads everything from the position to the end of the store.
    ///
    /// # Errors
    /// Returns the store's error if a read fails.
    pub fn read_to_end(&mut self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut chunk = [0_u8; READ_CHUNK];
        loop {
            match self.store.read(&mut chunk)? {
                0 => return Ok(bytes),
                count => bytes.extend_from_slice(&chunk[..count]),
            }
        }
    }

    /// Returns the next `length` bytes without moving the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer bytes remain.
    pub fn peek(&mut self, length: usize) -> Result<Vec<u8>> {
        self.peeking(|stream| stream.read_bytes(length))
    }

    /// Returns everything from the position to the end of the store without moving the position.
    ///
    /// # Errors
    /// Returns the store's error if a read fails.
    pub fn peek_to_end(&mut self) -> Result<Vec<u8>> {
        self.peeking(Self::read_to_end)
    }

    /// Writes all of `bytes` at the position, extending the store if needed.
    ///
    /// # Errors
    /// Returns the store's error if writing fails.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let mut written = 0;
        while written < bytes.len() {
            match self.store.write(&bytes[written..])? {
                0 => return Err(io::Error::from(io::ErrorKind::WriteZero).into()),
                count => written += count,
            }
        }
        Ok(())
    }

    /// Writes `length` copies of `byte`.
    ///
    /// # Errors
    /// Returns the store's error if writing fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binscope::Stream;
    ///
    /// let mut stream = Stream::memory(Vec::new());
    /// stream.write_ubyte(0x7F)?;
    /// stream.fill(3, 0x00)?;
    /// assert_eq!(stream.to_bytes(), [0x7F, 0x00, 0x00, 0x00]);
    /// # Ok::<(), binscope::Error>(())
    /// ```
    pub fn fill(&mut self, length: usize, byte: u8) -> Result<()> {
        self.write_bytes(&vec![byte; length])
    }

    /// Reads a statically typed primitive.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer than `width` bytes remain.
    pub fn read_as<T: CodecIO>(&mut self) -> Result<T> {
        self.transactional(|stream| {
            let mut bytes = T::Bytes::default();
            stream.read_exact_into(bytes.as_mut())?;
            Ok(T::from_bytes(bytes, stream.endian))
        })
    }

    /// Peeks a statically typed primitive.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer than `width` bytes remain.
    pub fn peek_as<T: CodecIO>(&mut self) -> Result<T> {
        self.peeking(Self::read_as::<T>)
    }

    /// Writes a statically typed primitive.
    ///
    /// # Errors
    /// Returns the store's error if writing fails.
    pub fn write_as<T: CodecIO>(&mut self, value: T) -> Result<()> {
        let bytes = value.to_bytes(self.endian);
        self.write_bytes(bytes.as_ref())
    }

    /// Reads a primitive chosen at runtime.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer than `width` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binscope::{Primitive, Stream, Value};
    ///
    /// let mut stream = Stream::memory(vec![0xFF, 0xFE]);
    /// assert_eq!(stream.read_value(Primitive::Short)?, Value::Int(-2));
    /// # Ok::<(), binscope::Error>(())
    /// ```
    pub fn read_value(&mut self, primitive: Primitive) -> Result<Value> {
        let bytes = self.read_bytes(primitive.width())?;
        codec::decode(primitive, &bytes, self.endian)
    }

    /// Peeks a primitive chosen at runtime.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer than `width` bytes remain.
    pub fn peek_value(&mut self, primitive: Primitive) -> Result<Value> {
        self.peeking(|stream| stream.read_value(primitive))
    }

    /// Writes a primitive chosen at runtime.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfRange`] or [`crate::Error::TypeMismatch`] before anything is
    /// written, or the store's error if writing fails.
    pub fn write_value(&mut self, primitive: Primitive, value: impl Into<Value>) -> Result<()> {
        let bytes = codec::encode(primitive, value, self.endian)?;
        self.write_bytes(&bytes)
    }

    /// Reads `length` bytes and renders them as lowercase hex pairs in storage order.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer bytes remain.
    pub fn read_hex(&mut self, length: usize) -> Result<String> {
        Ok(hex::encode(self.read_bytes(length)?))
    }

    /// Like [`Stream::read_hex`] without moving the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer bytes remain.
    pub fn peek_hex(&mut self, length: usize) -> Result<String> {
        self.peeking(|stream| stream.read_hex(length))
    }

    /// Parses `hex` and writes the bytes, at most `length` of them if given.
    ///
    /// A `length` beyond the parsed size writes the parsed bytes unchanged; nothing is padded.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedHex`] before anything is written if `hex` has an odd
    /// length or a non-hex digit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binscope::Stream;
    ///
    /// let mut stream = Stream::memory(Vec::new());
    /// stream.write_hex("cafebabe", Some(2))?;
    /// assert_eq!(stream.to_bytes(), [0xCA, 0xFE]);
    /// assert!(stream.write_hex("abc", None).is_err());
    /// # Ok::<(), binscope::Error>(())
    /// ```
    pub fn write_hex(&mut self, hex: impl AsRef<[u8]>, length: Option<usize>) -> Result<()> {
        let bytes = hex::decode(hex)?;
        self.write_bytes(truncated(&bytes, length))
    }

    /// Reads a `length`-byte text field with the configured encoding and error policy.
    ///
    /// # Errors
    /// See [`Stream::read_text_with`].
    pub fn read_text(&mut self, length: usize) -> Result<String> {
        self.read_text_with(length, self.encoding, self.errors)
    }

    /// Reads a `length`-byte text field.
    ///
    /// The whole run is decoded first, then cut at the first NUL character.
    ///
    /// # Errors
    /// Returns [`crate::Error::EndOfStream`] if fewer bytes remain, or
    /// [`crate::Error::TextDecode`] under [`ErrorPolicy::Strict`]. The position is unchanged on
    /// either error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use binscope::{ErrorPolicy, Stream, TextEncoding};
    ///
    /// let mut stream = Stream::memory(b"hi\x00world".to_vec());
    /// assert_eq!(stream.read_text_with(8, TextEncoding::Utf8, ErrorPolicy::Strict)?, "hi");
    /// assert_eq!(stream.position()?, 8);
    /// # Ok::<(), binscope::Error>(())
    /// ```
    pub fn read_text_with(
        &mut self,
        length: usize,
        encoding: TextEncoding,
        errors: ErrorPolicy,
    ) -> Result<String> {
        self.transactional(|stream| {
            let bytes = stream.read_bytes(length)?;
            let decoded = text::decode(&bytes, encoding, errors)?;
            Ok(text::truncate_at_nul(decoded))
        })
    }

    /// Like [`Stream::read_text`] without moving the position.
    ///
    /// # Errors
    /// See [`Stream::read_text_with`].
    pub fn peek_text(&mut self, length: usize) -> Result<String> {
        self.peek_text_with(length, self.encoding, self.errors)
    }

    /// Like [`Stream::read_text_with`] without moving the position.
    ///
    /// # Errors
    /// See [`Stream::read_text_with`].
    pub fn peek_text_with(
        &mut self,
        length: usize,
        encoding: TextEncoding,
        errors: ErrorPolicy,
    ) -> Result<String> {
        self.peeking(|stream| stream.read_text_with(length, encoding, errors))
    }

    /// Encodes `text` with the configured encoding and writes it, at most `length` bytes if given.
    ///
    /// # Errors
    /// See [`Stream::write_text_with`].
    pub fn write_text(&mut self, text: &str, length: Option<usize>) -> Result<()> {
        self.write_text_with(text, self.encoding, length)
    }

    /// Encodes `text` and writes it, at most `length` bytes if given.
    ///
    /// Truncation works on bytes and may split a multi-byte character; nothing is padded.
    ///
    /// # Errors
    /// Returns [`crate::Error::TextEncode`] before anything is written if a character is not
    /// representable, or the store's error if writing fails.
    pub fn write_text_with(
        &mut self,
        text: &str,
        encoding: TextEncoding,
        length: Option<usize>,
    ) -> Result<()> {
        let bytes = text::encode(text, encoding)?;
        self.write_bytes(truncated(&bytes, length))
    }
}

fn truncated(bytes: &[u8], length: Option<usize>) -> &[u8] {
    match length {
        Some(length) if length < bytes.len() => &bytes[..length],
        _ => bytes,
    }
}

macro_rules! stream_primitives {
    ($(($variant:ident, $ty:ty, $read:ident, $write:ident, $peek:ident)),* $(,)?) => {
        /// Named per-primitive methods.
        impl<S: Store> Stream<S> {
            $(
                #[doc = concat!("Reads a `", stringify!($ty), "` (`", stringify!($variant), "`), advancing the position.")]
                ///
                /// # Errors
                /// Returns [`crate::Error::EndOfStream`] if too few bytes remain; the position is
                /// unchanged then.
                pub fn $read(&mut self) -> Result<$ty> {
                    self.read_as::<$ty>()
                }

                #[doc = concat!("Encodes `value` as `", stringify!($ty), "` and writes it at the position.")]
                ///
                /// # Errors
                /// Returns [`crate::Error::OutOfRange`] or [`crate::Error::TypeMismatch`] before
                /// anything is written, or the store's error if writing fails.
                pub fn $write(&mut self, value: impl Into<Value>) -> Result<()> {
                    let typed = <$ty as CodecIO>::from_value(value.into())?;
                    self.write_as(typed)
                }

                #[doc = concat!("Reads a `", stringify!($ty), "` without moving the position.")]
                ///
                /// # Errors
                /// Returns [`crate::Error::EndOfStream`] if too few bytes remain.
                pub fn $peek(&mut self) -> Result<$ty> {
                    self.peek_as::<$ty>()
                }
            )*
        }
    };
}

with_primitives!(stream_primitives);

impl Stream<Memory> {
    /// Creates an adapter over an in-memory buffer.
    #[must_use]
    pub fn memory(data: Vec<u8>) -> Self {
        Self::memory_with_config(data, StreamConfig::default())
    }

    /// Creates an adapter over an in-memory buffer with the given settings.
    #[must_use]
    pub fn memory_with_config(data: Vec<u8>, config: StreamConfig) -> Self {
        tracing::debug!(len = data.len(), endian = %config.endian, "created memory stream");
        Self::from_parts(Memory::new(data), config)
    }

    /// Creates an adapter over the bytes spelled by `hex`.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedHex`] for odd-length input or a non-hex digit.
    pub fn from_hex(hex: impl AsRef<[u8]>) -> Result<Self> {
        Ok(Self::memory(Memory::from_hex(hex)?.into_data()))
    }

    /// Loads a whole file into memory and creates an adapter over the copy.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::memory(Memory::from_file(path)?.into_data()))
    }

    /// The complete buffer; the position is not touched.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.store.to_bytes()
    }
}

impl Stream<Physical> {
    /// Opens a file and creates an adapter over it.
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] if the file cannot be opened in `mode`, or
    /// [`crate::Error::UnsupportedStore`] if the handle cannot seek.
    pub fn open(path: impl AsRef<Path>, mode: Mode) -> Result<Self> {
        Self::new(Physical::open(path, mode)?)
    }
}

impl<T: io::Read + io::Write + io::Seek> Stream<Wrapper<T>> {
    /// Creates an adapter over any `Read + Write + Seek` object.
    ///
    /// # Errors
    /// Never fails for a wrapped object; the signature matches [`Stream::new`].
    pub fn wrap(inner: T) -> Result<Self> {
        Self::new(Wrapper::new(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn scenario_write_then_read() {
        let mut stream = Stream::memory(Vec::new());
        stream.write_uint(1).unwrap();
        stream.write_ushort(2).unwrap();
        assert_eq!(stream.to_bytes(), [0x00, 0x00, 0x00, 0x01, 0x00, 0x02]);

        stream.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(stream.read_uint().unwrap(), 1);
        assert_eq!(stream.read_ushort().unwrap(), 2);
    }

    #[test]
    fn scenario_peek_then_read() {
        let mut stream = Stream::memory(vec![0x01, 0x02, 0x03, 0x04]);

        assert_eq!(stream.peek_int().unwrap(), 16_909_060);
        assert_eq!(stream.position().unwrap(), 0);
        assert_eq!(stream.read_int().unwrap(), 16_909_060);
        assert_eq!(stream.position().unwrap(), 4);
    }

    #[test]
    fn failed_read_keeps_position() {
        let mut stream = Stream::memory(vec![0xAA, 0xBB, 0xCC]);
        stream.read_ubyte().unwrap();

        let result = stream.read_uint();
        assert!(matches!(
            result,
            Err(Error::EndOfStream {
                requested: 4,
                available: 2
            })
        ));
        assert_eq!(stream.position().unwrap(), 1);

        assert!(stream.peek_double().is_err());
        assert_eq!(stream.position().unwrap(), 1);
        assert_eq!(stream.read_ushort().unwrap(), 0xBBCC);
    }

    #[test]
    fn failed_write_writes_nothing() {
        let mut stream = Stream::memory(Vec::new());

        assert!(matches!(
            stream.write_byte(128),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            stream.write_bool(1),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            stream.write_text_with("\u{e9}", TextEncoding::Ascii, None),
            Err(Error::TextEncode { .. })
        ));
        assert!(stream.to_bytes().is_empty());
        assert_eq!(stream.position().unwrap(), 0);
    }

    #[test]
    fn endian_switch() {
        let mut stream = Stream::memory(vec![0x01, 0x02]);
        assert_eq!(stream.peek_ushort().unwrap(), 0x0102);

        stream.set_endian(Endian::Little);
        assert_eq!(stream.endian(), Endian::Little);
        assert_eq!(stream.peek_ushort().unwrap(), 0x0201);
        assert_eq!(stream.peek_ubyte().unwrap(), 0x01);
    }

    #[test]
    fn dynamic_values() {
        let mut stream = Stream::memory(Vec::new());
        stream.write_value(Primitive::Long, -2).unwrap();
        stream.write_value(Primitive::Bool, true).unwrap();
        stream.write_value(Primitive::Double, 0.5).unwrap();

        stream.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(stream.peek_value(Primitive::Long).unwrap(), Value::Int(-2));
        assert_eq!(stream.read_value(Primitive::Long).unwrap(), Value::Int(-2));
        assert_eq!(stream.read_value(Primitive::Bool).unwrap(), Value::Bool(true));
        assert_eq!(
            stream.read_value(Primitive::Double).unwrap(),
            Value::Float(0.5)
        );
        assert!(stream.read_value(Primitive::Bool).is_err());
    }

    #[test]
    fn raw_bytes() {
        let mut stream = Stream::memory(vec![1, 2, 3, 4, 5]);

        assert_eq!(stream.peek(2).unwrap(), [1, 2]);
        assert_eq!(stream.read_bytes(3).unwrap(), [1, 2, 3]);
        assert!(stream.read_bytes(3).is_err());
        assert_eq!(stream.position().unwrap(), 3);
        assert_eq!(stream.read_to_end().unwrap(), [4, 5]);
        assert!(stream.read_to_end().unwrap().is_empty());

        stream.fill(2, 0xFF).unwrap();
        assert_eq!(stream.to_bytes(), [1, 2, 3, 4, 5, 0xFF, 0xFF]);
    }

    #[test]
    fn peek_to_end() {
        let mut stream = Stream::memory(vec![1, 2, 3, 4, 5]);
        stream.seek(SeekFrom::Start(2)).unwrap();

        assert_eq!(stream.peek_to_end().unwrap(), [3, 4, 5]);
        assert_eq!(stream.position().unwrap(), 2);

        stream.seek(SeekFrom::End(0)).unwrap();
        assert!(stream.peek_to_end().unwrap().is_empty());
        assert_eq!(stream.position().unwrap(), 5);
    }

    #[test]
    fn oversized_lengths() {
        let mut stream = Stream::memory(vec![1, 2, 3, 4]);
        stream.seek(SeekFrom::Start(1)).unwrap();

        assert!(matches!(
            stream.read_bytes(usize::MAX),
            Err(Error::EndOfStream {
                requested: usize::MAX,
                available: 3
            })
        ));
        assert!(matches!(
            stream.read_hex(usize::MAX),
            Err(Error::EndOfStream { available: 3, .. })
        ));
        assert!(matches!(
            stream.peek_text(1 << 40),
            Err(Error::EndOfStream { available: 3, .. })
        ));
        assert!(stream.peek(usize::MAX).is_err());
        assert_eq!(stream.position().unwrap(), 1);

        let mut large = Stream::memory(vec![7; 3 * READ_CHUNK + 5]);
        assert_eq!(large.read_bytes(3 * READ_CHUNK + 5).unwrap().len(), 3 * READ_CHUNK + 5);
        large.seek(SeekFrom::Start(0)).unwrap();
        assert!(matches!(
            large.read_bytes(3 * READ_CHUNK + 6),
            Err(Error::EndOfStream { available, .. }) if available == 3 * READ_CHUNK + 5
        ));
        assert_eq!(large.position().unwrap(), 0);
    }

    #[test]
    fn hex() {
        let mut stream = Stream::from_hex("00ff10").unwrap();
        assert_eq!(stream.peek_hex(3).unwrap(), "00ff10");
        assert_eq!(stream.read_hex(2).unwrap(), "00ff");

        stream.write_hex("ABCDEF", Some(2)).unwrap();
        stream.write_hex("01", Some(4)).unwrap();
        assert_eq!(stream.to_bytes(), [0x00, 0xFF, 0xAB, 0xCD, 0x01]);

        let before = stream.to_bytes();
        assert!(matches!(
            stream.write_hex("0g", None),
            Err(Error::MalformedHex(_))
        ));
        assert_eq!(stream.to_bytes(), before);
    }

    #[test]
    fn text() {
        let mut stream = Stream::memory(b"hi\x00world".to_vec());
        assert_eq!(stream.peek_text(8).unwrap(), "hi");
        assert_eq!(stream.read_text(8).unwrap(), "hi");
        assert_eq!(stream.position().unwrap(), 8);

        let mut stream = Stream::memory(Vec::new());
        stream.write_text("\u{e8}.\u{e9}", None).unwrap();
        stream.write_text("abcdef", Some(3)).unwrap();
        assert_eq!(stream.to_bytes().len(), 8);

        stream.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(stream.read_text(5).unwrap(), "\u{e8}.\u{e9}");
        assert_eq!(stream.read_text(3).unwrap(), "abc");
    }

    #[test]
    fn strict_text_keeps_position() {
        let mut stream = Stream::memory(vec![b'o', b'k', 0xFF, 0x00]);
        stream.set_errors(ErrorPolicy::Strict);

        assert!(matches!(
            stream.read_text(4),
            Err(Error::TextDecode { offset: 2, .. })
        ));
        assert_eq!(stream.position().unwrap(), 0);

        stream.set_errors(ErrorPolicy::Replace);
        assert_eq!(stream.read_text(4).unwrap(), "ok\u{FFFD}");
    }

    #[test]
    fn utf16_text() {
        let config = StreamConfig::default().encoding(TextEncoding::Utf16Le);
        let mut stream = Stream::memory_with_config(Vec::new(), config);

        stream.write_text("name", None).unwrap();
        stream.fill(4, 0).unwrap();
        assert_eq!(stream.to_bytes().len(), 12);

        stream.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(stream.read_text(12).unwrap(), "name");
        assert_eq!(stream.config().encoding, TextEncoding::Utf16Le);
    }

    #[test]
    fn borrowed_store_survives() {
        let mut memory = Memory::new(Vec::new());
        {
            let mut stream = Stream::new(&mut memory).unwrap();
            stream.write_ulong(u64::MAX).unwrap();
            stream.close().unwrap();
        }
        assert_eq!(memory.data(), [0xFF; 8]);
        assert_eq!(memory.tell().unwrap(), 8);
    }

    #[test]
    fn wrapped_cursor() {
        let mut stream = Stream::wrap(io::Cursor::new(vec![0x3F, 0x80, 0x00, 0x00])).unwrap();
        assert_eq!(stream.read_float().unwrap(), 1.0);
        stream.write_float(-2).unwrap();
        assert_eq!(
            stream.into_inner().into_inner().into_inner(),
            [0x3F, 0x80, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00]
        );
    }
}
