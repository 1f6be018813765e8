// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # binscope
//!
//! Typed, endian-aware reading and writing of fixed-width binary primitives against any
//! byte-addressable store: a file, an in-memory buffer, or any `Read + Write + Seek` object.
//!
//! ## Features
//!
//! - **Primitive table** - `bool`, signed and unsigned integers of 1, 2, 4 and 8 bytes, 32 and
//!   64-bit IEEE floats, each with `read_*`, `write_*` and `peek_*`
//! - **Byte order** - Big-endian by default, switchable at any time
//! - **Peek** - Read without moving the position, restored on every exit path
//! - **Hex and text** - Byte runs as lowercase hex, text fields in UTF-8, ASCII, Latin-1 or UTF-16
//!   with NUL truncation
//! - **Range checks** - Values that do not fit a primitive are rejected before anything is written
//!
//! ## Quick Start
//!
//! ```rust
//! use binscope::prelude::*;
//!
//! let mut stream = Stream::memory(Vec::new());
//! stream.write_uint(1)?;
//! stream.write_ushort(2)?;
//! stream.write_text("hi", Some(4))?;
//! stream.fill(2, 0)?;
//! assert_eq!(stream.to_bytes(), [0, 0, 0, 1, 0, 2, b'h', b'i', 0, 0]);
//!
//! stream.seek(std::io::SeekFrom::Start(0))?;
//! assert_eq!(stream.read_uint()?, 1);
//! assert_eq!(stream.peek_ushort()?, 2);
//! assert_eq!(stream.read_ushort()?, 2);
//! assert_eq!(stream.read_text(4)?, "hi");
//! # Ok::<(), binscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`codec`] - The primitive table and pure value/byte conversions, no I/O
//! - [`store`] - The [`Store`] capability trait and its [`Memory`], [`Physical`] and [`Wrapper`]
//!   implementations
//! - [`stream`] - The [`Stream`] adapter binding the codec to a store
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use binscope::{Error, Stream};
//!
//! let mut stream = Stream::memory(Vec::new());
//! match stream.write_byte(200) {
//!     Ok(()) => unreachable!(),
//!     Err(Error::OutOfRange { primitive, value }) => {
//!         assert_eq!((primitive.name(), value.as_str()), ("byte", "200"));
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through [`tracing`](https://docs.rs/tracing); install any subscriber
//! to see stream construction, file opening and endianness changes at `debug` level.
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use binscope::prelude::*;
///
/// let mut stream = Stream::with_config(Memory::new(vec![0x02, 0x01]), StreamConfig::little_endian())?;
/// assert_eq!(stream.read_ushort()?, 0x0102);
/// # Ok::<(), binscope::Error>(())
/// ```
pub mod prelude;

/// The primitive table, byte order, values, and text encodings.
pub mod codec;

/// Backing stores.
pub mod store;

/// The positioned stream adapter.
pub mod stream;

/// `binscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use binscope::{Result, Stream};
///
/// fn magic(bytes: Vec<u8>) -> Result<u32> {
///     Stream::memory(bytes).read_uint()
/// }
/// assert_eq!(magic(vec![0xCA, 0xFE, 0xBA, 0xBE]).unwrap(), 0xCAFE_BABE);
/// ```
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;

pub use codec::{Descriptor, Endian, ErrorPolicy, Kind, Primitive, TextEncoding, Value};

pub use store::{Capabilities, Memory, Mode, Physical, Store, Wrapper};

pub use stream::{Stream, StreamConfig};
