use thiserror::Error;

use crate::{
    codec::{Kind, Primitive, TextEncoding},
    store::Capabilities,
};

macro_rules! out_of_range_error {
    ($primitive:expr, $value:expr) => {
        crate::Error::OutOfRange {
            primitive: $primitive,
            value: $value.to_string(),
        }
    };
}

macro_rules! unknown_name_error {
    ($what:expr, $name:expr) => {
        crate::Error::UnknownName {
            what: $what,
            name: $name.to_string(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Codec Errors
/// - [`Error::OutOfRange`] - Value does not fit the width or signedness of the target primitive
/// - [`Error::TypeMismatch`] - Value kind disagrees with the primitive kind
/// - [`Error::MalformedHex`] - Odd-length or non-hex input to hex parsing
/// - [`Error::TextDecode`] / [`Error::TextEncode`] - Text could not be converted
///
/// ## Stream Errors
/// - [`Error::EndOfStream`] - Fewer bytes available than requested
/// - [`Error::InvalidOffset`] - Seek before the start of a buffer
/// - [`Error::UnsupportedStore`] - Backing store lacks a required capability
/// - [`Error::FileError`] - Underlying I/O failure
///
/// # Examples
///
/// ```rust
/// use binscope::{Error, Stream};
///
/// let mut stream = Stream::memory(vec![0x01, 0x02]);
/// match stream.read_int() {
///     Ok(value) => println!("read {value}"),
///     Err(Error::EndOfStream { requested, available }) => {
///         assert_eq!((requested, available), (4, 2));
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The value cannot be represented by the target primitive.
    ///
    /// Raised by the encoder before anything is written, e.g. `write_byte(128)`.
    #[error("Value {value} is out of range for primitive '{primitive}'")]
    OutOfRange {
        /// The primitive the value was encoded as
        primitive: Primitive,
        /// Textual rendition of the rejected value
        value: String,
    },

    /// The kind of the value does not match the kind of the primitive.
    #[error("Cannot encode a {found} value as primitive '{primitive}' ({expected})")]
    TypeMismatch {
        /// The primitive the value was encoded as
        primitive: Primitive,
        /// The kind the primitive expects
        expected: Kind,
        /// The kind of the supplied value
        found: Kind,
    },

    /// Fewer bytes were available than requested.
    ///
    /// No partial values are ever returned; a failed read leaves the position untouched.
    #[error("End of stream - requested {requested} bytes, {available} available")]
    EndOfStream {
        /// Number of bytes the operation needed
        requested: usize,
        /// Number of bytes that could be obtained
        available: usize,
    },

    /// Hex input has an odd length or contains a non-hex digit.
    #[error("Malformed hex - {0}")]
    MalformedHex(#[from] hex::FromHexError),

    /// Strict text decoding failed.
    #[error("Invalid {encoding} data at byte offset {offset}")]
    TextDecode {
        /// The encoding used for decoding
        encoding: TextEncoding,
        /// Offset of the first offending byte within the decoded run
        offset: usize,
    },

    /// A character cannot be represented in the target encoding.
    #[error("Character {character:?} cannot be encoded as {encoding}")]
    TextEncode {
        /// The encoding used for encoding
        encoding: TextEncoding,
        /// The first offending character
        character: char,
    },

    /// The backing store is missing a capability the adapter requires.
    ///
    /// Raised when constructing a [`crate::Stream`], never later.
    #[error("Backing store does not support {missing:?}")]
    UnsupportedStore {
        /// The capabilities that are required but absent
        missing: Capabilities,
    },

    /// Attempted to move to a position before the start of the store.
    #[error("Could not seek to a valid offset!")]
    InvalidOffset,

    /// An endian, encoding, error policy, file mode or primitive name was not recognised.
    #[error("Unknown {what} - '{name}'")]
    UnknownName {
        /// Which kind of name was parsed
        what: &'static str,
        /// The rejected input
        name: String,
    },

    /// File I/O error.
    ///
    /// Wraps standard I/O errors raised by the backing store.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
