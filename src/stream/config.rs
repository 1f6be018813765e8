//! Stream configuration
//!
//! Defaults a [`crate::Stream`] starts with. All of them can be changed later: the endianness via
//! [`crate::Stream::set_endian`], the text settings per call via the `_with` text methods.

use crate::codec::{Endian, ErrorPolicy, TextEncoding};

/// Initial settings of a [`crate::Stream`]
///
/// # Examples
///
/// ```rust
/// use binscope::{Endian, ErrorPolicy, Stream, StreamConfig, TextEncoding};
///
/// let config = StreamConfig::default()
///     .endian(Endian::Little)
///     .errors(ErrorPolicy::Strict);
/// assert_eq!(config.encoding, TextEncoding::Utf8);
///
/// let mut stream = Stream::with_config(binscope::Memory::new(vec![0x01, 0x00]), config)?;
/// assert_eq!(stream.read_ushort()?, 1);
/// # Ok::<(), binscope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StreamConfig {
    /// Byte order of multi-byte primitives (default: big-endian)
    pub endian: Endian,

    /// Encoding used by `read_text`, `peek_text` and `write_text` (default: UTF-8)
    pub encoding: TextEncoding,

    /// Handling of undecodable bytes in `read_text` and `peek_text` (default: ignore)
    pub errors: ErrorPolicy,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            endian: Endian::Big,
            encoding: TextEncoding::Utf8,
            errors: ErrorPolicy::Ignore,
        }
    }
}

impl StreamConfig {
    /// Default settings with little-endian byte order
    #[must_use]
    pub fn little_endian() -> Self {
        Self::default().endian(Endian::Little)
    }

    /// Sets the byte order
    #[must_use]
    pub fn endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Sets the text encoding
    #[must_use]
    pub fn encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets the decode error policy
    #[must_use]
    pub fn errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StreamConfig::default();
        assert_eq!(config.endian, Endian::Big);
        assert_eq!(config.encoding, TextEncoding::Utf8);
        assert_eq!(config.errors, ErrorPolicy::Ignore);

        assert_eq!(StreamConfig::little_endian().endian, Endian::Little);
    }

    #[test]
    fn builder() {
        let config = StreamConfig::default()
            .encoding(TextEncoding::Utf16Le)
            .errors(ErrorPolicy::Replace)
            .endian(Endian::Little);

        assert_eq!(
            config,
            StreamConfig {
                endian: Endian::Little,
                encoding: TextEncoding::Utf16Le,
                errors: ErrorPolicy::Replace,
            }
        );
    }
}
