//! Text encodings and decode error policies for length-bounded string fields.
//!
//! Strings in binary formats are usually stored as a fixed-size run of bytes, padded with NULs.
//! [`decode`] converts the whole run first and [`truncate_at_nul`] then cuts the decoded text at
//! the first NUL character, so a NUL produced by a multi-byte encoding (e.g. `00 00` in UTF-16)
//! terminates the string just like a single `00` does in UTF-8.

use strum::{Display, EnumIter, EnumString};
use widestring::U16Str;

use crate::{
    Error::{TextDecode, TextEncode},
    Result,
};

/// Character encodings supported for text fields.
///
/// Names parse case-insensitively, e.g. `"utf-8"`, `"utf8"`, `"ascii"`, `"latin-1"`,
/// `"iso-8859-1"`, `"utf-16be"`, `"utf-16-le"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum TextEncoding {
    /// UTF-8
    #[default]
    #[strum(to_string = "utf-8", serialize = "utf8", serialize = "utf_8")]
    Utf8,
    /// 7-bit US-ASCII
    #[strum(to_string = "ascii", serialize = "us-ascii")]
    Ascii,
    /// ISO-8859-1, one byte per code point up to U+00FF
    #[strum(
        to_string = "latin-1",
        serialize = "latin1",
        serialize = "latin_1",
        serialize = "iso-8859-1"
    )]
    Latin1,
    /// UTF-16, big-endian code units
    #[strum(to_string = "utf-16be", serialize = "utf-16-be", serialize = "utf_16_be")]
    Utf16Be,
    /// UTF-16, little-endian code units
    #[strum(to_string = "utf-16le", serialize = "utf-16-le", serialize = "utf_16_le")]
    Utf16Le,
}

/// What to do with bytes that are invalid in the chosen encoding while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ErrorPolicy {
    /// Fail with [`crate::Error::TextDecode`]
    Strict,
    /// Drop invalid sequences
    #[default]
    Ignore,
    /// Substitute U+FFFD for each invalid sequence
    Replace,
}

/// Decodes a complete byte run.
///
/// # Arguments
/// * `bytes` - The raw run, NUL padding included
/// * `encoding` - Encoding of the run
/// * `policy` - Handling of invalid sequences
///
/// # Errors
/// Returns [`crate::Error::TextDecode`] with the byte offset of the first invalid sequence when
/// `policy` is [`ErrorPolicy::Strict`].
///
/// # Examples
///
/// ```rust
/// use binscope::codec::text::{decode, ErrorPolicy, TextEncoding};
///
/// let bytes = b"caf\xC3\xA9\xFF";
/// assert_eq!(decode(bytes, TextEncoding::Utf8, ErrorPolicy::Ignore)?, "café");
/// assert_eq!(decode(bytes, TextEncoding::Utf8, ErrorPolicy::Replace)?, "café\u{FFFD}");
/// assert!(decode(bytes, TextEncoding::Utf8, ErrorPolicy::Strict).is_err());
/// # Ok::<(), binscope::Error>(())
/// ```
pub fn decode(bytes: &[u8], encoding: TextEncoding, policy: ErrorPolicy) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => decode_utf8(bytes, policy),
        TextEncoding::Ascii => decode_ascii(bytes, policy),
        TextEncoding::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
        TextEncoding::Utf16Be => decode_utf16(bytes, encoding, policy, u16::from_be_bytes),
        TextEncoding::Utf16Le => decode_utf16(bytes, encoding, policy, u16::from_le_bytes),
    }
}

/// Encodes `text`.
///
/// # Errors
/// Returns [`crate::Error::TextEncode`] for the first character outside the repertoire of
/// [`TextEncoding::Ascii`] or [`TextEncoding::Latin1`]; the Unicode encodings never fail.
pub fn encode(text: &str, encoding: TextEncoding) -> Result<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Ascii => text
            .chars()
            .map(|character| {
                if character.is_ascii() {
                    Ok(character as u8)
                } else {
                    Err(TextEncode {
                        encoding,
                        character,
                    })
                }
            })
            .collect(),
        TextEncoding::Latin1 => text
            .chars()
            .map(|character| {
                u8::try_from(character).map_err(|_| TextEncode {
                    encoding,
                    character,
                })
            })
            .collect(),
        TextEncoding::Utf16Be => Ok(encode_utf16(text, u16::to_be_bytes)),
        TextEncoding::Utf16Le => Ok(encode_utf16(text, u16::to_le_bytes)),
    }
}

/// Cuts `text` at its first NUL character, if any.
#[must_use]
pub fn truncate_at_nul(mut text: String) -> String {
    if let Some(end) = text.find('\0') {
        text.truncate(end);
    }
    text
}

fn decode_utf8(bytes: &[u8], policy: ErrorPolicy) -> Result<String> {
    match policy {
        ErrorPolicy::Strict => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|error| TextDecode {
                encoding: TextEncoding::Utf8,
                offset: error.valid_up_to(),
            }),
        ErrorPolicy::Ignore => Ok(bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()),
        ErrorPolicy::Replace => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn decode_ascii(bytes: &[u8], policy: ErrorPolicy) -> Result<String> {
    let mut text = String::with_capacity(bytes.len());
    for (offset, &byte) in bytes.iter().enumerate() {
        if byte.is_ascii() {
            text.push(char::from(byte));
            continue;
        }

        match policy {
            ErrorPolicy::Strict => {
                return Err(TextDecode {
                    encoding: TextEncoding::Ascii,
                    offset,
                })
            }
            ErrorPolicy::Ignore => {}
            ErrorPolicy::Replace => text.push(char::REPLACEMENT_CHARACTER),
        }
    }
    Ok(text)
}

fn decode_utf16(
    bytes: &[u8],
    encoding: TextEncoding,
    policy: ErrorPolicy,
    unit: fn([u8; 2]) -> u16,
) -> Result<String> {
    let pairs = bytes.chunks_exact(2);
    // A dangling odd byte can never form a code unit
    let dangling = !pairs.remainder().is_empty();
    let units: Vec<u16> = pairs.map(|pair| unit([pair[0], pair[1]])).collect();

    match policy {
        ErrorPolicy::Strict => {
            let mut text = String::with_capacity(units.len());
            let mut consumed = 0_usize;
            for decoded in char::decode_utf16(units.iter().copied()) {
                match decoded {
                    Ok(character) => {
                        text.push(character);
                        consumed += character.len_utf16();
                    }
                    Err(_) => {
                        return Err(TextDecode {
                            encoding,
                            offset: consumed * 2,
                        })
                    }
                }
            }
            if dangling {
                return Err(TextDecode {
                    encoding,
                    offset: bytes.len() - 1,
                });
            }
            Ok(text)
        }
        ErrorPolicy::Ignore => Ok(char::decode_utf16(units.iter().copied())
            .filter_map(std::result::Result::ok)
            .collect()),
        ErrorPolicy::Replace => {
            let mut text = U16Str::from_slice(&units).to_string_lossy();
            if dangling {
                text.push(char::REPLACEMENT_CHARACTER);
            }
            Ok(text)
        }
    }
}

fn encode_utf16(text: &str, bytes: fn(u16) -> [u8; 2]) -> Vec<u8> {
    text.encode_utf16().flat_map(bytes).collect()
}
