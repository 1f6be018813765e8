//! Binary codec layer: the primitive table and pure conversions between values and bytes.
//!
//! Nothing in this module touches a store. It answers three questions for the stream adapter:
//! how wide a primitive is, how a [`crate::Value`] becomes bytes, and how bytes become a value.
//!
//! # Architecture
//!
//! - [`crate::codec::primitive`] - The fixed table of [`crate::Primitive`]s and their descriptors
//! - [`crate::codec::endian`] - [`crate::Endian`] and the single byte-reorder step
//! - [`crate::codec::value`] - The dynamically-kinded [`crate::Value`]
//! - [`crate::codec::io`] - Statically typed conversions ([`crate::codec::io::CodecIO`])
//! - [`crate::codec::text`] - Text encodings and decode error policies
//!
//! The dynamic entry points [`encode`] and [`decode`] dispatch on a runtime [`crate::Primitive`]
//! to the typed implementation. The dispatch is generated from the same primitive list as the
//! named `read_*` / `write_*` / `peek_*` methods of [`crate::Stream`].
//!
//! # Usage Examples
//!
//! ```rust
//! use binscope::{codec, Endian, Primitive, Value};
//!
//! let bytes = codec::encode(Primitive::UShort, 0x1234_u16, Endian::Little)?;
//! assert_eq!(bytes, [0x34, 0x12]);
//! assert_eq!(codec::decode(Primitive::UShort, &bytes, Endian::Little)?, Value::Int(0x1234));
//!
//! assert!(codec::encode(Primitive::Byte, 128, Endian::Big).is_err());
//! # Ok::<(), binscope::Error>(())
//! ```

pub mod endian;
pub mod io;
pub mod primitive;
pub mod text;
pub mod value;

use std::str::FromStr;

pub use endian::Endian;
pub use primitive::{Descriptor, Kind, Primitive};
pub use text::{ErrorPolicy, TextEncoding};
pub use value::Value;

use crate::Result;

macro_rules! dispatch {
    ($(($variant:ident, $ty:ty, $read:ident, $write:ident, $peek:ident)),* $(,)?) => {
        /// Encodes `value` as `primitive` in `endian` byte order.
        ///
        /// The result always has exactly [`Primitive::width`] bytes.
        ///
        /// # Errors
        /// Returns [`crate::Error::OutOfRange`] if the value does not fit the primitive and
        /// [`crate::Error::TypeMismatch`] if its kind is not accepted by the primitive.
        pub fn encode(primitive: Primitive, value: impl Into<Value>, endian: Endian) -> Result<Vec<u8>> {
            let value = value.into();
            match primitive {
                $(
                    Primitive::$variant => {
                        let typed = <$ty as io::CodecIO>::from_value(value)?;
                        Ok(io::CodecIO::to_bytes(typed, endian).as_ref().to_vec())
                    }
                )*
            }
        }

        /// Decodes a `primitive` stored in `endian` byte order from the start of `bytes`.
        ///
        /// Bytes past the primitive width are ignored.
        ///
        /// # Errors
        /// Returns [`crate::Error::EndOfStream`] if `bytes` is shorter than the primitive width.
        pub fn decode(primitive: Primitive, bytes: &[u8], endian: Endian) -> Result<Value> {
            match primitive {
                $(
                    Primitive::$variant => Ok(Value::from(io::decode_as::<$ty>(bytes, endian)?)),
                )*
            }
        }
    };
}

with_primitives!(dispatch);

/// Parses one of the named codec enums, reporting unknown names as [`crate::Error::UnknownName`].
///
/// # Arguments
/// * `what` - Human readable category used in the error, e.g. `"endian"`
/// * `name` - The input to parse
///
/// # Errors
/// Returns [`crate::Error::UnknownName`] if `name` is not recognised.
///
/// # Examples
///
/// ```rust
/// use binscope::{codec::parse_name, Endian, Primitive};
///
/// let endian: Endian = parse_name("endian", "little")?;
/// assert_eq!(endian, Endian::Little);
/// assert!(parse_name::<Primitive>("primitive", "quad").is_err());
/// # Ok::<(), binscope::Error>(())
/// ```
pub fn parse_name<T: FromStr>(what: &'static str, name: &str) -> Result<T> {
    name.parse()
        .map_err(|_| unknown_name_error!(what, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use strum::IntoEnumIterator;

    #[test]
    fn widths() {
        for primitive in Primitive::iter() {
            let value = match primitive.kind() {
                Kind::Boolean => Value::Bool(true),
                Kind::Integer => Value::Int(1),
                Kind::Float => Value::Float(1.0),
            };
            for endian in Endian::iter() {
                let bytes = encode(primitive, value, endian).unwrap();
                assert_eq!(bytes.len(), primitive.width(), "{primitive}");
                assert_eq!(decode(primitive, &bytes, endian).unwrap(), value);
            }
        }
    }

    #[test]
    fn known_encodings() {
        assert_eq!(encode(Primitive::Bool, true, Endian::Big).unwrap(), [0x01]);
        assert_eq!(encode(Primitive::Bool, false, Endian::Big).unwrap(), [0x00]);
        assert_eq!(encode(Primitive::Byte, -1, Endian::Big).unwrap(), [0xFF]);
        assert_eq!(
            encode(Primitive::Int, 16_909_060, Endian::Big).unwrap(),
            [0x01, 0x02, 0x03, 0x04]
        );
        assert_eq!(
            encode(Primitive::Int, 16_909_060, Endian::Little).unwrap(),
            [0x04, 0x03, 0x02, 0x01]
        );
        assert_eq!(
            encode(Primitive::Float, 1, Endian::Big).unwrap(),
            [0x3F, 0x80, 0x00, 0x00]
        );
        assert_eq!(
            decode(Primitive::ULong, &[0xFF; 8], Endian::Big).unwrap(),
            Value::Int(i128::from(u64::MAX))
        );
        assert_eq!(
            decode(Primitive::Long, &[0xFF; 8], Endian::Big).unwrap(),
            Value::Int(-1)
        );
        assert_eq!(
            decode(Primitive::Bool, &[0x7F], Endian::Little).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn rejects() {
        assert!(matches!(
            encode(Primitive::Byte, 128, Endian::Big),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            encode(Primitive::UShort, -1, Endian::Big),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            encode(Primitive::Bool, 1, Endian::Big),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            encode(Primitive::Int, 1.5, Endian::Big),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(
            encode(Primitive::Float, 1e300, Endian::Big),
            Err(Error::OutOfRange { .. })
        ));
        assert!(matches!(
            decode(Primitive::Double, &[0x00; 4], Endian::Big),
            Err(Error::EndOfStream {
                requested: 8,
                available: 4
            })
        ));
    }

    #[test]
    fn names() {
        assert_eq!(
            parse_name::<TextEncoding>("encoding", "latin1").unwrap(),
            TextEncoding::Latin1
        );
        let error = parse_name::<ErrorPolicy>("error policy", "loud").unwrap_err();
        assert!(matches!(
            &error,
            Error::UnknownName {
                what: "error policy",
                name
            } if name == "loud"
        ));
        assert_eq!(error.to_string(), "Unknown error policy - 'loud'");
    }
}
