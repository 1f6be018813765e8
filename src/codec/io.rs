//! Statically typed, endian-aware conversion between Rust scalars and their wire bytes.
//!
//! This module provides the [`crate::codec::io::CodecIO`] trait, implemented for every Rust type
//! that backs a [`crate::Primitive`], together with bounds-checked helpers that decode from and
//! encode into byte slices at a moving offset.
//!
//! # Architecture
//!
//! Each implementation only knows its canonical big-endian layout (`from_be_bytes` /
//! `to_be_bytes`). Byte order is applied afterwards by [`crate::Endian::reorder`], so there is a
//! single reorder step shared by all multi-byte primitives:
//!
//! - **decode** - copy `width` raw bytes, un-apply the byte order, interpret as big-endian
//! - **encode** - produce big-endian bytes, apply the byte order
//!
//! The width always comes from the primitive table via [`CodecIO::PRIMITIVE`].
//!
//! # Key Components
//!
//! - [`crate::codec::io::CodecIO`] - Trait implemented for `bool`, `i8`..`i64`, `u8`..`u64`, `f32`, `f64`
//! - [`crate::codec::io::decode_as`] / [`crate::codec::io::decode_at`] - Read a value from a slice
//! - [`crate::codec::io::encode_as`] / [`crate::codec::io::encode_at`] - Write a value into a slice
//!
//! # Usage Examples
//!
//! ```rust
//! use binscope::{codec::io::{decode_at, encode_at}, Endian};
//!
//! let mut data = [0u8; 6];
//! let mut offset = 0;
//! encode_at(&mut data, &mut offset, 1_u32, Endian::Big)?;
//! encode_at(&mut data, &mut offset, 2_u16, Endian::Big)?;
//! assert_eq!(data, [0x00, 0x00, 0x00, 0x01, 0x00, 0x02]);
//!
//! offset = 0;
//! let first: u32 = decode_at(&data, &mut offset, Endian::Big)?;
//! let second: u16 = decode_at(&data, &mut offset, Endian::Big)?;
//! assert_eq!((first, second), (1, 2));
//! # Ok::<(), binscope::Error>(())
//! ```
//!
//! # Error Handling
//!
//! Slice helpers return [`crate::Error::EndOfStream`] if fewer than `width` bytes remain at the
//! offset; the offset is only advanced on success. [`CodecIO::from_value`] reports
//! [`crate::Error::OutOfRange`] and [`crate::Error::TypeMismatch`].

use crate::{
    codec::{Endian, Primitive, Value},
    Error::EndOfStream,
    Result,
};

/// Trait for type-specific, endian-aware conversion of a primitive.
///
/// The associated [`CodecIO::Bytes`] array always has exactly [`Primitive::width`] bytes for
/// [`CodecIO::PRIMITIVE`].
///
/// # Examples
///
/// ```rust
/// use binscope::{codec::io::CodecIO, Endian};
///
/// assert_eq!(0x0102_u16.to_bytes(Endian::Little), [0x02, 0x01]);
/// assert_eq!(<i16 as CodecIO>::from_bytes([0xFF, 0xFE], Endian::Big), -2);
/// ```
pub trait CodecIO: Sized + Copy {
    /// The table entry this type encodes.
    const PRIMITIVE: Primitive;

    /// Fixed-size byte array holding one encoded value.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Interpret canonical big-endian bytes.
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Produce canonical big-endian bytes.
    fn to_be_bytes(self) -> Self::Bytes;

    /// Narrow a dynamic [`Value`] to this type.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeMismatch`] if the value kind does not fit the primitive and
    /// [`crate::Error::OutOfRange`] if the value is not representable.
    fn from_value(value: Value) -> Result<Self>;

    /// Decode raw bytes stored in `endian` order.
    fn from_bytes(mut bytes: Self::Bytes, endian: Endian) -> Self {
        endian.reorder(bytes.as_mut());
        Self::from_be_bytes(bytes)
    }

    /// Encode into bytes in `endian` order.
    fn to_bytes(self, endian: Endian) -> Self::Bytes {
        let mut bytes = self.to_be_bytes();
        endian.reorder(bytes.as_mut());
        bytes
    }
}

impl CodecIO for bool {
    const PRIMITIVE: Primitive = Primitive::Bool;
    type Bytes = [u8; 1];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }

    fn to_be_bytes(self) -> Self::Bytes {
        [u8::from(self)]
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_bool(Self::PRIMITIVE)
    }
}

// Integers narrow through `TryFrom<i128>`, which is exactly the range check of the table
macro_rules! codec_int {
    ($($ty:ty => $primitive:ident),* $(,)?) => {
        $(
            impl CodecIO for $ty {
                const PRIMITIVE: Primitive = Primitive::$primitive;
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_be_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_be_bytes(bytes)
                }

                fn to_be_bytes(self) -> Self::Bytes {
                    <$ty>::to_be_bytes(self)
                }

                fn from_value(value: Value) -> Result<Self> {
                    let int = value.into_int(Self::PRIMITIVE)?;
                    <$ty>::try_from(int).map_err(|_| out_of_range_error!(Self::PRIMITIVE, int))
                }
            }
        )*
    };
}

codec_int! {
    i8 => Byte,
    u8 => UByte,
    i16 => Short,
    u16 => UShort,
    i32 => Int,
    u32 => UInt,
    i64 => Long,
    u64 => ULong,
}

impl CodecIO for f32 {
    const PRIMITIVE: Primitive = Primitive::Float;
    type Bytes = [u8; 4];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        f32::from_be_bytes(bytes)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        f32::to_be_bytes(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        let wide = value.into_float(Self::PRIMITIVE)?;
        #[allow(clippy::cast_possible_truncation)]
        let narrow = wide as f32;
        // Finite values that only overflow after rounding to binary32 are rejected
        if narrow.is_infinite() && wide.is_finite() {
            return Err(out_of_range_error!(Self::PRIMITIVE, wide));
        }
        Ok(narrow)
    }
}

impl CodecIO for f64 {
    const PRIMITIVE: Primitive = Primitive::Double;
    type Bytes = [u8; 8];

    fn from_be_bytes(bytes: Self::Bytes) -> Self {
        f64::from_be_bytes(bytes)
    }

    fn to_be_bytes(self) -> Self::Bytes {
        f64::to_be_bytes(self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_float(Self::PRIMITIVE)
    }
}

/// Decodes a value of type `T` from the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::EndOfStream`] if `data` is shorter than the primitive width.
///
/// # Examples
///
/// ```rust
/// use binscope::{codec::io::decode_as, Endian};
///
/// let value: i32 = decode_as(&[0x01, 0x02, 0x03, 0x04], Endian::Big)?;
/// assert_eq!(value, 16909060);
/// # Ok::<(), binscope::Error>(())
/// ```
pub fn decode_as<T: CodecIO>(data: &[u8], endian: Endian) -> Result<T> {
    let mut offset = 0_usize;
    decode_at(data, &mut offset, endian)
}

/// Decodes a value of type `T` at `offset`, advancing the offset by the primitive width.
///
/// # Errors
/// Returns [`crate::Error::EndOfStream`] if fewer than `width` bytes remain after `offset`; the
/// offset is left untouched in that case.
pub fn decode_at<T: CodecIO>(data: &[u8], offset: &mut usize, endian: Endian) -> Result<T> {
    let width = T::PRIMITIVE.width();
    let available = data.len().saturating_sub(*offset);
    if width > available {
        return Err(EndOfStream {
            requested: width,
            available,
        });
    }

    let mut bytes = T::Bytes::default();
    bytes
        .as_mut()
        .copy_from_slice(&data[*offset..*offset + width]);
    *offset += width;

    Ok(T::from_bytes(bytes, endian))
}

/// Encodes `value` at the start of `data`.
///
/// # Errors
/// Returns [`crate::Error::EndOfStream`] if `data` is shorter than the primitive width.
pub fn encode_as<T: CodecIO>(data: &mut [u8], value: T, endian: Endian) -> Result<()> {
    let mut offset = 0_usize;
    encode_at(data, &mut offset, value, endian)
}

/// Encodes `value` at `offset`, advancing the offset by the primitive width.
///
/// # Errors
/// Returns [`crate::Error::EndOfStream`] if fewer than `width` bytes remain after `offset`; the
/// offset is left untouched in that case.
pub fn encode_at<T: CodecIO>(
    data: &mut [u8],
    offset: &mut usize,
    value: T,
    endian: Endian,
) -> Result<()> {
    let width = T::PRIMITIVE.width();
    let available = data.len().saturating_sub(*offset);
    if width > available {
        return Err(EndOfStream {
            requested: width,
            available,
        });
    }

    let bytes = value.to_bytes(endian);
    data[*offset..*offset + width].copy_from_slice(bytes.as_ref());
    *offset += width;

    Ok(())
}
