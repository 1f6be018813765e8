//! Dynamically-kinded scalar values exchanged with the codec table.

use std::fmt;

use crate::{
    codec::{Kind, Primitive},
    Error::{self, TypeMismatch},
    Result,
};

/// A scalar value whose kind is only known at runtime.
///
/// This is what [`crate::codec::encode`] consumes and [`crate::codec::decode`] produces. Integers
/// are widened to `i128`, which covers the full range of both `i64` and `u64`; floats are widened
/// to `f64`. Every Rust scalar converts into a [`Value`] through `From`, so the `write_*` methods
/// of [`crate::Stream`] accept plain literals.
///
/// # Examples
///
/// ```rust
/// use binscope::{Kind, Value};
///
/// assert_eq!(Value::from(7_u16), Value::Int(7));
/// assert_eq!(Value::from(true).kind(), Kind::Boolean);
/// assert_eq!(Value::from(1.5_f32), Value::Float(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A boolean
    Bool(bool),
    /// Any integer, signed or unsigned
    Int(i128),
    /// Any floating-point number
    Float(f64),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Boolean,
            Value::Int(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
        }
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i128> {
        match *self {
            Value::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value as a float; integers are converted, booleans are not.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            #[allow(clippy::cast_precision_loss)]
            Value::Int(value) => Some(value as f64),
            Value::Float(value) => Some(value),
            Value::Bool(_) => None,
        }
    }

    /// Extracts a boolean for storage in `primitive`.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeMismatch`] unless this is a [`Value::Bool`].
    pub(crate) fn into_bool(self, primitive: Primitive) -> Result<bool> {
        match self {
            Value::Bool(value) => Ok(value),
            other => Err(other.mismatch(primitive)),
        }
    }

    /// Extracts an integer for storage in `primitive`.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeMismatch`] unless this is a [`Value::Int`].
    pub(crate) fn into_int(self, primitive: Primitive) -> Result<i128> {
        match self {
            Value::Int(value) => Ok(value),
            other => Err(other.mismatch(primitive)),
        }
    }

    /// Extracts a float for storage in `primitive`; integers are accepted and converted.
    ///
    /// # Errors
    /// Returns [`crate::Error::TypeMismatch`] for a [`Value::Bool`].
    pub(crate) fn into_float(self, primitive: Primitive) -> Result<f64> {
        match self.as_float() {
            Some(value) => Ok(value),
            None => Err(self.mismatch(primitive)),
        }
    }

    fn mismatch(self, primitive: Primitive) -> Error {
        TypeMismatch {
            primitive,
            expected: primitive.kind(),
            found: self.kind(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i128::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, u8, i16, u16, i32, u32, i64, u64, i128);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Int(value as i128)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Int(value as i128)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}
