//! The fixed primitive table.
//!
//! Each [`Primitive`] maps to a constant [`Descriptor`] (byte width, signedness and [`Kind`]).
//! The table never changes at runtime; it is what the stream adapter consults to know how many
//! bytes a typed read or write touches.

use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Numeric interpretation of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    /// One byte, zero is `false` and anything else is `true`
    Boolean,
    /// Two's-complement (signed) or plain binary (unsigned) integer
    Integer,
    /// IEEE-754 binary32 / binary64
    Float,
}

/// Width, signedness and kind of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    /// Encoded size in bytes
    pub width: usize,
    /// Whether negative values are representable
    pub signed: bool,
    /// Numeric interpretation
    pub kind: Kind,
}

impl Descriptor {
    const fn new(width: usize, signed: bool, kind: Kind) -> Descriptor {
        Descriptor {
            width,
            signed,
            kind,
        }
    }
}

/// All fixed-width primitives understood by the codec.
///
/// Names follow the classic binary-reader vocabulary and parse from / display as lowercase
/// (`"bool"`, `"byte"`, `"ubyte"`, `"short"`, ... `"double"`).
///
/// # Examples
///
/// ```rust
/// use binscope::{Kind, Primitive};
///
/// assert_eq!(Primitive::UShort.width(), 2);
/// assert!(!Primitive::UShort.signed());
/// assert_eq!(Primitive::Double.kind(), Kind::Float);
/// assert_eq!("ulong".parse::<Primitive>().unwrap(), Primitive::ULong);
/// assert_eq!(Primitive::Byte.range(), Some((-128, 127)));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Primitive {
    /// `bool`, 1 byte
    Bool,
    /// `i8`
    Byte,
    /// `u8`
    UByte,
    /// `i16`
    Short,
    /// `u16`
    UShort,
    /// `i32`
    Int,
    /// `u32`
    UInt,
    /// `i64`
    Long,
    /// `u64`
    ULong,
    /// `f32`
    Float,
    /// `f64`
    Double,
}

/// Indexed by `Primitive as usize`.
const TABLE: [Descriptor; Primitive::COUNT] = [
    Descriptor::new(1, false, Kind::Boolean),
    Descriptor::new(1, true, Kind::Integer),
    Descriptor::new(1, false, Kind::Integer),
    Descriptor::new(2, true, Kind::Integer),
    Descriptor::new(2, false, Kind::Integer),
    Descriptor::new(4, true, Kind::Integer),
    Descriptor::new(4, false, Kind::Integer),
    Descriptor::new(8, true, Kind::Integer),
    Descriptor::new(8, false, Kind::Integer),
    Descriptor::new(4, true, Kind::Float),
    Descriptor::new(8, true, Kind::Float),
];

impl Primitive {
    /// Returns the constant descriptor for this primitive.
    #[must_use]
    pub const fn descriptor(self) -> Descriptor {
        TABLE[self as usize]
    }

    /// Encoded size in bytes.
    #[must_use]
    pub const fn width(self) -> usize {
        self.descriptor().width
    }

    /// Whether negative values are representable.
    #[must_use]
    pub const fn signed(self) -> bool {
        self.descriptor().signed
    }

    /// Numeric interpretation.
    #[must_use]
    pub const fn kind(self) -> Kind {
        self.descriptor().kind
    }

    /// Lowercase name of the primitive, as used by `read_<name>` and friends.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Inclusive `(min, max)` bounds for integer primitives, `None` for the other kinds.
    #[must_use]
    pub const fn range(self) -> Option<(i128, i128)> {
        let Descriptor {
            width,
            signed,
            kind,
        } = self.descriptor();
        if !matches!(kind, Kind::Integer) {
            return None;
        }

        let bits = (width * 8) as u32;
        if signed {
            let max = (1_i128 << (bits - 1)) - 1;
            Some((-max - 1, max))
        } else {
            Some((0, (1_i128 << bits) - 1))
        }
    }
}
