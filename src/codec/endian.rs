//! Byte order selection for multi-byte primitives.

use strum::{Display, EnumIter, EnumString};

/// Byte order used when encoding and decoding multi-byte primitives.
///
/// Every primitive is first converted to its canonical big-endian byte sequence; the selected
/// [`Endian`] is then applied as one reorder step on that sequence (see [`Endian::reorder`]).
/// Single-byte primitives are unaffected by the choice.
///
/// Names parse case-insensitively from `"big"`, `"be"`, `">"`, `"network"` and
/// `"little"`, `"le"`, `"<"`.
///
/// # Examples
///
/// ```rust
/// use binscope::Endian;
///
/// let mut bytes = 0x0102_u16.to_be_bytes();
/// Endian::Little.reorder(&mut bytes);
/// assert_eq!(bytes, [0x02, 0x01]);
///
/// assert_eq!("le".parse::<Endian>().unwrap(), Endian::Little);
/// assert_eq!(Endian::default(), Endian::Big);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Endian {
    /// Most significant byte first (network order)
    #[default]
    #[strum(to_string = "big", serialize = "be", serialize = ">", serialize = "network")]
    Big,
    /// Least significant byte first
    #[strum(to_string = "little", serialize = "le", serialize = "<")]
    Little,
}

impl Endian {
    /// The byte order of the host platform.
    #[must_use]
    pub const fn native() -> Endian {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    /// Converts between the canonical big-endian layout and this byte order, in place.
    ///
    /// The operation is its own inverse: it is applied to an encoded sequence right before it is
    /// written and to raw bytes right after they are read.
    pub fn reorder(self, bytes: &mut [u8]) {
        if self == Endian::Little {
            bytes.reverse();
        }
    }

    /// Returns the other byte order.
    #[must_use]
    pub const fn swapped(self) -> Endian {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorder_is_involution() {
        let original = [0x01, 0x02, 0x03, 0x04];

        let mut bytes = original;
        Endian::Big.reorder(&mut bytes);
        assert_eq!(bytes, original);

        Endian::Little.reorder(&mut bytes);
        assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]);
        Endian::Little.reorder(&mut bytes);
        assert_eq!(bytes, original);
    }

    #[test]
    fn names() {
        assert_eq!("big".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!("BE".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!(">".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!("Little".parse::<Endian>().unwrap(), Endian::Little);
        assert_eq!("<".parse::<Endian>().unwrap(), Endian::Little);
        assert!("middle".parse::<Endian>().is_err());

        assert_eq!(Endian::Big.to_string(), "big");
        assert_eq!(Endian::Little.to_string(), "little");
    }

    #[test]
    fn native_matches_target() {
        let native = Endian::native();
        let mut bytes = 1_u32.to_ne_bytes();
        native.reorder(&mut bytes);
        assert_eq!(bytes, 1_u32.to_be_bytes());
        assert_eq!(native.swapped().swapped(), native);
    }
}
