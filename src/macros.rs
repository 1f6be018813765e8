#![allow(unused_macros)]

/// Expands `$callback!` once with the full primitive table.
///
/// Every row is `(Variant, rust_type, read_fn, write_fn, peek_fn)`. The codec dispatch and the
/// per-primitive methods of [`crate::Stream`] are both generated from this single list, so adding
/// a row here is the only place a new primitive has to be registered.
///
/// ```rust, ignore
/// macro_rules! count {
///     ($(($variant:ident, $ty:ty, $read:ident, $write:ident, $peek:ident)),* $(,)?) => {
///         [$(stringify!($variant)),*].len()
///     };
/// }
/// assert_eq!(with_primitives!(count), 11);
/// ```
macro_rules! with_primitives {
    ($callback:ident) => {
        $callback! {
            (Bool, bool, read_bool, write_bool, peek_bool),
            (Byte, i8, read_byte, write_byte, peek_byte),
            (UByte, u8, read_ubyte, write_ubyte, peek_ubyte),
            (Short, i16, read_short, write_short, peek_short),
            (UShort, u16, read_ushort, write_ushort, peek_ushort),
            (Int, i32, read_int, write_int, peek_int),
            (UInt, u32, read_uint, write_uint, peek_uint),
            (Long, i64, read_long, write_long, peek_long),
            (ULong, u64, read_ulong, write_ulong, peek_ulong),
            (Float, f32, read_float, write_float, peek_float),
            (Double, f64, read_double, write_double, peek_double),
        }
    };
}
