//! Pure size calculators: the exact number of bytes each value occupies on
//! the wire, computed without writing anything.
//!
//! Callers use these to pre-size buffers before encoding. Each function
//! mirrors the byte-counting of the corresponding encode function and must
//! stay byte-for-byte consistent with it; `tests/size_consistency.rs`
//! sweeps that invariant.

use crate::varint::{varint_len, zigzag};

/// Encoded size of a boolean.
#[inline]
#[must_use]
pub const fn size_bool() -> usize {
    1
}

/// Encoded size of an unsigned 8-bit integer.
#[inline]
#[must_use]
pub const fn size_u8() -> usize {
    1
}

/// Encoded size of a signed 8-bit integer.
#[inline]
#[must_use]
pub const fn size_i8() -> usize {
    1
}

/// Encoded size of an unsigned varint of any width.
#[inline]
#[must_use]
pub const fn size_unsigned_varint(value: u64) -> usize {
    varint_len(value)
}

/// Encoded size of a zigzag-mapped signed varint of any width.
#[inline]
#[must_use]
pub const fn size_signed_varint(value: i64) -> usize {
    varint_len(zigzag(value))
}

/// Encoded size of an unsigned 16-bit integer.
#[inline]
#[must_use]
pub const fn size_u16(value: u16) -> usize {
    size_unsigned_varint(value as u64)
}

/// Encoded size of a signed 16-bit integer.
#[inline]
#[must_use]
pub const fn size_i16(value: i16) -> usize {
    size_signed_varint(value as i64)
}

/// Encoded size of an unsigned 32-bit integer.
#[inline]
#[must_use]
pub const fn size_u32(value: u32) -> usize {
    size_unsigned_varint(value as u64)
}

/// Encoded size of a signed 32-bit integer.
#[inline]
#[must_use]
pub const fn size_i32(value: i32) -> usize {
    size_signed_varint(value as i64)
}

/// Encoded size of an unsigned 64-bit integer.
#[inline]
#[must_use]
pub const fn size_u64(value: u64) -> usize {
    size_unsigned_varint(value)
}

/// Encoded size of a signed 64-bit integer.
#[inline]
#[must_use]
pub const fn size_i64(value: i64) -> usize {
    size_signed_varint(value)
}

/// Encoded size of a 32-bit float.
#[inline]
#[must_use]
pub const fn size_f32() -> usize {
    4
}

/// Encoded size of a 64-bit float.
#[inline]
#[must_use]
pub const fn size_f64() -> usize {
    8
}

/// Encoded size of a byte array of `length` bytes: the varint length
/// prefix plus the raw bytes.
#[inline]
#[must_use]
pub const fn size_byte_array(length: usize) -> usize {
    varint_len(length as u64) + length
}

/// Encoded size of a string of `length` UTF-8 bytes.
#[inline]
#[must_use]
pub const fn size_string(length: usize) -> usize {
    size_byte_array(length)
}

/// Encoded size of an option's `None` tag.
#[inline]
#[must_use]
pub const fn size_option_none() -> usize {
    1
}

/// Encoded size of an option's `Some` tag plus a contained value of
/// `inner_size` bytes.
#[inline]
#[must_use]
pub const fn size_option_some(inner_size: usize) -> usize {
    1 + inner_size
}

/// Encoded size of an enum variant discriminant.
#[inline]
#[must_use]
pub const fn size_variant(discriminant: u32) -> usize {
    size_u32(discriminant)
}

/// Encoded size of a sequence length prefix for `count` elements.
#[inline]
#[must_use]
pub const fn size_seq_len(count: usize) -> usize {
    size_unsigned_varint(count as u64)
}

/// Encoded size of a map length prefix for `count` key-value pairs.
#[inline]
#[must_use]
pub const fn size_map_len(count: usize) -> usize {
    size_unsigned_varint(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_ladder() {
        assert_eq!(size_u64(0), 1);
        assert_eq!(size_u64(127), 1);
        assert_eq!(size_u64(128), 2);
        assert_eq!(size_u64(16383), 2);
        assert_eq!(size_u64(16384), 3);
        assert_eq!(size_u64(u64::MAX), 10);
    }

    #[test]
    fn test_signed_sizes_track_magnitude() {
        // -1 zigzags to 1, staying a single byte.
        assert_eq!(size_i64(-1), 1);
        assert_eq!(size_i64(-64), 1);
        assert_eq!(size_i64(-65), 2);
        assert_eq!(size_i64(63), 1);
        assert_eq!(size_i64(64), 2);
        assert_eq!(size_i64(i64::MIN), 10);
    }

    #[test]
    fn test_wrapper_sizes() {
        assert_eq!(size_byte_array(0), 1);
        assert_eq!(size_byte_array(3), 4);
        assert_eq!(size_byte_array(128), 130);
        assert_eq!(size_option_none(), 1);
        assert_eq!(size_option_some(size_u8()), 2);
        assert_eq!(size_variant(0), 1);
        assert_eq!(size_seq_len(200), 2);
    }
}
