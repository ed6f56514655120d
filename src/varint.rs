//! Varint and zigzag primitives shared by the encoder, decoder, and size
//! calculators.
//!
//! The wire format stores every multi-byte integer as a little-endian
//! base-128 varint: each byte carries 7 data bits, and the high bit is a
//! continuation flag (1 = more bytes follow). Signed integers are first
//! mapped to unsigned magnitudes with zigzag so that small negative values
//! stay small on the wire.
//!
//! For example, 1234 (0x4D2) encodes as:
//! - Binary: 10011010010 (11 bits)
//! - Low 7 bits first: 1010010, then 0001001
//! - First byte: 0x80 | 0x52 = 0xD2 (continuation)
//! - Second byte: 0x09 (no continuation)
//! - Result: [0xD2, 0x09]

/// Maximum encoded length of a 16-bit varint.
pub(crate) const MAX_BYTES_U16: usize = 3;
/// Maximum encoded length of a 32-bit varint.
pub(crate) const MAX_BYTES_U32: usize = 5;
/// Maximum encoded length of a 64-bit varint.
pub(crate) const MAX_BYTES_U64: usize = 10;

/// Map a signed value to its zigzag magnitude: `(n << 1) ^ (n >> 63)`.
///
/// Small magnitudes of either sign map to small unsigned values:
/// 0 -> 0, -1 -> 1, 1 -> 2, -2 -> 3, and so on.
#[inline]
#[must_use]
pub(crate) const fn zigzag(value: i64) -> u64 {
    ((value as u64) << 1) ^ ((value >> 63) as u64)
}

/// Invert [`zigzag`]: `(z >> 1) ^ -(z & 1)`.
#[inline]
#[must_use]
pub(crate) const fn unzigzag(magnitude: u64) -> i64 {
    ((magnitude >> 1) as i64) ^ -((magnitude & 1) as i64)
}

/// Number of bytes an unsigned varint occupies on the wire.
///
/// Threshold ladder over powers of 128; must stay byte-for-byte consistent
/// with the encoder's emit loop.
#[must_use]
pub(crate) const fn varint_len(value: u64) -> usize {
    if value < 0x80 {
        1
    } else if value < 0x4000 {
        2
    } else if value < 0x20_0000 {
        3
    } else if value < 0x1000_0000 {
        4
    } else if value < 0x8_0000_0000 {
        5
    } else if value < 0x400_0000_0000 {
        6
    } else if value < 0x2_0000_0000_0000 {
        7
    } else if value < 0x100_0000_0000_0000 {
        8
    } else if value < 0x8000_0000_0000_0000 {
        9
    } else {
        10
    }
}
