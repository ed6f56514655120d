//! Encoding half of the codec: a bounded cursor over a caller-owned buffer
//! plus one encode function per wire type.
//!
//! Every encode is atomic: the exact byte count is checked against the
//! remaining capacity before anything is written, so a failed call leaves
//! the cursor position and the buffer contents untouched.

use crate::errors::Error;
use crate::size;
use crate::varint::{MAX_BYTES_U16, MAX_BYTES_U32, MAX_BYTES_U64, varint_len, zigzag};

/// A write cursor over a caller-owned byte buffer.
///
/// The encoder never allocates: it borrows a fixed region and tracks how
/// many bytes have been produced. The position only ever increases, and no
/// write lands outside the borrowed slice. One encoder instance serves one
/// encode pass; decoding the result requires binding a fresh [`Decoder`]
/// to [`as_slice`](Self::as_slice), not reusing this cursor.
///
/// [`Decoder`]: crate::Decoder
#[derive(Debug)]
pub struct Encoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Encoder<'a> {
    /// Bind an encoder to a caller-owned buffer, starting at position zero.
    #[must_use]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes produced so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Remaining capacity in bytes.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The written prefix of the buffer.
    ///
    /// This is the exact range a decoder should be bound to; trailing bytes
    /// of the buffer were never written and hold no encoded data.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Write a single raw byte.
    #[inline]
    fn push(&mut self, byte: u8) -> Result<(), Error> {
        if self.remaining() < 1 {
            return Err(Error::BufferTooSmall);
        }
        self.buf[self.pos] = byte;
        self.pos += 1;
        Ok(())
    }

    /// Emit an unsigned varint, low 7-bit group first, continuation bit on
    /// every byte but the last.
    ///
    /// `max_bytes` is the budget of the integer's declared width; a value
    /// that would not fit the budget is an [`Error::Overflow`]. The size is
    /// checked up front so nothing is written on failure.
    fn encode_unsigned_varint(&mut self, mut value: u64, max_bytes: usize) -> Result<(), Error> {
        let needed = varint_len(value);
        if needed > max_bytes {
            return Err(Error::Overflow);
        }
        if needed > self.remaining() {
            return Err(Error::BufferTooSmall);
        }
        while value >= 0x80 {
            self.buf[self.pos] = (value as u8) | 0x80;
            self.pos += 1;
            value >>= 7;
        }
        self.buf[self.pos] = value as u8;
        self.pos += 1;
        Ok(())
    }

    /// Emit a signed integer as a zigzag-mapped unsigned varint.
    #[inline]
    fn encode_signed_varint(&mut self, value: i64, max_bytes: usize) -> Result<(), Error> {
        self.encode_unsigned_varint(zigzag(value), max_bytes)
    }

    /// Encode a boolean as a single `0x00`/`0x01` byte.
    #[inline]
    pub fn encode_bool(&mut self, value: bool) -> Result<(), Error> {
        self.push(u8::from(value))
    }

    /// Encode an unsigned 8-bit integer as one raw byte.
    #[inline]
    pub fn encode_u8(&mut self, value: u8) -> Result<(), Error> {
        self.push(value)
    }

    /// Encode a signed 8-bit integer as one raw two's-complement byte.
    #[inline]
    pub fn encode_i8(&mut self, value: i8) -> Result<(), Error> {
        self.push(value as u8)
    }

    /// Encode an unsigned 16-bit integer as a varint (at most 3 bytes).
    #[inline]
    pub fn encode_u16(&mut self, value: u16) -> Result<(), Error> {
        self.encode_unsigned_varint(u64::from(value), MAX_BYTES_U16)
    }

    /// Encode a signed 16-bit integer as a zigzag varint (at most 3 bytes).
    #[inline]
    pub fn encode_i16(&mut self, value: i16) -> Result<(), Error> {
        self.encode_signed_varint(i64::from(value), MAX_BYTES_U16)
    }

    /// Encode an unsigned 32-bit integer as a varint (at most 5 bytes).
    #[inline]
    pub fn encode_u32(&mut self, value: u32) -> Result<(), Error> {
        self.encode_unsigned_varint(u64::from(value), MAX_BYTES_U32)
    }

    /// Encode a signed 32-bit integer as a zigzag varint (at most 5 bytes).
    #[inline]
    pub fn encode_i32(&mut self, value: i32) -> Result<(), Error> {
        self.encode_signed_varint(i64::from(value), MAX_BYTES_U32)
    }

    /// Encode an unsigned 64-bit integer as a varint (at most 10 bytes).
    #[inline]
    pub fn encode_u64(&mut self, value: u64) -> Result<(), Error> {
        self.encode_unsigned_varint(value, MAX_BYTES_U64)
    }

    /// Encode a signed 64-bit integer as a zigzag varint (at most 10 bytes).
    #[inline]
    pub fn encode_i64(&mut self, value: i64) -> Result<(), Error> {
        self.encode_signed_varint(value, MAX_BYTES_U64)
    }

    /// Encode a 32-bit float as its IEEE-754 bit pattern, 4 bytes
    /// little-endian regardless of host byte order.
    pub fn encode_f32(&mut self, value: f32) -> Result<(), Error> {
        if self.remaining() < 4 {
            return Err(Error::BufferTooSmall);
        }
        self.buf[self.pos..self.pos + 4].copy_from_slice(&value.to_bits().to_le_bytes());
        self.pos += 4;
        Ok(())
    }

    /// Encode a 64-bit float as its IEEE-754 bit pattern, 8 bytes
    /// little-endian regardless of host byte order.
    pub fn encode_f64(&mut self, value: f64) -> Result<(), Error> {
        if self.remaining() < 8 {
            return Err(Error::BufferTooSmall);
        }
        self.buf[self.pos..self.pos + 8].copy_from_slice(&value.to_bits().to_le_bytes());
        self.pos += 8;
        Ok(())
    }

    /// Encode a byte array: varint length prefix, then the bytes verbatim.
    ///
    /// The combined size is checked before the length prefix is written, so
    /// a payload that does not fit leaves the cursor unmoved.
    pub fn encode_byte_array(&mut self, bytes: &[u8]) -> Result<(), Error> {
        if size::size_byte_array(bytes.len()) > self.remaining() {
            return Err(Error::BufferTooSmall);
        }
        self.encode_unsigned_varint(bytes.len() as u64, MAX_BYTES_U64)?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Encode a string: varint byte length, then the UTF-8 bytes with no
    /// terminator.
    #[inline]
    pub fn encode_string(&mut self, value: &str) -> Result<(), Error> {
        self.encode_byte_array(value.as_bytes())
    }

    /// Encode the `None` tag of an option (single `0x00` byte).
    #[inline]
    pub fn encode_option_none(&mut self) -> Result<(), Error> {
        self.push(0x00)
    }

    /// Encode the `Some` tag of an option (single `0x01` byte).
    ///
    /// The caller encodes the contained value with the following calls.
    #[inline]
    pub fn encode_option_some(&mut self) -> Result<(), Error> {
        self.push(0x01)
    }

    /// Encode an enum variant discriminant as an unsigned 32-bit varint.
    ///
    /// The caller encodes the variant's payload with the following calls.
    #[inline]
    pub fn encode_variant(&mut self, discriminant: u32) -> Result<(), Error> {
        self.encode_u32(discriminant)
    }

    /// Encode a sequence length prefix; the caller encodes that many
    /// elements afterwards, with no per-element framing.
    #[inline]
    pub fn encode_seq_len(&mut self, count: usize) -> Result<(), Error> {
        self.encode_unsigned_varint(count as u64, MAX_BYTES_U64)
    }

    /// Encode a map length prefix; the caller encodes that many key-value
    /// pairs afterwards, with no per-pair framing.
    #[inline]
    pub fn encode_map_len(&mut self, count: usize) -> Result<(), Error> {
        self.encode_unsigned_varint(count as u64, MAX_BYTES_U64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varint_1234() {
        let mut buf = [0u8; 8];
        let mut enc = Encoder::new(&mut buf);
        enc.encode_u64(1234).unwrap();
        assert_eq!(enc.as_slice(), [0xD2, 0x09]);
    }

    #[test]
    fn test_failed_encode_leaves_position_unchanged() {
        let mut buf = [0u8; 2];
        let mut enc = Encoder::new(&mut buf);
        enc.encode_u8(0xAA).unwrap();
        assert_eq!(enc.encode_u32(u32::MAX), Err(Error::BufferTooSmall));
        assert_eq!(enc.position(), 1);
        assert_eq!(enc.encode_byte_array(b"abc"), Err(Error::BufferTooSmall));
        assert_eq!(enc.position(), 1);
        // The untouched tail still holds its original contents.
        assert_eq!(buf[1], 0);
    }

    #[test]
    fn test_byte_array_too_large_writes_no_length_prefix() {
        let mut buf = [0u8; 3];
        let mut enc = Encoder::new(&mut buf);
        // Length prefix alone would fit, the payload would not.
        assert_eq!(enc.encode_byte_array(&[1, 2, 3, 4]), Err(Error::BufferTooSmall));
        assert_eq!(enc.position(), 0);
        assert_eq!(buf, [0, 0, 0]);
    }

    #[test]
    fn test_empty_byte_array_is_one_byte() {
        let mut buf = [0u8; 4];
        let mut enc = Encoder::new(&mut buf);
        enc.encode_byte_array(&[]).unwrap();
        assert_eq!(enc.as_slice(), [0x00]);
    }
}
