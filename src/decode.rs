//! Decoding half of the codec: a bounded cursor over a caller-owned byte
//! slice plus one decode function per wire type.
//!
//! A decoder must be bound to exactly the encoded range (the prefix an
//! [`Encoder`] reports via `as_slice`), at position zero. Binding it to the
//! whole original buffer would interpret trailing unwritten bytes as data.
//!
//! Failed decodes leave the cursor position unchanged, so a caller can
//! inspect the error and the position at which it occurred.
//!
//! [`Encoder`]: crate::Encoder

use crate::errors::Error;
use crate::varint::{MAX_BYTES_U16, MAX_BYTES_U32, MAX_BYTES_U64, unzigzag};

/// A read cursor over a caller-owned byte slice.
///
/// The decoder never allocates and never copies except into destinations
/// the caller supplies. The position only ever increases, and no read
/// lands outside the borrowed slice.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    /// Bind a decoder to an encoded byte range, starting at position zero.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to consume.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether every byte of the source has been consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume one raw byte.
    #[inline]
    fn pull(&mut self) -> Result<u8, Error> {
        let Some(&byte) = self.buf.get(self.pos) else {
            return Err(Error::IncompleteData);
        };
        self.pos += 1;
        Ok(byte)
    }

    /// Consume `len` raw bytes, borrowing them from the source.
    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        if self.remaining() < len {
            return Err(Error::IncompleteData);
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Accumulate an unsigned varint, 7 bits per byte, until a byte with a
    /// clear continuation bit.
    ///
    /// Running out of source bytes is [`Error::IncompleteData`]; a
    /// continuation chain longer than `max_bytes`, or one that shifts past
    /// bit 63, is [`Error::Overflow`]. The position is committed only on
    /// success.
    fn decode_unsigned_varint(&mut self, max_bytes: usize) -> Result<u64, Error> {
        let mut value = 0u64;
        let mut shift = 0u32;
        let mut pos = self.pos;

        for _ in 0..max_bytes {
            let Some(&byte) = self.buf.get(pos) else {
                return Err(Error::IncompleteData);
            };
            pos += 1;

            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                self.pos = pos;
                return Ok(value);
            }

            shift += 7;
            if shift > 63 {
                return Err(Error::Overflow);
            }
        }

        Err(Error::Overflow)
    }

    /// Decode a zigzag-mapped signed varint.
    #[inline]
    fn decode_signed_varint(&mut self, max_bytes: usize) -> Result<i64, Error> {
        Ok(unzigzag(self.decode_unsigned_varint(max_bytes)?))
    }

    /// Decode a boolean; any byte other than `0x00`/`0x01` is invalid.
    pub fn decode_bool(&mut self) -> Result<bool, Error> {
        match self.pull()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            _ => {
                self.pos -= 1;
                Err(Error::InvalidInput)
            }
        }
    }

    /// Decode an unsigned 8-bit integer from one raw byte.
    #[inline]
    pub fn decode_u8(&mut self) -> Result<u8, Error> {
        self.pull()
    }

    /// Decode a signed 8-bit integer from one raw two's-complement byte.
    #[inline]
    pub fn decode_i8(&mut self) -> Result<i8, Error> {
        Ok(self.pull()? as i8)
    }

    /// Decode an unsigned 16-bit varint.
    ///
    /// A wire value that only fits a wider type is [`Error::Overflow`].
    pub fn decode_u16(&mut self) -> Result<u16, Error> {
        let value = self.decode_unsigned_varint(MAX_BYTES_U16)?;
        u16::try_from(value).map_err(|_| Error::Overflow)
    }

    /// Decode a signed 16-bit zigzag varint.
    ///
    /// A wire value that only fits a wider type is [`Error::Overflow`].
    pub fn decode_i16(&mut self) -> Result<i16, Error> {
        let value = self.decode_signed_varint(MAX_BYTES_U16)?;
        i16::try_from(value).map_err(|_| Error::Overflow)
    }

    /// Decode an unsigned 32-bit varint.
    ///
    /// A wire value that only fits a wider type is [`Error::Overflow`].
    pub fn decode_u32(&mut self) -> Result<u32, Error> {
        let value = self.decode_unsigned_varint(MAX_BYTES_U32)?;
        u32::try_from(value).map_err(|_| Error::Overflow)
    }

    /// Decode a signed 32-bit zigzag varint.
    ///
    /// A wire value that only fits a wider type is [`Error::Overflow`].
    pub fn decode_i32(&mut self) -> Result<i32, Error> {
        let value = self.decode_signed_varint(MAX_BYTES_U32)?;
        i32::try_from(value).map_err(|_| Error::Overflow)
    }

    /// Decode an unsigned 64-bit varint.
    #[inline]
    pub fn decode_u64(&mut self) -> Result<u64, Error> {
        self.decode_unsigned_varint(MAX_BYTES_U64)
    }

    /// Decode a signed 64-bit zigzag varint.
    #[inline]
    pub fn decode_i64(&mut self) -> Result<i64, Error> {
        self.decode_signed_varint(MAX_BYTES_U64)
    }

    /// Decode a 32-bit float from 4 little-endian IEEE-754 bytes.
    pub fn decode_f32(&mut self) -> Result<f32, Error> {
        let raw = self.take(4)?;
        let mut bits = [0u8; 4];
        bits.copy_from_slice(raw);
        Ok(f32::from_bits(u32::from_le_bytes(bits)))
    }

    /// Decode a 64-bit float from 8 little-endian IEEE-754 bytes.
    pub fn decode_f64(&mut self) -> Result<f64, Error> {
        let raw = self.take(8)?;
        let mut bits = [0u8; 8];
        bits.copy_from_slice(raw);
        Ok(f64::from_bits(u64::from_le_bytes(bits)))
    }

    /// Decode the varint length prefix of a byte array.
    ///
    /// Call this first so the destination for [`decode_byte_array`] can be
    /// sized; the payload bytes are not consumed.
    ///
    /// [`decode_byte_array`]: Self::decode_byte_array
    pub fn decode_byte_array_len(&mut self) -> Result<usize, Error> {
        let len = self.decode_unsigned_varint(MAX_BYTES_U64)?;
        usize::try_from(len).map_err(|_| Error::Overflow)
    }

    /// Decode `len` payload bytes into `dest`, after the length prefix has
    /// been consumed by [`decode_byte_array_len`].
    ///
    /// Fails with [`Error::IncompleteData`] if fewer than `len` bytes
    /// remain in the source, and with [`Error::BufferTooSmall`] if `dest`
    /// is shorter than `len`; in both cases `dest` is left untouched.
    ///
    /// [`decode_byte_array_len`]: Self::decode_byte_array_len
    pub fn decode_byte_array(&mut self, dest: &mut [u8], len: usize) -> Result<(), Error> {
        if self.remaining() < len {
            return Err(Error::IncompleteData);
        }
        if len > dest.len() {
            return Err(Error::BufferTooSmall);
        }
        dest[..len].copy_from_slice(&self.buf[self.pos..self.pos + len]);
        self.pos += len;
        Ok(())
    }

    /// Decode the varint byte-length prefix of a string.
    ///
    /// Alias of [`decode_byte_array_len`](Self::decode_byte_array_len);
    /// strings are byte arrays that carry UTF-8 by convention.
    #[inline]
    pub fn decode_string_len(&mut self) -> Result<usize, Error> {
        self.decode_byte_array_len()
    }

    /// Decode `len` string bytes into `dest`.
    ///
    /// The bytes are copied verbatim; they are valid UTF-8 by convention of
    /// the wire format, unchecked by this layer.
    #[inline]
    pub fn decode_string(&mut self, dest: &mut [u8], len: usize) -> Result<(), Error> {
        self.decode_byte_array(dest, len)
    }

    /// Decode an option tag, returning `true` for `Some`.
    ///
    /// On `Some` the caller decodes the contained value with the following
    /// calls. Any tag byte other than `0x00`/`0x01` is invalid.
    pub fn decode_option_tag(&mut self) -> Result<bool, Error> {
        match self.pull()? {
            0x00 => Ok(false),
            0x01 => Ok(true),
            _ => {
                self.pos -= 1;
                Err(Error::InvalidInput)
            }
        }
    }

    /// Decode an enum variant discriminant (unsigned 32-bit varint).
    ///
    /// The caller decodes the variant's payload with the following calls.
    #[inline]
    pub fn decode_variant(&mut self) -> Result<u32, Error> {
        self.decode_u32()
    }

    /// Decode a sequence length prefix; that many elements follow, with no
    /// per-element framing.
    pub fn decode_seq_len(&mut self) -> Result<usize, Error> {
        let count = self.decode_unsigned_varint(MAX_BYTES_U64)?;
        usize::try_from(count).map_err(|_| Error::Overflow)
    }

    /// Decode a map length prefix; that many key-value pairs follow, with
    /// no per-pair framing.
    #[inline]
    pub fn decode_map_len(&mut self) -> Result<usize, Error> {
        self.decode_seq_len()
    }
}
