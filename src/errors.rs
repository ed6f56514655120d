//! Submodule defining the errors used across the crate.

/// Errors that can occur while encoding or decoding wire data.
///
/// Every fallible operation in this crate returns the first error it
/// encounters and stops; nothing is retried internally. All variants are
/// recoverable by the caller (retry with a larger buffer, abort, or treat
/// the input as corrupt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A decoded byte is not valid for the requested type, such as a
    /// boolean or option tag other than `0x00`/`0x01`.
    #[error("invalid input byte for the requested type")]
    InvalidInput,

    /// Not enough capacity remains to complete an encode, or a decode
    /// destination is smaller than the data being decoded into it.
    #[error("buffer too small")]
    BufferTooSmall,

    /// The source ran out of bytes before a value could be fully decoded.
    #[error("incomplete data")]
    IncompleteData,

    /// A varint exceeded its byte budget, or a decoded value does not fit
    /// in the requested type.
    #[error("value overflows the target type or its byte budget")]
    Overflow,
}
