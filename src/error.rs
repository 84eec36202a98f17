#![doc = r#"
Typed errors for meta-event parsing.

Every failure is a value propagated to the caller; nothing is logged or
retried. Malformed midi data is not expected to become valid on a second
attempt, so the enclosing track parser decides whether to abort the file or
skip the track.
"#]

use crate::meta::MetaType;
use thiserror::Error;

/// Errors produced while interpreting already-framed bytes.
///
/// Wrapped into [`ReaderErrorKind::ParseError`](crate::reader::ReaderErrorKind)
/// together with the stream position when raised through a
/// [`Reader`](crate::reader::Reader).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A meta event payload could not be interpreted
    #[error("meta event: {0}")]
    Meta(#[from] MetaError),
    /// A variable-length quantity could not be decoded
    #[error("variable-length quantity: {0}")]
    VarLen(#[from] VarLenError),
}

impl From<SmpteError> for ParseError {
    fn from(value: SmpteError) -> Self {
        Self::Meta(MetaError::Smpte(value))
    }
}

/// A meta event payload that does not match its declared kind.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MetaError {
    /// A fixed-width kind received a payload of the wrong byte count.
    ///
    /// Never silently padded or truncated; the record is rejected.
    #[error("{kind:?} expects a payload of {expected} bytes, found {found}")]
    PayloadLength {
        /// The kind whose width was violated
        kind: MetaType,
        /// The byte count the kind defines
        expected: usize,
        /// The byte count the record declared
        found: usize,
    },
    /// An SMPTE offset field is out of range
    #[error(transparent)]
    Smpte(#[from] SmpteError),
}

/// An out-of-range field inside an SMPTE offset payload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// The frame rate type bits were not one of the four defined rates
    #[error("invalid frame rate type {0}")]
    TrackFrame(u8),
    /// Hours are 0-23
    #[error("hour offset {0} out of range")]
    HourOffset(u8),
    /// Minutes are 0-59
    #[error("minute offset {0} out of range")]
    MinuteOffset(u8),
    /// Seconds are 0-59
    #[error("second offset {0} out of range")]
    SecondOffset(u8),
    /// Subframes are 0-99, in 100ths of a frame
    #[error("subframe {0} out of range")]
    Subframe(u8),
}

/// A malformed variable-length quantity.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VarLenError {
    /// The decoded value exceeds the 28 bits the format allows
    #[error("value exceeds 28 bits")]
    Overflow,
}
