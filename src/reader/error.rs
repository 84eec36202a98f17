use super::Reader;
use crate::error::ParseError;
use thiserror::Error;

#[doc = r#"
An error raised while pulling bytes out of the underlying stream, tagged with
the position the reader had reached when it failed.
"#]
#[derive(Debug, Error)]
#[error("Reading at position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error)]
pub enum ReaderErrorKind {
    /// The bytes were read but could not be interpreted
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// The stream ended before the read could be satisfied.
    ///
    /// Raised when a declared payload length or a variable-length quantity's
    /// continuation bits run past the end of the source. Unrecoverable for
    /// the current record.
    #[error("Read out of bounds!")]
    OutOfBounds,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if the source was exhausted mid-record
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new invalid data error
    pub const fn parse_error(position: usize, error: ParseError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::ParseError(error),
        }
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

pub(crate) fn inv_data(reader: &mut Reader<'_>, v: impl Into<ParseError>) -> ReaderError {
    reader.set_last_error_offset(reader.buffer_position());
    ReaderError::parse_error(reader.buffer_position(), v.into())
}
