#![doc = r#"
A positioned cursor over a finite byte source.

The reader hands out bytes strictly sequentially and never looks ahead.
Every failed read reports the offset it failed at, so the enclosing track
parser can point at the exact byte of a malformed file.
"#]

mod error;
pub use error::*;

/// A sequential cursor over a borrowed byte slice.
///
/// All parsing in this crate goes through one of these. The reader owns its
/// position exclusively for the duration of each call; there is no sharing,
/// no seeking and no suspension.
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    bytes: &'slc [u8],
    position: usize,
    last_error_offset: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader over a byte slice, positioned at its start.
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self {
            bytes,
            position: 0,
            last_error_offset: 0,
        }
    }

    /// The offset of the next byte to be read.
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// The number of bytes left in the source.
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// The offset at which the most recent error was raised.
    pub const fn last_error_offset(&self) -> usize {
        self.last_error_offset
    }

    pub(crate) fn set_last_error_offset(&mut self, offset: usize) {
        self.last_error_offset = offset;
    }

    /// Read a single byte.
    pub fn read_next(&mut self) -> ReadResult<u8> {
        let Some(byte) = self.bytes.get(self.position) else {
            return Err(self.oob());
        };
        self.position += 1;
        Ok(*byte)
    }

    /// Read exactly `count` bytes.
    ///
    /// Fails without consuming anything if fewer than `count` bytes remain.
    pub fn read_exact(&mut self, count: usize) -> ReadResult<&'slc [u8]> {
        let end = self.position + count;
        let Some(slice) = self.bytes.get(self.position..end) else {
            return Err(self.oob());
        };
        self.position = end;
        Ok(slice)
    }

    /// Read exactly `SIZE` bytes into an array.
    pub fn read_exact_size<const SIZE: usize>(&mut self) -> ReadResult<[u8; SIZE]> {
        let mut out = [0; SIZE];
        out.copy_from_slice(self.read_exact(SIZE)?);
        Ok(out)
    }

    fn oob(&mut self) -> ReaderError {
        self.last_error_offset = self.position;
        ReaderError::oob(self.position)
    }
}

#[test]
fn exact_reads_fail_without_consuming() {
    use pretty_assertions::assert_eq;
    let bytes = [0x01, 0x02, 0x03];
    let mut reader = Reader::from_byte_slice(&bytes);

    assert_eq!(reader.read_next().unwrap(), 0x01);
    assert!(reader.read_exact(5).unwrap_err().is_out_of_bounds());
    assert_eq!(reader.buffer_position(), 1);
    assert_eq!(reader.read_exact(2).unwrap(), &[0x02, 0x03]);
    assert!(reader.read_next().unwrap_err().is_out_of_bounds());
}
