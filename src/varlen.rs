#![doc = r#"
The variable-length quantity used for delta-times and meta-event lengths.

Each byte carries 7 data bits; a set high bit means another byte follows.
Groups are concatenated big-endian, so `0x7F` is 127 and `0x81 0x00` is 128.
The format caps values at 28 bits (four data-carrying bytes).

The encoding is not canonical: `0x80 0x05` and `0x05` both decode to 5. A
[`VarLenInt`] that came off the wire remembers the exact bytes it was decoded
from and writes them back verbatim, so non-minimal encodings survive a
read/write round trip.
"#]

use crate::{
    error::VarLenError,
    reader::{inv_data, ReadResult, Reader},
    sink::MidiSink,
};
use alloc::vec::Vec;

/// A decoded variable-length quantity along with its wire encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarLenInt {
    value: u32,
    encoded: Vec<u8>,
}

impl VarLenInt {
    /// The largest representable value: 28 bits, per the midi file spec.
    pub const MAX: u32 = 0x0FFF_FFFF;

    /// Create a quantity with the minimal (canonical) encoding.
    ///
    /// Values wider than [`Self::MAX`] are truncated to 28 bits.
    pub fn new(value: u32) -> Self {
        let value = value & Self::MAX;
        let mut encoded = Vec::with_capacity(4);
        let mut skipping = true;
        for i in (0..4).rev() {
            let byte = ((value >> (i * 7)) & 0x7F) as u8;
            if skipping && byte == 0 && i != 0 {
                continue;
            }
            skipping = false;
            encoded.push(if i == 0 { byte } else { byte | 0x80 });
        }
        Self { value, encoded }
    }

    /// Decode a quantity from the reader, retaining its exact encoding.
    ///
    /// Fails out of bounds if the source ends while a continuation bit is
    /// still set, and with [`VarLenError::Overflow`] if the accumulated value
    /// leaves 28 bits.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let mut value: u32 = 0;
        let mut encoded = Vec::new();
        loop {
            let byte = reader.read_next()?;
            encoded.push(byte);
            if value >> 21 != 0 {
                return Err(inv_data(reader, VarLenError::Overflow));
            }
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(Self { value, encoded });
            }
        }
    }

    /// The decoded value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The wire encoding this quantity will serialize as.
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }

    /// Write the encoding to the sink.
    pub fn write<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.put(&self.encoded)
    }
}

impl From<u32> for VarLenInt {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

#[test]
fn encodes_boundary_values_minimally() {
    use pretty_assertions::assert_eq;
    assert_eq!(VarLenInt::new(0).as_bytes(), &[0x00]);
    assert_eq!(VarLenInt::new(127).as_bytes(), &[0x7F]);
    assert_eq!(VarLenInt::new(128).as_bytes(), &[0x81, 0x00]);
    assert_eq!(VarLenInt::new(VarLenInt::MAX).as_bytes(), &[0xFF, 0xFF, 0xFF, 0x7F]);
}

#[test]
fn decodes_boundary_values() {
    use pretty_assertions::assert_eq;
    let bytes = [0x7F, 0x81, 0x00];
    let mut reader = Reader::from_byte_slice(&bytes);
    assert_eq!(VarLenInt::read(&mut reader).unwrap().value(), 127);
    assert_eq!(VarLenInt::read(&mut reader).unwrap().value(), 128);
}

#[test]
fn retains_non_minimal_encodings() {
    use pretty_assertions::assert_eq;
    // leading continuation byte contributes nothing to the value
    let bytes = [0x80, 0x05];
    let mut reader = Reader::from_byte_slice(&bytes);
    let quantity = VarLenInt::read(&mut reader).unwrap();

    assert_eq!(quantity.value(), 5);
    assert_eq!(quantity.as_bytes(), &bytes);

    let mut out = Vec::new();
    quantity.write(&mut out).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn unterminated_continuation_is_out_of_bounds() {
    let bytes = [0x81, 0x83];
    let mut reader = Reader::from_byte_slice(&bytes);
    assert!(VarLenInt::read(&mut reader).unwrap_err().is_out_of_bounds());
}

#[test]
fn rejects_values_past_28_bits() {
    use crate::error::{ParseError, VarLenError};
    use crate::reader::ReaderErrorKind;

    let bytes = [0x87, 0xFF, 0xFF, 0xFF, 0x7F];
    let mut reader = Reader::from_byte_slice(&bytes);
    let err = VarLenInt::read(&mut reader).unwrap_err();
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::VarLen(VarLenError::Overflow))
    ));
}
