use crate::{
    error::MetaError,
    meta::MetaType,
    sink::MidiSink,
};

/// The number of this sequence, `FF 00 02 ssss`.
///
/// Identifies a pattern in a format 2 file so cue messages can refer to it;
/// in format 0 and 1 files it belongs in the first track, if present at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequenceNumber(u16);

impl SequenceNumber {
    pub(crate) const LEN: usize = 2;

    /// Wrap a sequence number.
    pub const fn new(number: u16) -> Self {
        Self(number)
    }

    /// The sequence number.
    pub const fn number(&self) -> u16 {
        self.0
    }

    /// Interpret a payload as a 2-byte big-endian sequence number.
    pub const fn parse(data: &[u8]) -> Result<Self, MetaError> {
        if data.len() != Self::LEN {
            return Err(MetaError::PayloadLength {
                kind: MetaType::SequenceNumber,
                expected: Self::LEN,
                found: data.len(),
            });
        }
        Ok(Self(u16::from_be_bytes([data[0], data[1]])))
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let [msb, lsb] = self.0.to_be_bytes();
        sink.put(&[Self::LEN as u8, msb, lsb])
    }
}
