use crate::{
    error::MetaError,
    meta::MetaType,
    sink::MidiSink,
};

/// The midi channel the following meta events apply to, `FF 20 01 cc`.
///
/// Effective until the next channel-carrying event or the next prefix. The
/// byte is stored as read; channels are 0-15 in well-formed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelPrefix(u8);

impl ChannelPrefix {
    pub(crate) const LEN: usize = 1;

    /// Wrap a channel number.
    pub const fn new(channel: u8) -> Self {
        Self(channel)
    }

    /// The channel number.
    pub const fn channel(&self) -> u8 {
        self.0
    }

    /// Interpret a payload as a single channel byte.
    pub const fn parse(data: &[u8]) -> Result<Self, MetaError> {
        if data.len() != Self::LEN {
            return Err(MetaError::PayloadLength {
                kind: MetaType::ChannelPrefix,
                expected: Self::LEN,
                found: data.len(),
            });
        }
        Ok(Self(data[0]))
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.put(&[Self::LEN as u8, self.0])
    }
}
