#![doc = r#"
Meta events: the `0xFF`-framed annotations inside a midi track chunk.

# Wire shape

Every meta event is laid out as

```text
0xFF  tag  length  payload
```

where `tag` is one byte, `length` is a variable-length quantity and `payload`
is exactly `length` bytes. The tag alone decides how the payload is read:

- **Text-like kinds** (text, copyright, track name, instrument name, lyric,
  marker, cue point) copy the payload verbatim as an opaque byte string.
  Sequencer-specific data is the same shape, kept as a binary blob.
- **Structured kinds** (sequence number, channel prefix, end of track, tempo,
  SMPTE offset, time signature, key signature) interpret the payload as
  fixed-width binary fields and reject any other width.
- **Anything else** is preserved losslessly as [`UnknownMeta`], so files using
  vendor or future tags survive a read/write round trip untouched.

# Reading

The reader must already be positioned *after* the `0xFF` marker; spotting the
marker is the track parser's job, as is delta-time accounting.

```
use midimeta::prelude::*;

let bytes = [0x51, 0x03, 0x07, 0xA1, 0x20];
let mut reader = Reader::from_byte_slice(&bytes);
let message = MetaMessage::read(&mut reader)?;

assert_eq!(message, MetaMessage::Tempo(Tempo::new(500_000)));
# Ok::<(), midimeta::reader::ReaderError>(())
```
"#]

mod channel_prefix;
pub use channel_prefix::*;

mod key_signature;
pub use key_signature::*;

mod sequence_number;
pub use sequence_number::*;

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

mod text;
pub use text::*;

mod time_signature;
pub use time_signature::*;

use crate::{
    error::MetaError,
    reader::{inv_data, ReadResult, Reader},
    sink::MidiSink,
    varlen::VarLenInt,
};
use alloc::vec::Vec;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Status byte introducing a meta event inside a track chunk.
pub const META_MARKER: u8 = 0xFF;

/// The closed set of recognized meta-event tags.
///
/// Tags outside this set are not errors; they dispatch to [`UnknownMeta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00 02 ssss`
    SequenceNumber = 0x00,
    /// `FF 01 len text`
    Text = 0x01,
    /// `FF 02 len text`
    Copyright = 0x02,
    /// `FF 03 len text`
    TrackName = 0x03,
    /// `FF 04 len text`
    InstrumentName = 0x04,
    /// `FF 05 len text`
    Lyric = 0x05,
    /// `FF 06 len text`
    Marker = 0x06,
    /// `FF 07 len text`
    CuePoint = 0x07,
    /// `FF 20 01 cc`
    ChannelPrefix = 0x20,
    /// `FF 2F 00`
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`
    Tempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`
    SequencerSpecific = 0x7F,
}

/// One undispatched meta record: tag, declared length, raw payload.
///
/// Records are transient. [`RawMetaEvent::read`] pulls one off the stream and
/// [`MetaMessage::from_raw`] consumes it immediately, moving the payload into
/// the typed variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMetaEvent {
    tag: u8,
    length: VarLenInt,
    payload: Vec<u8>,
}

impl RawMetaEvent {
    /// Frame a payload under a tag, with the minimal length encoding.
    pub fn new(tag: u8, payload: Vec<u8>) -> Self {
        Self {
            tag,
            length: VarLenInt::new(payload.len() as u32),
            payload,
        }
    }

    /// Read one record from a reader positioned just after the `0xFF`
    /// marker: one tag byte, a variable-length length, then exactly that
    /// many payload bytes.
    ///
    /// Fails out of bounds if the source is exhausted before the declared
    /// payload is available or while the length's continuation bits are
    /// still set. The payload is not interpreted, and nothing beyond it is
    /// allocated.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let tag = reader.read_next()?;
        let length = VarLenInt::read(reader)?;
        let payload = reader.read_exact(length.value() as usize)?.to_vec();
        Ok(Self {
            tag,
            length,
            payload,
        })
    }

    /// The tag byte following the marker.
    pub const fn tag(&self) -> u8 {
        self.tag
    }

    /// The declared payload length, with its original encoding.
    pub const fn length(&self) -> &VarLenInt {
        &self.length
    }

    /// The raw payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

/// A decoded meta event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaMessage {
    /// The number of this sequence within a larger collection
    SequenceNumber(SequenceNumber),
    /// Arbitrary text tied to an instant
    Text(MetaText),
    /// A copyright notice
    Copyright(MetaText),
    /// The name of the track (or of the sequence, in the first track)
    TrackName(MetaText),
    /// The instrumentation of the track
    InstrumentName(MetaText),
    /// A lyric syllable
    Lyric(MetaText),
    /// A named point in the sequence, like a rehearsal letter
    Marker(MetaText),
    /// A description of stage or screen action at this point
    CuePoint(MetaText),
    /// The midi channel the following meta events apply to
    ChannelPrefix(ChannelPrefix),
    /// Marks the exact end of the track; carries no payload
    EndOfTrack,
    /// Microseconds per quarter note
    Tempo(Tempo),
    /// The SMPTE time the track starts at
    SmpteOffset(SmpteOffset),
    /// The notated time signature
    TimeSignature(TimeSignature),
    /// The key, as a count of sharps or flats plus a mode
    KeySignature(KeySignature),
    /// Opaque data addressed to a specific sequencer
    SequencerSpecific(SequencerSpecific),
    /// Any tag outside the recognized set, preserved losslessly
    Unknown(UnknownMeta),
}

impl MetaMessage {
    /// Read and dispatch one meta event from a reader positioned just after
    /// the `0xFF` marker.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let raw = RawMetaEvent::read(reader)?;
        Self::from_raw(raw).map_err(|e| inv_data(reader, e))
    }

    /// Dispatch a raw record to its typed variant, consuming it.
    ///
    /// Total over the tag byte: recognized tags go to their kind, everything
    /// else to [`MetaMessage::Unknown`]. The only failures are structured
    /// kinds rejecting a payload of the wrong shape.
    pub fn from_raw(raw: RawMetaEvent) -> Result<Self, MetaError> {
        let RawMetaEvent {
            tag,
            length,
            payload,
        } = raw;
        let Ok(kind) = MetaType::try_from(tag) else {
            return Ok(Self::Unknown(UnknownMeta::from_raw(tag, length, payload)));
        };
        Ok(match kind {
            MetaType::Text => Self::Text(MetaText::from_raw(length, payload)),
            MetaType::Copyright => Self::Copyright(MetaText::from_raw(length, payload)),
            MetaType::TrackName => Self::TrackName(MetaText::from_raw(length, payload)),
            MetaType::InstrumentName => Self::InstrumentName(MetaText::from_raw(length, payload)),
            MetaType::Lyric => Self::Lyric(MetaText::from_raw(length, payload)),
            MetaType::Marker => Self::Marker(MetaText::from_raw(length, payload)),
            MetaType::CuePoint => Self::CuePoint(MetaText::from_raw(length, payload)),
            MetaType::SequencerSpecific => {
                Self::SequencerSpecific(SequencerSpecific::from_raw(length, payload))
            }
            MetaType::SequenceNumber => Self::SequenceNumber(SequenceNumber::parse(&payload)?),
            MetaType::ChannelPrefix => Self::ChannelPrefix(ChannelPrefix::parse(&payload)?),
            MetaType::EndOfTrack => {
                if !payload.is_empty() {
                    return Err(MetaError::PayloadLength {
                        kind: MetaType::EndOfTrack,
                        expected: 0,
                        found: payload.len(),
                    });
                }
                Self::EndOfTrack
            }
            MetaType::Tempo => Self::Tempo(Tempo::parse(&payload)?),
            MetaType::SmpteOffset => Self::SmpteOffset(SmpteOffset::parse(&payload)?),
            MetaType::TimeSignature => Self::TimeSignature(TimeSignature::parse(&payload)?),
            MetaType::KeySignature => Self::KeySignature(KeySignature::parse(&payload)?),
        })
    }

    /// The kind of this message, or `None` for an unrecognized tag.
    pub const fn meta_type(&self) -> Option<MetaType> {
        Some(match self {
            Self::SequenceNumber(_) => MetaType::SequenceNumber,
            Self::Text(_) => MetaType::Text,
            Self::Copyright(_) => MetaType::Copyright,
            Self::TrackName(_) => MetaType::TrackName,
            Self::InstrumentName(_) => MetaType::InstrumentName,
            Self::Lyric(_) => MetaType::Lyric,
            Self::Marker(_) => MetaType::Marker,
            Self::CuePoint(_) => MetaType::CuePoint,
            Self::ChannelPrefix(_) => MetaType::ChannelPrefix,
            Self::EndOfTrack => MetaType::EndOfTrack,
            Self::Tempo(_) => MetaType::Tempo,
            Self::SmpteOffset(_) => MetaType::SmpteOffset,
            Self::TimeSignature(_) => MetaType::TimeSignature,
            Self::KeySignature(_) => MetaType::KeySignature,
            Self::SequencerSpecific(_) => MetaType::SequencerSpecific,
            Self::Unknown(_) => return None,
        })
    }

    /// The tag byte this message serializes under.
    pub const fn tag(&self) -> u8 {
        match self {
            Self::SequenceNumber(_) => MetaType::SequenceNumber as u8,
            Self::Text(_) => MetaType::Text as u8,
            Self::Copyright(_) => MetaType::Copyright as u8,
            Self::TrackName(_) => MetaType::TrackName as u8,
            Self::InstrumentName(_) => MetaType::InstrumentName as u8,
            Self::Lyric(_) => MetaType::Lyric as u8,
            Self::Marker(_) => MetaType::Marker as u8,
            Self::CuePoint(_) => MetaType::CuePoint as u8,
            Self::ChannelPrefix(_) => MetaType::ChannelPrefix as u8,
            Self::EndOfTrack => MetaType::EndOfTrack as u8,
            Self::Tempo(_) => MetaType::Tempo as u8,
            Self::SmpteOffset(_) => MetaType::SmpteOffset as u8,
            Self::TimeSignature(_) => MetaType::TimeSignature as u8,
            Self::KeySignature(_) => MetaType::KeySignature as u8,
            Self::SequencerSpecific(_) => MetaType::SequencerSpecific as u8,
            Self::Unknown(ev) => ev.tag(),
        }
    }

    /// Serialize the full framed event: marker, tag, then the variant's own
    /// length-prefixed payload.
    pub fn write<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.put(&[META_MARKER, self.tag()])?;
        match self {
            Self::Text(text)
            | Self::Copyright(text)
            | Self::TrackName(text)
            | Self::InstrumentName(text)
            | Self::Lyric(text)
            | Self::Marker(text)
            | Self::CuePoint(text) => text.write_payload(sink),
            Self::SequenceNumber(ev) => ev.write_payload(sink),
            Self::ChannelPrefix(ev) => ev.write_payload(sink),
            Self::EndOfTrack => sink.put(&[0x00]),
            Self::Tempo(ev) => ev.write_payload(sink),
            Self::SmpteOffset(ev) => ev.write_payload(sink),
            Self::TimeSignature(ev) => ev.write_payload(sink),
            Self::KeySignature(ev) => ev.write_payload(sink),
            Self::SequencerSpecific(ev) => ev.write_payload(sink),
            Self::Unknown(ev) => ev.write_payload(sink),
        }
    }
}
