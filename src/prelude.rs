#![doc = r#"
Re-exports of the types most callers need.
"#]

pub use crate::{
    error::{MetaError, ParseError, SmpteError, VarLenError},
    event::TrackEvent,
    meta::{
        ChannelPrefix, KeySignature, MetaMessage, MetaText, MetaType, RawMetaEvent,
        SequenceNumber, SequencerSpecific, SmpteFps, SmpteOffset, Tempo, TimeSignature,
        UnknownMeta, META_MARKER,
    },
    reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
    sink::MidiSink,
    varlen::VarLenInt,
};

#[cfg(feature = "std")]
pub use crate::sink::IoSink;
