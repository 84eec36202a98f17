#![doc = r#"
The base track-event abstraction: where an event sits in its track.

Every event in a track chunk is preceded by a delta-time. The absolute tick
is the running sum of deltas, computed by the track parser and fixed at
construction. This module owns that common prefix; what follows it (the meta
marker, tag and payload) belongs to the event itself.
"#]

use crate::{
    meta::MetaMessage,
    reader::{ReadResult, Reader},
    sink::MidiSink,
    varlen::VarLenInt,
};

/// An event paired with its position inside a track.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent<T> {
    tick: u64,
    delta: VarLenInt,
    event: T,
}

impl<T> TrackEvent<T> {
    /// Place an event at an absolute tick, `delta` ticks after its
    /// predecessor.
    pub fn new(tick: u64, delta: impl Into<VarLenInt>, event: T) -> Self {
        Self {
            tick,
            delta: delta.into(),
            event,
        }
    }

    /// Absolute time of the event in midi ticks.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Ticks since the previous event in the same track.
    pub const fn delta(&self) -> &VarLenInt {
        &self.delta
    }

    /// The event itself.
    pub const fn event(&self) -> &T {
        &self.event
    }

    /// Discard the position, keeping the event.
    pub fn into_event(self) -> T {
        self.event
    }
}

impl TrackEvent<MetaMessage> {
    /// Read the meta event body that follows an already-consumed `0xFF`
    /// status byte, placing it at `tick`/`delta`.
    ///
    /// The caller (the track parser) owns delta-time accounting and marker
    /// detection; this constructor only attaches them to the decoded event.
    pub fn read_meta(
        tick: u64,
        delta: impl Into<VarLenInt>,
        reader: &mut Reader<'_>,
    ) -> ReadResult<Self> {
        let event = MetaMessage::read(reader)?;
        Ok(Self::new(tick, delta, event))
    }

    /// Serialize the delta-time prefix followed by the framed meta event.
    pub fn write<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.delta.write(sink)?;
        self.event.write(sink)
    }
}
