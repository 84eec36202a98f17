#![doc = r#"
Text-like meta payloads: copied off the wire verbatim, never reinterpreted.

All three types here keep the length field they were decoded with. The length
encoding is not canonical, so writing back the decoded value instead of the
original bytes would corrupt files that used a padded encoding.
"#]

use crate::{sink::MidiSink, varlen::VarLenInt};
use alloc::{borrow::Cow, string::String, vec::Vec};

/// The payload of the seven textual meta kinds.
///
/// Bytes are stored exactly as they appeared in the file. The midi spec
/// suggests printable ASCII but files in the wild carry arbitrary encodings,
/// so no charset validation happens on either path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetaText {
    length: VarLenInt,
    text: Vec<u8>,
}

impl MetaText {
    /// Wrap bytes as a text payload with the minimal length encoding.
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        let text = text.into();
        Self {
            length: VarLenInt::new(text.len() as u32),
            text,
        }
    }

    pub(crate) fn from_raw(length: VarLenInt, text: Vec<u8>) -> Self {
        Self { length, text }
    }

    /// The payload bytes, exactly as stored.
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// The payload decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.length.write(sink)?;
        sink.put(&self.text)
    }
}

impl From<&str> for MetaText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MetaText {
    fn from(value: String) -> Self {
        Self::new(value.into_bytes())
    }
}

/// Opaque data addressed to a particular sequencer, `FF 7F len data`.
///
/// The leading payload bytes are a manufacturer id, but this crate does not
/// interpret them; the blob is carried as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SequencerSpecific {
    length: VarLenInt,
    data: Vec<u8>,
}

impl SequencerSpecific {
    /// Wrap a blob with the minimal length encoding.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        Self {
            length: VarLenInt::new(data.len() as u32),
            data,
        }
    }

    pub(crate) fn from_raw(length: VarLenInt, data: Vec<u8>) -> Self {
        Self { length, data }
    }

    /// The raw blob.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.length.write(sink)?;
        sink.put(&self.data)
    }
}

/// A meta event whose tag is outside the recognized set.
///
/// Decoding one of these is not an error: the tag, length encoding and
/// payload are all retained so the event round-trips byte-exactly, keeping
/// files with vendor or future meta kinds intact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownMeta {
    tag: u8,
    length: VarLenInt,
    data: Vec<u8>,
}

impl UnknownMeta {
    /// Wrap a foreign payload under its tag with the minimal length
    /// encoding.
    pub fn new(tag: u8, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        Self {
            tag,
            length: VarLenInt::new(data.len() as u32),
            data,
        }
    }

    pub(crate) fn from_raw(tag: u8, length: VarLenInt, data: Vec<u8>) -> Self {
        Self { tag, length, data }
    }

    /// The original tag byte.
    pub const fn tag(&self) -> u8 {
        self.tag
    }

    /// The raw payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        self.length.write(sink)?;
        sink.put(&self.data)
    }
}

#[test]
fn text_bytes_are_kept_verbatim() {
    use pretty_assertions::assert_eq;
    // invalid utf-8 on purpose
    let text = MetaText::new(vec![0x4D, 0xFF, 0x21]);
    assert_eq!(text.as_bytes(), &[0x4D, 0xFF, 0x21]);
    assert_eq!(text.text(), "M\u{FFFD}!");

    let mut out = alloc::vec::Vec::new();
    text.write_payload(&mut out).unwrap();
    assert_eq!(out, vec![0x03, 0x4D, 0xFF, 0x21]);
}
