use crate::{
    error::MetaError,
    meta::MetaType,
    sink::MidiSink,
};

/// The notated key, `FF 59 02 sf mi`.
///
/// Negative `accidentals` counts flats, positive counts sharps; well-formed
/// files stay within -7..=7 but the value is stored as read. Whether the
/// count is musically sensible is not this crate's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    /// Flats below zero, sharps above
    pub accidentals: i8,
    /// True for a minor key, false for major
    pub minor: bool,
}

impl KeySignature {
    pub(crate) const LEN: usize = 2;

    /// Construct a key from an accidental count and mode.
    pub const fn new(accidentals: i8, minor: bool) -> Self {
        Self { accidentals, minor }
    }

    /// Interpret a payload as accidental count and mode.
    ///
    /// Any nonzero mode byte reads as minor; re-encoding always emits 0 or 1.
    pub const fn parse(data: &[u8]) -> Result<Self, MetaError> {
        if data.len() != Self::LEN {
            return Err(MetaError::PayloadLength {
                kind: MetaType::KeySignature,
                expected: Self::LEN,
                found: data.len(),
            });
        }
        Ok(Self {
            accidentals: data[0] as i8,
            minor: data[1] != 0,
        })
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.put(&[Self::LEN as u8, self.accidentals as u8, self.minor as u8])
    }
}

#[test]
fn parses_flats_and_mode() {
    use pretty_assertions::assert_eq;
    // three flats, minor: C minor
    let key = KeySignature::parse(&[0xFD, 0x01]).unwrap();
    assert_eq!(key.accidentals, -3);
    assert!(key.minor);

    // no accidentals, major: C major
    let key = KeySignature::parse(&[0x00, 0x00]).unwrap();
    assert_eq!(key.accidentals, 0);
    assert!(!key.minor);
}

#[test]
fn rejects_other_widths() {
    assert!(matches!(
        KeySignature::parse(&[0x02]),
        Err(MetaError::PayloadLength {
            kind: MetaType::KeySignature,
            expected: 2,
            found: 1,
        })
    ));
}
