use crate::{
    error::MetaError,
    meta::MetaType,
    sink::MidiSink,
};

/// Tempo as microseconds per quarter note, `FF 51 03 tttttt`.
///
/// Time per beat rather than beats per time: this keeps long-term
/// synchronization exact against time-based references. 500 000 µs per
/// quarter note is 120 beats per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo(u32);

impl Tempo {
    pub(crate) const LEN: usize = 3;

    /// 120 beats per minute, the tempo a track has until a tempo event says
    /// otherwise.
    pub const DEFAULT: Self = Self(500_000);

    /// Create a tempo from microseconds per quarter note.
    ///
    /// The payload is three bytes wide, so values are truncated to 24 bits.
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        Self(micros_per_quarter_note & 0x00FF_FFFF)
    }

    /// Create a tempo from beats per minute.
    pub fn from_bpm(bpm: f64) -> Self {
        Self::new((60_000_000.0 / bpm) as u32)
    }

    /// Microseconds per quarter note.
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Beats per minute.
    pub fn bpm(&self) -> f64 {
        60_000_000.0 / self.0 as f64
    }

    /// Interpret a payload as a 3-byte big-endian tempo.
    pub const fn parse(data: &[u8]) -> Result<Self, MetaError> {
        if data.len() != Self::LEN {
            return Err(MetaError::PayloadLength {
                kind: MetaType::Tempo,
                expected: Self::LEN,
                found: data.len(),
            });
        }
        Ok(Self(u32::from_be_bytes([0, data[0], data[1], data[2]])))
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        let [_, a, b, c] = self.0.to_be_bytes();
        sink.put(&[Self::LEN as u8, a, b, c])
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn parses_120_bpm() {
    use pretty_assertions::assert_eq;
    let tempo = Tempo::parse(&[0x07, 0xA1, 0x20]).unwrap();
    assert_eq!(tempo.micros_per_quarter_note(), 500_000);
    assert_eq!(tempo.bpm(), 120.0);
}

#[test]
fn bpm_conversions_agree_with_the_default() {
    use pretty_assertions::assert_eq;
    assert_eq!(Tempo::from_bpm(120.0), Tempo::DEFAULT);
    assert_eq!(Tempo::default().micros_per_quarter_note(), 500_000);
}

#[test]
fn rejects_other_widths() {
    use pretty_assertions::assert_eq;
    let cases: [&[u8]; 2] = [&[0x07, 0xA1], &[0x07, 0xA1, 0x20, 0x00]];
    for data in cases {
        let err = Tempo::parse(data).unwrap_err();
        assert_eq!(
            err,
            MetaError::PayloadLength {
                kind: MetaType::Tempo,
                expected: 3,
                found: data.len(),
            }
        );
    }
}
