use crate::{
    error::MetaError,
    meta::MetaType,
    sink::MidiSink,
};

/// The notated time signature, `FF 58 04 nn dd cc bb`.
///
/// The denominator is stored as a negative power of two: 2 means a quarter
/// note, 3 an eighth note. `cc` counts midi clocks per metronome click and
/// `bb` the notated 32nd notes per midi quarter note (24 clocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    /// Beats per bar as notated
    pub numerator: u8,
    /// Denominator as a power of two
    pub denominator_exponent: u8,
    /// Midi clocks per metronome click
    pub clocks_per_click: u8,
    /// Notated 32nd notes per midi quarter note
    pub thirty_seconds_per_quarter: u8,
}

impl TimeSignature {
    pub(crate) const LEN: usize = 4;

    /// Common time: 4/4, a click every 24 clocks, 8 32nds per quarter.
    pub const DEFAULT: Self = Self {
        numerator: 4,
        denominator_exponent: 2,
        clocks_per_click: 24,
        thirty_seconds_per_quarter: 8,
    };

    /// Construct a signature from its four raw fields.
    pub const fn new(
        numerator: u8,
        denominator_exponent: u8,
        clocks_per_click: u8,
        thirty_seconds_per_quarter: u8,
    ) -> Self {
        Self {
            numerator,
            denominator_exponent,
            clocks_per_click,
            thirty_seconds_per_quarter,
        }
    }

    /// The denominator as notated: `2 ^ denominator_exponent`.
    pub fn denominator(&self) -> u32 {
        2u32.saturating_pow(self.denominator_exponent.into())
    }

    /// Interpret a payload as the four signature fields.
    pub const fn parse(data: &[u8]) -> Result<Self, MetaError> {
        if data.len() != Self::LEN {
            return Err(MetaError::PayloadLength {
                kind: MetaType::TimeSignature,
                expected: Self::LEN,
                found: data.len(),
            });
        }
        Ok(Self {
            numerator: data[0],
            denominator_exponent: data[1],
            clocks_per_click: data[2],
            thirty_seconds_per_quarter: data[3],
        })
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.put(&[
            Self::LEN as u8,
            self.numerator,
            self.denominator_exponent,
            self.clocks_per_click,
            self.thirty_seconds_per_quarter,
        ])
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn parses_common_time() {
    use pretty_assertions::assert_eq;
    let signature = TimeSignature::parse(&[0x04, 0x02, 0x18, 0x08]).unwrap();
    assert_eq!(signature.numerator, 4);
    assert_eq!(signature.denominator(), 4);
    assert_eq!(signature.clocks_per_click, 24);
    assert_eq!(signature.thirty_seconds_per_quarter, 8);
    assert_eq!(signature, TimeSignature::DEFAULT);
}

#[test]
fn six_eight_with_dotted_quarter_click() {
    use pretty_assertions::assert_eq;
    // FF 58 04 06 03 24 08 from the smf spec text
    let signature = TimeSignature::parse(&[0x06, 0x03, 0x24, 0x08]).unwrap();
    assert_eq!(signature.numerator, 6);
    assert_eq!(signature.denominator(), 8);
    assert_eq!(signature.clocks_per_click, 36);
}

#[test]
fn rejects_other_widths() {
    assert!(matches!(
        TimeSignature::parse(&[0x04, 0x02, 0x18]),
        Err(MetaError::PayloadLength {
            kind: MetaType::TimeSignature,
            expected: 4,
            found: 3,
        })
    ));
}
