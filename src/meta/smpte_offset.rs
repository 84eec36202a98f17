#![doc = r#"
SMPTE offset: the absolute time a track starts at, `FF 54 05 hr mn se fr ff`.

When a file is synchronized against film or video, this event pins the track
to a time-code position instead of letting it start at zero. It belongs at
the beginning of the track, before any nonzero delta-times. The `ff` field
counts fractional frames in 100ths of a frame, regardless of the file's own
frame subdivision.
"#]

use crate::{
    error::{MetaError, SmpteError},
    meta::MetaType,
    sink::MidiSink,
};

/// A track's starting position in SMPTE time code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// The frame rate the position is counted in.
    ///
    /// Should match the file's frame rate when the file uses SMPTE timing;
    /// a mismatch desynchronizes playback.
    pub fps: SmpteFps,
    /// Hour component, 0-23.
    pub hour: u8,
    /// Minute component, 0-59.
    pub minute: u8,
    /// Second component, 0-59.
    pub second: u8,
    /// Frame within the current second; the valid range depends on `fps`.
    pub frame: u8,
    /// Fractional frames in 100ths of a frame, 0-99.
    pub subframe: u8,
}

impl SmpteOffset {
    pub(crate) const LEN: usize = 5;

    /// The offset in microseconds from time zero.
    pub const fn as_micros(&self) -> f64 {
        ((((self.hour as u64 * 3600) + (self.minute as u64) * 60 + self.second as u64) * 1_000_000)
            as f64)
            + ((self.frame as u64) * 1_000_000) as f64 / self.fps.as_f64()
            + ((self.subframe as u32) * 10_000) as f64 / self.fps.as_f64()
    }

    /// Interpret a 5-byte payload as an SMPTE position.
    ///
    /// The first byte packs the frame rate type into bits 5-6 (`0rrhhhhh`)
    /// and the hour into the low five bits; the remaining bytes are minutes,
    /// seconds, frames and fractional frames in order. Each field is range
    /// checked and reported through [`SmpteError`].
    pub const fn parse(data: &[u8]) -> Result<Self, MetaError> {
        if data.len() != Self::LEN {
            return Err(MetaError::PayloadLength {
                kind: MetaType::SmpteOffset,
                expected: Self::LEN,
                found: data.len(),
            });
        }

        // 0 rr hhhhh
        let fps = match data[0] >> 5 {
            0 => SmpteFps::TwentyFour,
            1 => SmpteFps::TwentyFive,
            2 => SmpteFps::TwentyNine,
            3 => SmpteFps::Thirty,
            v => return Err(MetaError::Smpte(SmpteError::TrackFrame(v))),
        };
        let hour = data[0] & 0b0001_1111;
        if hour > 23 {
            return Err(MetaError::Smpte(SmpteError::HourOffset(hour)));
        }
        let minute = data[1];
        if minute > 59 {
            return Err(MetaError::Smpte(SmpteError::MinuteOffset(minute)));
        }
        let second = data[2];
        if second > 59 {
            return Err(MetaError::Smpte(SmpteError::SecondOffset(second)));
        }

        let frame = data[3];
        // always 1/100 of frame
        let subframe = data[4];
        if subframe > 99 {
            return Err(MetaError::Smpte(SmpteError::Subframe(subframe)));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }

    pub(crate) fn write_payload<S: MidiSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.put(&[
            Self::LEN as u8,
            (self.fps.type_bits() << 5) | (self.hour & 0b0001_1111),
            self.minute,
            self.second,
            self.frame,
            self.subframe,
        ])
    }
}

/// The four frame rates the midi spec defines.
///
/// `TwentyNine` is NTSC drop-frame: 30000/1001 fps, written as 29.97. No
/// frames are dropped; the time-code numbering skips values to stay aligned
/// with real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second, standard film rate
    TwentyFour,
    /// 25 frames per second, PAL/SECAM television
    TwentyFive,
    /// 29.97 frames per second, NTSC color drop-frame
    TwentyNine,
    /// 30 frames per second, NTSC black and white
    Thirty,
}

impl SmpteFps {
    /// The precise frame rate, fractional for drop-frame.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }

    /// The `rr` bits of the offset's first payload byte.
    pub(crate) const fn type_bits(&self) -> u8 {
        match self {
            Self::TwentyFour => 0,
            Self::TwentyFive => 1,
            Self::TwentyNine => 2,
            Self::Thirty => 3,
        }
    }
}

/// NTSC drop-frame rate, 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;

#[test]
fn parse_smpte_offset() {
    use pretty_assertions::assert_eq;
    // these are the bytes after 00 FF 54 05,
    // where 54 is smpte offset, and 05 is length five.
    let bytes = [0x41, 0x17, 0x2D, 0x0C, 0x22];
    let offset = SmpteOffset::parse(&bytes).unwrap();

    assert_eq!(offset.fps, SmpteFps::TwentyNine);
    assert_eq!(offset.hour, 1);
    assert_eq!(offset.minute, 23);
    assert_eq!(offset.second, 45);
    assert_eq!(offset.frame, 12);
    assert_eq!(offset.subframe, 34);
}

#[test]
fn parse_invalid_smpte_offset() {
    use pretty_assertions::assert_eq;
    let bytes = [0x7F, 0x17, 0x2D, 0x0C, 0x22];
    let err = SmpteOffset::parse(&bytes).unwrap_err();
    assert_eq!(err, MetaError::Smpte(SmpteError::HourOffset(31)));

    let bytes = [0x41, 0x50, 0x2D, 0x0C, 0x22];
    let err = SmpteOffset::parse(&bytes).unwrap_err();
    assert_eq!(err, MetaError::Smpte(SmpteError::MinuteOffset(80)));
}

#[test]
fn offset_in_micros() {
    use pretty_assertions::assert_eq;
    // one second and five frames at 25 fps
    let offset = SmpteOffset::parse(&[0x20, 0x00, 0x01, 0x05, 0x00]).unwrap();
    assert_eq!(offset.as_micros(), 1_200_000.0);
}

#[test]
fn payload_reproduces_parsed_bytes() {
    use pretty_assertions::assert_eq;
    let bytes = [0x41, 0x17, 0x2D, 0x0C, 0x22];
    let offset = SmpteOffset::parse(&bytes).unwrap();

    let mut out = alloc::vec::Vec::new();
    offset.write_payload(&mut out).unwrap();
    assert_eq!(out[0] as usize, bytes.len());
    assert_eq!(&out[1..], &bytes);
}
