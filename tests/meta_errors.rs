use midimeta::prelude::*;
use pretty_assertions::assert_eq;

fn read_err(bytes: &[u8]) -> ReaderError {
    let mut reader = Reader::from_byte_slice(bytes);
    MetaMessage::read(&mut reader).unwrap_err()
}

#[test]
fn truncated_payload_is_out_of_bounds() {
    // declares ten bytes, supplies five
    let err = read_err(&[0x01, 0x0A, 0x68, 0x65, 0x6C, 0x6C, 0x6F]);
    assert!(err.is_out_of_bounds());
    // the reader stopped at the start of the unsatisfiable payload read
    assert_eq!(err.position(), 2);
}

#[test]
fn truncated_length_field_is_out_of_bounds() {
    // continuation bit set on the last available byte
    let err = read_err(&[0x51, 0x83]);
    assert!(err.is_out_of_bounds());
}

#[test]
fn empty_source_is_out_of_bounds() {
    assert!(read_err(&[]).is_out_of_bounds());
}

#[test]
fn reader_remembers_the_failing_offset() {
    let bytes = [0x01, 0x0A, 0x68];
    let mut reader = Reader::from_byte_slice(&bytes);
    let err = MetaMessage::read(&mut reader).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(reader.last_error_offset(), err.position());
}

#[test]
fn tempo_rejects_wrong_widths() {
    let err = read_err(&[0x51, 0x02, 0x07, 0xA1]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::PayloadLength {
            kind: MetaType::Tempo,
            expected: 3,
            found: 2,
        }))
    ));
    // the error carries the position past the offending record
    assert_eq!(err.position(), 4);

    let err = read_err(&[0x51, 0x04, 0x00, 0x07, 0xA1, 0x20]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::PayloadLength {
            kind: MetaType::Tempo,
            expected: 3,
            found: 4,
        }))
    ));
}

#[test]
fn end_of_track_rejects_nonzero_lengths() {
    let err = read_err(&[0x2F, 0x01, 0x00]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::PayloadLength {
            kind: MetaType::EndOfTrack,
            expected: 0,
            found: 1,
        }))
    ));
}

#[test]
fn sequence_number_rejects_wrong_widths() {
    let err = read_err(&[0x00, 0x01, 0x05]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::PayloadLength {
            kind: MetaType::SequenceNumber,
            expected: 2,
            found: 1,
        }))
    ));
}

#[test]
fn channel_prefix_rejects_wrong_widths() {
    let err = read_err(&[0x20, 0x02, 0x01, 0x02]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::PayloadLength {
            kind: MetaType::ChannelPrefix,
            expected: 1,
            found: 2,
        }))
    ));
}

#[test]
fn key_signature_rejects_wrong_widths() {
    let err = read_err(&[0x59, 0x03, 0x00, 0x00, 0x00]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::PayloadLength {
            kind: MetaType::KeySignature,
            expected: 2,
            found: 3,
        }))
    ));
}

#[test]
fn smpte_offset_rejects_wrong_widths() {
    let err = read_err(&[0x54, 0x04, 0x41, 0x17, 0x2D, 0x0C]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::PayloadLength {
            kind: MetaType::SmpteOffset,
            expected: 5,
            found: 4,
        }))
    ));
}

#[test]
fn smpte_offset_rejects_out_of_range_fields() {
    // hour 24 with a valid frame rate type
    let err = read_err(&[0x54, 0x05, 0x18, 0x00, 0x00, 0x00, 0x00]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::Smpte(
            SmpteError::HourOffset(24)
        )))
    ));

    // subframe 100
    let err = read_err(&[0x54, 0x05, 0x41, 0x17, 0x2D, 0x0C, 0x64]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::Meta(MetaError::Smpte(
            SmpteError::Subframe(100)
        )))
    ));
}

#[test]
fn oversized_length_field_is_rejected() {
    // five data-carrying bytes push the value past 28 bits
    let err = read_err(&[0x01, 0x87, 0xFF, 0xFF, 0xFF, 0x7F]);
    assert!(matches!(
        err.error_kind(),
        ReaderErrorKind::ParseError(ParseError::VarLen(VarLenError::Overflow))
    ));
}

#[test]
fn unknown_tags_never_fail() {
    for tag in 0u8..=0xFF {
        let recognized = MetaType::try_from(tag).is_ok();
        if recognized {
            continue;
        }
        let bytes = [tag, 0x01, 0x55];
        let mut reader = Reader::from_byte_slice(&bytes);
        let message = MetaMessage::read(&mut reader).unwrap();
        assert!(matches!(message, MetaMessage::Unknown(_)));
    }
}
