use midimeta::prelude::*;
use pretty_assertions::assert_eq;

/// Reads one meta event from bytes positioned just after the 0xFF marker,
/// checking the whole record was consumed.
fn read_one(bytes: &[u8]) -> MetaMessage {
    let mut reader = Reader::from_byte_slice(bytes);
    let message = MetaMessage::read(&mut reader).unwrap();
    assert_eq!(reader.buffer_position(), bytes.len());
    message
}

#[test]
fn dispatches_sequence_number() {
    let message = read_one(&[0x00, 0x02, 0x00, 0x03]);
    assert_eq!(
        message,
        MetaMessage::SequenceNumber(SequenceNumber::new(3))
    );
    let MetaMessage::SequenceNumber(number) = message else {
        unreachable!()
    };
    assert_eq!(number.number(), 3);
}

#[test]
fn raw_records_expose_their_parts() {
    let bytes = [0x06, 0x04, 0x43, 0x6F, 0x64, 0x61];
    let mut reader = Reader::from_byte_slice(&bytes);
    let raw = RawMetaEvent::read(&mut reader).unwrap();

    assert_eq!(raw.tag(), 0x06);
    assert_eq!(raw.length().value(), 4);
    assert_eq!(raw.payload(), b"Coda");
    assert_eq!(reader.remaining(), 0);

    // a hand-built record dispatches the same as one off the wire
    let built = RawMetaEvent::new(0x06, b"Coda".to_vec());
    assert_eq!(
        MetaMessage::from_raw(built).unwrap(),
        MetaMessage::Marker(MetaText::from("Coda"))
    );
}

#[test]
fn dispatches_each_text_kind() {
    let kinds = [
        (0x01, MetaMessage::Text(MetaText::from("Andante"))),
        (0x02, MetaMessage::Copyright(MetaText::from("Andante"))),
        (0x03, MetaMessage::TrackName(MetaText::from("Andante"))),
        (0x04, MetaMessage::InstrumentName(MetaText::from("Andante"))),
        (0x05, MetaMessage::Lyric(MetaText::from("Andante"))),
        (0x06, MetaMessage::Marker(MetaText::from("Andante"))),
        (0x07, MetaMessage::CuePoint(MetaText::from("Andante"))),
    ];
    for (tag, expected) in kinds {
        let mut bytes = vec![tag, 0x07];
        bytes.extend_from_slice(b"Andante");
        assert_eq!(read_one(&bytes), expected);
    }
}

#[test]
fn dispatches_channel_prefix() {
    let message = read_one(&[0x20, 0x01, 0x09]);
    assert_eq!(message, MetaMessage::ChannelPrefix(ChannelPrefix::new(9)));
    let MetaMessage::ChannelPrefix(prefix) = message else {
        unreachable!()
    };
    assert_eq!(prefix.channel(), 9);
}

#[test]
fn dispatches_end_of_track() {
    assert_eq!(read_one(&[0x2F, 0x00]), MetaMessage::EndOfTrack);
}

#[test]
fn dispatches_tempo() {
    let message = read_one(&[0x51, 0x03, 0x07, 0xA1, 0x20]);
    let MetaMessage::Tempo(tempo) = message else {
        panic!("expected a tempo event");
    };
    assert_eq!(tempo.micros_per_quarter_note(), 500_000);
    assert_eq!(tempo.bpm(), 120.0);
}

#[test]
fn dispatches_smpte_offset() {
    let message = read_one(&[0x54, 0x05, 0x41, 0x17, 0x2D, 0x0C, 0x22]);
    let MetaMessage::SmpteOffset(offset) = message else {
        panic!("expected an smpte offset");
    };
    assert_eq!(offset.fps, SmpteFps::TwentyNine);
    assert_eq!(offset.hour, 1);
    assert_eq!(offset.minute, 23);
    assert_eq!(offset.second, 45);
    assert_eq!(offset.frame, 12);
    assert_eq!(offset.subframe, 34);
}

#[test]
fn dispatches_time_signature() {
    let message = read_one(&[0x58, 0x04, 0x04, 0x02, 0x18, 0x08]);
    let MetaMessage::TimeSignature(signature) = message else {
        panic!("expected a time signature");
    };
    assert_eq!(signature.numerator, 4);
    assert_eq!(signature.denominator(), 4);
    assert_eq!(signature.clocks_per_click, 24);
    assert_eq!(signature.thirty_seconds_per_quarter, 8);
}

#[test]
fn dispatches_key_signature() {
    let message = read_one(&[0x59, 0x02, 0xFD, 0x01]);
    assert_eq!(
        message,
        MetaMessage::KeySignature(KeySignature::new(-3, true))
    );
}

#[test]
fn dispatches_sequencer_specific() {
    let message = read_one(&[0x7F, 0x03, 0x00, 0x41, 0x10]);
    assert_eq!(
        message,
        MetaMessage::SequencerSpecific(SequencerSpecific::new(vec![0x00, 0x41, 0x10]))
    );
}

#[test]
fn unrecognized_tags_become_unknown_events() {
    // 0x08 and 0x09 (program/device name) are outside the recognized set,
    // as is anything vendors invent.
    for tag in [0x08, 0x09, 0x0A, 0x21, 0x60, 0x7E] {
        let message = read_one(&[tag, 0x02, 0xAA, 0xBB]);
        let MetaMessage::Unknown(unknown) = &message else {
            panic!("tag {tag:#04X} should have dispatched to the fallback");
        };
        assert_eq!(unknown.tag(), tag);
        assert_eq!(unknown.data(), &[0xAA, 0xBB]);
        assert_eq!(message.tag(), tag);
        assert_eq!(message.meta_type(), None);
    }
}

#[test]
fn every_variant_round_trips() {
    let messages = [
        MetaMessage::SequenceNumber(SequenceNumber::new(42)),
        MetaMessage::Text(MetaText::from("some text")),
        MetaMessage::Copyright(MetaText::from("(C) 2002")),
        MetaMessage::TrackName(MetaText::from("Strings")),
        MetaMessage::InstrumentName(MetaText::from("Violin I")),
        MetaMessage::Lyric(MetaText::from("la")),
        MetaMessage::Marker(MetaText::from("First Verse")),
        MetaMessage::CuePoint(MetaText::from("curtain opens")),
        MetaMessage::ChannelPrefix(ChannelPrefix::new(4)),
        MetaMessage::EndOfTrack,
        MetaMessage::Tempo(Tempo::new(750_000)),
        MetaMessage::SmpteOffset(
            SmpteOffset::parse(&[0x41, 0x17, 0x2D, 0x0C, 0x22]).unwrap(),
        ),
        MetaMessage::TimeSignature(TimeSignature::new(6, 3, 36, 8)),
        MetaMessage::KeySignature(KeySignature::new(2, false)),
        MetaMessage::SequencerSpecific(SequencerSpecific::new(vec![0x43, 0x01])),
        MetaMessage::Unknown(UnknownMeta::new(0x66, vec![0x01, 0x02, 0x03])),
    ];

    for message in messages {
        let mut bytes = Vec::new();
        message.write(&mut bytes).unwrap();
        assert_eq!(bytes[0], META_MARKER);
        assert_eq!(bytes[1], message.tag());
        if let Some(kind) = message.meta_type() {
            assert_eq!(u8::from(kind), message.tag());
        }

        let mut reader = Reader::from_byte_slice(&bytes[1..]);
        let decoded = MetaMessage::read(&mut reader).unwrap();
        assert_eq!(decoded, message);
        assert_eq!(reader.buffer_position(), bytes.len() - 1);
    }
}

#[test]
fn non_minimal_length_encodings_round_trip_byte_exactly() {
    // length 3 padded to two bytes: 0x80 0x03
    let body = [0x06, 0x80, 0x03, 0x6F, 0x75, 0x74];
    let message = read_one(&body);
    let MetaMessage::Marker(marker) = &message else {
        panic!("expected a marker");
    };
    assert_eq!(marker.text(), "out");

    let mut bytes = Vec::new();
    message.write(&mut bytes).unwrap();
    assert_eq!(bytes[0], META_MARKER);
    assert_eq!(&bytes[1..], &body);

    // same through the generic fallback
    let body = [0x45, 0x80, 0x02, 0xDE, 0xAD];
    let message = read_one(&body);
    let mut bytes = Vec::new();
    message.write(&mut bytes).unwrap();
    assert_eq!(&bytes[1..], &body);
}

#[test]
fn two_byte_lengths_round_trip() {
    let payload = vec![0x61; 200];
    let message = MetaMessage::Text(MetaText::new(payload.clone()));

    let mut bytes = Vec::new();
    message.write(&mut bytes).unwrap();
    // 200 needs a continuation byte: 0x81 0x48
    assert_eq!(&bytes[..4], &[0xFF, 0x01, 0x81, 0x48]);
    assert_eq!(&bytes[4..], &payload);

    let mut reader = Reader::from_byte_slice(&bytes[1..]);
    assert_eq!(MetaMessage::read(&mut reader).unwrap(), message);
}

#[test]
fn track_event_prepends_delta_time() {
    let event = TrackEvent::new(480, 96, MetaMessage::Tempo(Tempo::new(500_000)));
    assert_eq!(event.tick(), 480);
    assert_eq!(event.delta().value(), 96);

    let mut bytes = Vec::new();
    event.write(&mut bytes).unwrap();
    assert_eq!(bytes, vec![0x60, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20]);
}

#[test]
fn track_event_reads_after_consumed_marker() {
    // delta and 0xFF already handled by the track parser
    let body = [0x03, 0x05, 0x50, 0x69, 0x61, 0x6E, 0x6F];
    let mut reader = Reader::from_byte_slice(&body);
    let event = TrackEvent::read_meta(960, 0u32, &mut reader).unwrap();

    assert_eq!(event.tick(), 960);
    assert_eq!(
        event.event(),
        &MetaMessage::TrackName(MetaText::from("Piano"))
    );
    assert_eq!(
        event.into_event(),
        MetaMessage::TrackName(MetaText::from("Piano"))
    );
}

#[test]
fn io_sink_matches_vec_sink() {
    let message = MetaMessage::TrackName(MetaText::from("Lead"));

    let mut vec_out = Vec::new();
    message.write(&mut vec_out).unwrap();

    let mut io_out = IoSink(Vec::new());
    message.write(&mut io_out).unwrap();

    assert_eq!(io_out.into_inner(), vec_out);
}
