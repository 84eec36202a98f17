#![doc = r#"
Decoder and encoder for Standard MIDI File meta events.

Meta events are the `0xFF`-framed records inside a track chunk that carry
everything which is not a note: tempo, time and key signatures, text, track
names, the end-of-track marker. This crate reads them off a byte stream into
typed values, and writes typed values back byte-exactly — including tags it
has never heard of and length fields that were not minimally encoded.

The outer file and track chunk layers, and channel voice messages, are a
caller's concern: readers hand this crate a cursor positioned just past the
`0xFF` marker, and get back one [`MetaMessage`](meta::MetaMessage).

```
use midimeta::prelude::*;

// FF 58 04 06 03 24 08, with the marker already consumed
let bytes = [0x58, 0x04, 0x06, 0x03, 0x24, 0x08];
let mut reader = Reader::from_byte_slice(&bytes);

let MetaMessage::TimeSignature(signature) = MetaMessage::read(&mut reader)? else {
    unreachable!()
};
assert_eq!(signature.numerator, 6);
assert_eq!(signature.denominator(), 8);
# Ok::<(), midimeta::reader::ReaderError>(())
```
"#]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod error;
pub mod event;
pub mod meta;
pub mod prelude;
pub mod reader;
pub mod sink;
pub mod varlen;

pub use error::{MetaError, ParseError, SmpteError, VarLenError};
