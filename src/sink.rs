#![doc = r#"
Byte sinks that serialized events are written into.
"#]

use alloc::vec::Vec;

/// A sequential sink of raw bytes.
///
/// Events serialize themselves by pushing byte runs into one of these, in
/// wire order, strictly forward. Nothing in this crate seeks back to patch
/// a previously written byte.
pub trait MidiSink {
    /// The failure type of the underlying destination.
    type Error;

    /// Append `bytes` to the sink.
    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

impl MidiSink for Vec<u8> {
    type Error = core::convert::Infallible;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapter writing into any [`std::io::Write`].
#[cfg(feature = "std")]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W> IoSink<W> {
    /// Unwrap the adapter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> MidiSink for IoSink<W> {
    type Error = std::io::Error;

    fn put(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(bytes)
    }
}
