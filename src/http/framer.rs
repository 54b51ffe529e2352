use bytes::{Bytes, BytesMut};

/// Largest number of bytes buffered while waiting for the header block.
pub const MAX_REQUEST_BYTES: usize = 4096;

/// Marks the end of the header block.
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Outcome of feeding one chunk to a [`Framer`].
#[derive(Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// No terminator yet, keep reading
    Pending,
    /// Terminator seen; holds everything buffered so far
    Ready(Bytes),
    /// Buffer grew past [`MAX_REQUEST_BYTES`]; drop the connection silently
    Overflow,
}

/// Per-connection accumulator that decides when a request can be parsed.
///
/// The terminator search runs over the whole buffer as a plain substring
/// match, so a header value containing `\r\n\r\n` ends the block early.
#[derive(Debug)]
pub struct Framer {
    buffer: BytesMut,
}

impl Framer {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(MAX_REQUEST_BYTES),
        }
    }

    /// Appends a chunk and reports whether the request is complete.
    ///
    /// The size check runs before the terminator search: a chunk that both
    /// completes the headers and pushes the buffer over the limit overflows.
    pub fn push(&mut self, chunk: &[u8]) -> FrameStatus {
        self.buffer.extend_from_slice(chunk);

        if self.buffer.len() > MAX_REQUEST_BYTES {
            self.buffer.clear();
            return FrameStatus::Overflow;
        }

        if find_headers_end(&self.buffer).is_some() {
            return FrameStatus::Ready(self.buffer.split().freeze());
        }

        FrameStatus::Pending
    }

    /// Bytes accumulated so far and not yet handed over.
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes currently buffered.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for Framer {
    fn default() -> Self {
        Self::new()
    }
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
}
