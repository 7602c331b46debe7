//! Byte-chunk to line reassembly.
//!
//! Network chunks split lines (and multi-byte UTF-8 sequences) at arbitrary
//! positions, so bytes are buffered until a `\n` arrives and only then decoded.

/// Buffers raw bytes and yields complete lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: Vec<u8>,
    /// Start of the first unconsumed line
    start: usize,
    /// Bytes before this offset are known to contain no `\n`
    scanned: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk read from the stream.
    ///
    /// Consumed lines are compacted away here, once per chunk.
    pub fn push(&mut self, chunk: &[u8]) {
        if self.start > 0 {
            self.buffer.drain(..self.start);
            self.scanned -= self.start;
            self.start = 0;
        }
        self.buffer.extend_from_slice(chunk);
    }

    /// Next complete line, without its `\n` and trailing `\r`.
    pub fn next_line(&mut self) -> Option<String> {
        let from = self.scanned.max(self.start);
        match self.buffer[from..].iter().position(|&b| b == b'\n') {
            Some(offset) => {
                let end = from + offset;
                let line = decode_line(&self.buffer[self.start..end]);
                self.start = end + 1;
                self.scanned = self.start;
                Some(line)
            }
            None => {
                self.scanned = self.buffer.len();
                None
            }
        }
    }

    /// Take whatever is left after the stream ended without a final `\n`.
    pub fn take_remainder(&mut self) -> Option<String> {
        let rest = if self.is_empty() {
            None
        } else {
            Some(decode_line(&self.buffer[self.start..]))
        };
        self.buffer.clear();
        self.start = 0;
        self.scanned = 0;
        rest
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.buffer.len()
    }
}

fn decode_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches('\r')
        .to_string()
}
