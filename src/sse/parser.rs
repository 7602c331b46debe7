//! SSE line parsing and record accumulation.
//!
//! [`SseParser`] holds the per-stream accumulator (current event type plus
//! pending data lines). Each stream owns its own parser; nothing is shared.

use crate::sse::events::{SseLine, SseRecord};

/// Parse a single SSE line (already stripped of its line terminator).
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(comment) = line.strip_prefix(':') {
        return SseLine::Comment(comment.to_string());
    }

    match line.split_once(':') {
        Some((name, value)) => SseLine::Field {
            name: name.to_string(),
            // Exactly one leading space is part of the framing
            value: value.strip_prefix(' ').unwrap_or(value).to_string(),
        },
        None => SseLine::Field {
            name: line.to_string(),
            value: String::new(),
        },
    }
}

/// Stateful SSE parser that accumulates lines and emits complete records.
#[derive(Debug, Default)]
pub struct SseParser {
    /// Current event type being accumulated
    event_type: String,
    /// Accumulated data lines, in arrival order
    data_lines: Vec<String>,
}

impl SseParser {
    /// Create a new SSE parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line to the parser.
    ///
    /// Returns a record when the line is a blank boundary and the accumulated
    /// data is non-empty.
    pub fn feed_line(&mut self, line: &str) -> Option<SseRecord> {
        match parse_sse_line(line) {
            SseLine::Empty => self.dispatch(),
            SseLine::Comment(_) => None,
            SseLine::Field { name, value } => {
                match name.as_str() {
                    "event" => self.event_type = value,
                    "data" => self.data_lines.push(value),
                    // id, retry and anything unknown
                    _ => {}
                }
                None
            }
        }
    }

    /// Flush at end of stream. Streams are not required to end with a blank
    /// line, so a pending record is dispatched here.
    pub fn finish(&mut self) -> Option<SseRecord> {
        self.dispatch()
    }

    /// Whether any field content is waiting for a boundary.
    pub fn has_pending(&self) -> bool {
        !self.event_type.is_empty() || !self.data_lines.is_empty()
    }

    fn dispatch(&mut self) -> Option<SseRecord> {
        if !self.has_pending() {
            return None;
        }

        let event = std::mem::take(&mut self.event_type);
        let mut data = std::mem::take(&mut self.data_lines).join("\n");
        if data.ends_with('\n') {
            data.pop();
        }

        if data.is_empty() {
            return None;
        }
        Some(SseRecord { event, data })
    }
}
