//! SSE line and record types.

/// Classification of a single SSE line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// Blank line - terminates the current record
    Empty,
    /// Comment or keep-alive (starts with ':')
    Comment(String),
    /// `field: value` line; a line without a colon has an empty value
    Field { name: String, value: String },
}

/// One dispatched SSE record.
///
/// `data` is the record's data lines joined with `\n`, with a single trailing
/// newline removed. Records with empty data are never dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseRecord {
    /// Value of the last `event:` field, empty when none was sent
    pub event: String,
    pub data: String,
}

impl SseRecord {
    pub fn new(event: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            data: data.into(),
        }
    }

    pub fn is_event(&self, name: &str) -> bool {
        self.event == name
    }
}
