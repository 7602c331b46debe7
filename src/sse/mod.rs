//! SSE (Server-Sent Events) stream parser
//!
//! Parses the event stream returned by the streaming agent-run endpoint.
//! SSE format consists of:
//! - `event: <type>` - event type line
//! - `data: <payload>` - data payload line (repeatable, joined with `\n`)
//! - Empty line - signals end of record
//! - Lines starting with `:` - comments / keep-alives (ignored)
//!
//! # Module structure
//! - `events` - Line and record types (SseLine, SseRecord)
//! - `lines` - Byte chunk to line reassembly (LineBuffer)
//! - `parser` - Record accumulation (SseParser, parse_sse_line)
//! - `stream` - Byte stream to record stream adapter (sse_records)

mod events;
mod lines;
mod parser;
mod stream;

// Re-export public types
pub use events::{SseLine, SseRecord};
pub use lines::LineBuffer;
pub use parser::{parse_sse_line, SseParser};
pub use stream::sse_records;
