//! Turn a response byte stream into a stream of SSE records.

use bytes::Bytes;
use futures_util::stream::{self, Stream, StreamExt};

use crate::sse::events::SseRecord;
use crate::sse::lines::LineBuffer;
use crate::sse::parser::SseParser;
use crate::traits::HttpError;

struct RecordState<S> {
    bytes: S,
    lines: LineBuffer,
    parser: SseParser,
    /// Set once the byte stream has ended or failed
    finished: bool,
}

/// Parse a live byte stream into SSE records.
///
/// Records are yielded in arrival order. A clean end of the byte stream ends
/// the record stream (after flushing any unterminated record); a read error is
/// yielded once as `Err` and then the record stream ends.
pub fn sse_records<S>(bytes: S) -> impl Stream<Item = Result<SseRecord, HttpError>> + Send
where
    S: Stream<Item = Result<Bytes, HttpError>> + Send + Unpin,
{
    let state = RecordState {
        bytes,
        lines: LineBuffer::new(),
        parser: SseParser::new(),
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if state.finished {
                return None;
            }

            // First, drain any complete lines already buffered
            while let Some(line) = state.lines.next_line() {
                if let Some(record) = state.parser.feed_line(&line) {
                    return Some((Ok(record), state));
                }
            }

            // Need more data from the stream
            match state.bytes.next().await {
                Some(Ok(chunk)) => state.lines.push(&chunk),
                Some(Err(e)) => {
                    state.finished = true;
                    return Some((Err(e), state));
                }
                None => {
                    state.finished = true;
                    let mut record = state
                        .lines
                        .take_remainder()
                        .and_then(|line| state.parser.feed_line(&line));
                    if record.is_none() {
                        record = state.parser.finish();
                    }
                    return record.map(|record| (Ok(record), state));
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(parts: &[&str]) -> impl Stream<Item = Result<Bytes, HttpError>> + Send + Unpin {
        let owned: Vec<Result<Bytes, HttpError>> = parts
            .iter()
            .map(|p| Ok(Bytes::from(p.to_string())))
            .collect();
        stream::iter(owned)
    }

    async fn collect(parts: &[&str]) -> Vec<SseRecord> {
        sse_records(chunks(parts))
            .map(|r| r.unwrap())
            .collect()
            .await
    }

    #[tokio::test]
    async fn test_records_from_single_chunk() {
        let records = collect(&["event: init\ndata: a\n\nevent: done\ndata: b\n\n"]).await;
        assert_eq!(
            records,
            vec![SseRecord::new("init", "a"), SseRecord::new("done", "b")]
        );
    }

    #[tokio::test]
    async fn test_records_split_across_chunks() {
        let records = collect(&["eve", "nt: do", "ne\nda", "ta: b\n", "\n"]).await;
        assert_eq!(records, vec![SseRecord::new("done", "b")]);
    }

    #[tokio::test]
    async fn test_unterminated_record_flushed_at_eof() {
        let records = collect(&["event: done\ndata: last"]).await;
        assert_eq!(records, vec![SseRecord::new("done", "last")]);

        let records = collect(&["event: done\ndata: last\n"]).await;
        assert_eq!(records, vec![SseRecord::new("done", "last")]);
    }

    #[tokio::test]
    async fn test_empty_stream_yields_nothing() {
        assert!(collect(&[]).await.is_empty());
        assert!(collect(&[": keepalive\n\n"]).await.is_empty());
    }

    #[tokio::test]
    async fn test_read_error_ends_stream() {
        let parts: Vec<Result<Bytes, HttpError>> = vec![
            Ok(Bytes::from("event: init\ndata: a\n\n")),
            Err(HttpError::Body("connection reset".into())),
            Ok(Bytes::from("event: done\ndata: b\n\n")),
        ];
        let results: Vec<_> = sse_records(stream::iter(parts)).collect().await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap(), &SseRecord::new("init", "a"));
        assert!(matches!(results[1], Err(HttpError::Body(_))));
    }
}
