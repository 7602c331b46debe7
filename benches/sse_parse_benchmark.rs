//! SSE parsing throughput benchmarks.
//!
//! Run with: cargo bench

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::StreamExt;
use seclai::sse::{sse_records, LineBuffer, SseParser};
use seclai::traits::HttpError;

/// `records` init events followed by one done event.
fn generate_stream(records: usize) -> String {
    let mut body = String::new();
    for i in 0..records {
        body.push_str(": keep-alive\n");
        body.push_str("event: init\n");
        body.push_str(&format!(
            "data: {{\"run_id\":\"run_{}\",\"status\":\"processing\",\n",
            i
        ));
        body.push_str("data: \"output\":\"partial output line that is a bit longer\"}\n\n");
    }
    body.push_str("event: done\ndata: {\"run_id\":\"run_done\",\"status\":\"completed\"}\n\n");
    body
}

/// Split `body` into fixed-size chunks to mimic network reads.
fn chunked(body: &str, chunk_size: usize) -> Vec<Bytes> {
    body.as_bytes()
        .chunks(chunk_size)
        .map(Bytes::copy_from_slice)
        .collect()
}

fn bench_line_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("sse_line_parser");

    for records in [10, 100, 1000].iter() {
        let body = generate_stream(*records);
        group.throughput(Throughput::Bytes(body.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_records", records)),
            &body,
            |b, body| {
                b.iter(|| {
                    let mut lines = LineBuffer::new();
                    let mut parser = SseParser::new();
                    let mut count = 0usize;
                    lines.push(black_box(body.as_bytes()));
                    while let Some(line) = lines.next_line() {
                        if parser.feed_line(&line).is_some() {
                            count += 1;
                        }
                    }
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

fn bench_record_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("sse_record_stream");
    let body = generate_stream(500);
    group.throughput(Throughput::Bytes(body.len() as u64));

    for chunk_size in [16, 256, 4096].iter() {
        let chunks = chunked(&body, *chunk_size);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_byte_chunks", chunk_size)),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let source = futures::stream::iter(
                        chunks.iter().cloned().map(Ok::<Bytes, HttpError>),
                    );
                    let count = futures::executor::block_on(sse_records(source).count());
                    black_box(count)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_line_parser, bench_record_stream);
criterion_main!(benches);
