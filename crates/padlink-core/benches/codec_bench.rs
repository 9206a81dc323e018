//! Criterion benchmarks for the snapshot codec.
//!
//! The codec sits on the per-input-frame hot path (10–20 snapshots/sec per
//! producer, one encode per send), so encode and decode should stay deep in
//! the nanosecond range.
//!
//! Run with:
//! ```bash
//! cargo bench --package padlink-core --bench codec_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use padlink_core::{buttons, decode_snapshot, encode_snapshot, PadSnapshot};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn make_neutral() -> PadSnapshot {
    PadSnapshot::neutral()
}

fn make_busy() -> PadSnapshot {
    PadSnapshot {
        buttons_pressed: buttons::FACE_A | buttons::DPAD_UP | buttons::SHOULDER_LEFT,
        buttons_released: buttons::FACE_B,
        left_stick_x: -0.42,
        left_stick_y: 0.87,
        right_stick_x: 0.13,
        right_stick_y: -0.99,
        left_trigger: 0.5,
        right_trigger: 1.0,
    }
}

// ── Benchmark groups ──────────────────────────────────────────────────────────

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_snapshot");
    group.bench_function("neutral", |b| {
        let s = make_neutral();
        b.iter(|| encode_snapshot(black_box(&s)))
    });
    group.bench_function("busy", |b| {
        let s = make_busy();
        b.iter(|| encode_snapshot(black_box(&s)))
    });
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_snapshot");
    let bytes = encode_snapshot(&make_busy());
    group.bench_function("busy", |b| {
        b.iter(|| decode_snapshot(black_box(&bytes), black_box(0)).expect("decode must succeed"))
    });
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let s = make_busy();
    c.bench_function("encode_decode_roundtrip", |b| {
        b.iter(|| {
            let bytes = encode_snapshot(black_box(&s));
            decode_snapshot(black_box(&bytes), 0).unwrap()
        })
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
