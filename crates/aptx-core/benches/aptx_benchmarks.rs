use aptx_core::codecs::aptx::{AptxCodec, SyncDecoder};
use aptx_core::types::CodecType;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

// --- Common benchmark configuration ---
const SAMPLE_RATE: f64 = 48000.0;
/// One second of stereo audio
const FRAMES: usize = 48000;
const BENCH_MEASUREMENT_TIME: Duration = Duration::from_secs(10);
const PROFILES: [CodecType; 2] = [CodecType::Aptx, CodecType::AptxHd];

/// Interleaved two-tone test signal at 24 bits
fn test_signal() -> Vec<i32> {
    (0..FRAMES)
        .flat_map(|i| {
            let t = i as f64 / SAMPLE_RATE;
            let scale = f64::from(1 << 22);
            [
                (scale * (2.0 * std::f64::consts::PI * 1000.0 * t).sin()) as i32,
                (scale * (2.0 * std::f64::consts::PI * 440.0 * t).sin()) as i32,
            ]
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let samples = test_signal();
    let mut group = c.benchmark_group("encode");
    group.measurement_time(BENCH_MEASUREMENT_TIME);
    group.throughput(Throughput::Elements(FRAMES as u64));

    for codec_type in PROFILES {
        group.bench_with_input(BenchmarkId::from_parameter(codec_type), &samples, |b, samples| {
            let mut codec = AptxCodec::new_with_type(codec_type);
            b.iter(|| black_box(codec.encode_frame(black_box(samples)).unwrap()));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let samples = test_signal();
    let mut group = c.benchmark_group("decode");
    group.measurement_time(BENCH_MEASUREMENT_TIME);
    group.throughput(Throughput::Elements(FRAMES as u64));

    for codec_type in PROFILES {
        let encoded = AptxCodec::new_with_type(codec_type).encode_frame(&samples).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(codec_type), &encoded, |b, encoded| {
            b.iter(|| {
                // A fresh decoder keeps the parity cycle aligned with the stream
                let mut codec = AptxCodec::new_with_type(codec_type);
                black_box(codec.decode_frame(black_box(encoded)).unwrap())
            });
        });
    }
    group.finish();
}

fn bench_sync_decode(c: &mut Criterion) {
    let samples = test_signal();
    let mut group = c.benchmark_group("sync_decode");
    group.measurement_time(BENCH_MEASUREMENT_TIME);
    group.throughput(Throughput::Elements(FRAMES as u64));

    for codec_type in PROFILES {
        let encoded = AptxCodec::new_with_type(codec_type).encode_frame(&samples).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(codec_type), &encoded, |b, encoded| {
            let mut output = Vec::with_capacity(samples.len());
            b.iter(|| {
                let mut decoder = SyncDecoder::new(codec_type);
                output.clear();
                // Packet-sized pieces, as read from a socket
                for chunk in encoded.chunks(660) {
                    black_box(decoder.decode(chunk, &mut output).unwrap());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_sync_decode);
criterion_main!(benches);
