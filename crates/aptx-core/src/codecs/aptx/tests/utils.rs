//! aptX Test Utilities
//!
//! Signal generators and measurements shared by the codec-level tests.
//! Signals are produced as separate left/right channels and interleaved
//! before they reach the codec.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codecs::aptx::AptxCodec;
use crate::types::CodecType;

/// Largest positive 24-bit sample
pub const MAX_SAMPLE: i32 = (1 << 23) - 1;

/// Smallest negative 24-bit sample
pub const MIN_SAMPLE: i32 = -(1 << 23);

/// Sample rate used by the generators
pub const TEST_SAMPLE_RATE: f64 = 48000.0;

/// Both profiles, for tests that run against each
pub const PROFILES: [CodecType; 2] = [CodecType::Aptx, CodecType::AptxHd];

/// Generate a sine wave as 24-bit samples
///
/// `amplitude` is a fraction of full scale.
pub fn sine(frequency: f64, amplitude: f64, phase: f64, len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| {
            let t = i as f64 / TEST_SAMPLE_RATE;
            (amplitude * f64::from(1 << 23) * (2.0 * std::f64::consts::PI * frequency * t + phase).sin()) as i32
        })
        .collect()
}

/// Deterministic sawtooth-like test pattern `((i * step) mod span) - span / 2`
pub fn modular_ramp(step: i64, span: i64, len: usize) -> Vec<i32> {
    (0..len as i64)
        .map(|i| ((i * step) % span - span / 2) as i32)
        .collect()
}

/// Seeded white noise over the full 24-bit range
pub fn noise(seed: u64, len: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(MIN_SAMPLE..=MAX_SAMPLE)).collect()
}

/// Full-scale square wave with the given half period in samples
pub fn square(half_period: usize, len: usize) -> Vec<i32> {
    (0..len)
        .map(|i| if (i / half_period) % 2 == 1 { MAX_SAMPLE } else { MIN_SAMPLE })
        .collect()
}

/// Interleave left and right channels
pub fn interleave(left: &[i32], right: &[i32]) -> Vec<i32> {
    assert_eq!(left.len(), right.len(), "channel lengths differ");
    left.iter().zip(right).flat_map(|(&l, &r)| [l, r]).collect()
}

/// Split interleaved samples into left and right channels
pub fn deinterleave(samples: &[i32]) -> (Vec<i32>, Vec<i32>) {
    samples.chunks_exact(2).map(|pair| (pair[0], pair[1])).unzip()
}

/// Signal-to-noise ratio in dB of `decoded` delayed by `lag` against
/// `original`, over `range` of the original
pub fn snr_db(original: &[i32], decoded: &[i32], lag: usize, range: std::ops::Range<usize>) -> f64 {
    let mut signal = 0.0f64;
    let mut noise = 0.0f64;
    for i in range {
        let x = f64::from(original[i]);
        let e = x - f64::from(decoded[i + lag]);
        signal += x * x;
        noise += e * e;
    }
    10.0 * (signal / noise.max(1.0)).log10()
}

/// Parse a hex string into bytes
pub fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("valid hex"))
        .collect()
}

/// Encode interleaved samples with a fresh codec
pub fn encode_fresh(codec_type: CodecType, samples: &[i32]) -> Vec<u8> {
    AptxCodec::new_with_type(codec_type)
        .encode_frame(samples)
        .expect("whole frames encode")
}

/// Encode then decode with fresh codecs
pub fn roundtrip(codec_type: CodecType, samples: &[i32]) -> Vec<i32> {
    let encoded = encode_fresh(codec_type, samples);
    AptxCodec::new_with_type(codec_type)
        .decode_frame(&encoded)
        .expect("clean stream decodes")
}
