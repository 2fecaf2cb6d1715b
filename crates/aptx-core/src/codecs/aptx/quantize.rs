//! Forward quantizer (encoder only)
//!
//! Maps a prediction residual to a signed index into the subband's
//! interval table. Besides the index it records the neighbouring index of
//! opposite parity and the error of the committed choice, which the parity
//! stage uses to pick the cheapest subband to flip.

use crate::codecs::aptx::math::{clip24, rshift32_clip24, rshift64, rshift64_clip24};
use crate::codecs::aptx::state::Quantize;
use crate::codecs::aptx::tables::SubbandTables;

/// Largest residual magnitude accepted by the interval search
const MAX_DIFFERENCE_ABS: i32 = (1 << 23) - 1;

/// Largest index whose scaled interval does not exceed `value`
///
/// `intervals.len()` is `2^k + 1`, so the search never reads past the end.
pub fn bin_search(value: i32, factor: i32, intervals: &[i32]) -> usize {
    let mut idx = 0usize;
    let mut i = intervals.len() >> 1;
    while i > 0 {
        if factor as i64 * intervals[idx + i] as i64 <= (value as i64) << 24 {
            idx += i;
        }
        i >>= 1;
    }
    idx
}

/// Quantize one residual against the current step size
pub fn quantize_difference(
    quantize: &mut Quantize,
    sample_difference: i32,
    dither: i32,
    quantization_factor: i32,
    tables: &SubbandTables,
) {
    let intervals = tables.quantize_intervals;
    let negative = sample_difference < 0;

    let sample_difference_abs = sample_difference.unsigned_abs().min(MAX_DIFFERENCE_ABS as u32) as i32;

    let q = bin_search(sample_difference_abs >> 4, quantization_factor, intervals);

    let d = rshift32_clip24(((dither as i64 * dither as i64) >> 32) as i32, 7) - (1 << 23);
    let d = rshift64(d as i64 * tables.quantize_dither_factors[q] as i64, 23) as i32;

    let mean = (intervals[q + 1] + intervals[q]) / 2;
    let interval = (intervals[q + 1] - intervals[q]) * (-(negative as i32) | 1);

    let dithered_sample = rshift64_clip24(
        dither as i64 * interval as i64 + ((clip24(mean + d) as i64) << 32),
        32,
    );
    let error = ((sample_difference_abs as i64) << 20) - dithered_sample as i64 * quantization_factor as i64;
    quantize.error = (rshift64(error, 23) as i32).abs();

    let mut quantized_sample = q as i32;
    let mut parity_change = quantized_sample;
    if error < 0 {
        quantized_sample -= 1;
    } else {
        parity_change -= 1;
    }

    let inv = -(negative as i32);
    quantize.quantized_sample = quantized_sample ^ inv;
    quantize.quantized_sample_parity_change = parity_change ^ inv;
}
