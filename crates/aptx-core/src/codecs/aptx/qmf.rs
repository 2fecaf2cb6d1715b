//! aptX QMF (Quadrature Mirror Filter) Implementation
//!
//! Two-stage polyphase filter tree. Analysis splits four time-domain samples
//! into one sample of each of the four subbands; synthesis is the mirror
//! image and rebuilds four samples from one sample per subband.
//!
//! Each polyphase branch owns a [`FilterSignal`] delay line. The line keeps
//! every sample twice, `FILTER_TAPS` apart, so the convolution window is
//! always one contiguous slice.

use crate::codecs::aptx::math::{clip24, rshift64_clip24};
use crate::codecs::aptx::tables::{FILTER_TAPS, NB_SUBBANDS, QMF_INNER_COEFFS, QMF_OUTER_COEFFS};

/// Rounding shift of both analysis stages
const ANALYSIS_SHIFT: u32 = 23;
/// Rounding shift of the inner synthesis stage
const SYNTHESIS_INNER_SHIFT: u32 = 22;
/// Rounding shift of the outer synthesis stage
const SYNTHESIS_OUTER_SHIFT: u32 = 21;

/// Mirrored circular delay line of one polyphase branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSignal {
    buffer: [i32; 2 * FILTER_TAPS],
    pos: usize,
}

impl FilterSignal {
    /// Create an empty delay line
    pub fn new() -> Self {
        Self {
            buffer: [0; 2 * FILTER_TAPS],
            pos: 0,
        }
    }

    /// Clear every stored sample
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Store a sample at both mirrored positions and advance the cursor
    #[inline]
    pub fn push(&mut self, sample: i32) {
        self.buffer[self.pos] = sample;
        self.buffer[self.pos + FILTER_TAPS] = sample;
        self.pos = (self.pos + 1) & (FILTER_TAPS - 1);
    }

    /// Dot product of the last `FILTER_TAPS` samples (oldest first) with
    /// `coeffs`, rounded by `shift` and saturated to 24 bits
    #[inline]
    pub fn convolute(&self, coeffs: &[i32; FILTER_TAPS], shift: u32) -> i32 {
        let window = &self.buffer[self.pos..self.pos + FILTER_TAPS];
        let e: i64 = window
            .iter()
            .zip(coeffs.iter())
            .map(|(&s, &c)| s as i64 * c as i64)
            .sum();
        rshift64_clip24(e, shift)
    }

    /// Insert one sample and convolve in a single step
    #[inline]
    pub fn push_and_convolute(&mut self, sample: i32, coeffs: &[i32; FILTER_TAPS], shift: u32) -> i32 {
        self.push(sample);
        self.convolute(coeffs, shift)
    }

    /// Write cursor, index of the oldest sample in the window
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Raw mirrored buffer
    pub fn buffer(&self) -> &[i32; 2 * FILTER_TAPS] {
        &self.buffer
    }
}

impl Default for FilterSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Delay lines of one channel's filter tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QmfBank {
    outer_filter_signal: [FilterSignal; 2],
    inner_filter_signal: [[FilterSignal; 2]; 2],
}

impl QmfBank {
    /// Create a filter tree with empty delay lines
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all delay lines
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Split four samples into one sample per subband, lowest band first
    pub fn analysis(&mut self, samples: &[i32; 4]) -> [i32; NB_SUBBANDS] {
        let mut intermediate = [0i32; 4];
        for i in 0..2 {
            let (low, high) = polyphase_analysis(
                &mut self.outer_filter_signal,
                &QMF_OUTER_COEFFS,
                [samples[2 * i], samples[2 * i + 1]],
            );
            intermediate[i] = low;
            intermediate[2 + i] = high;
        }

        let mut subband_samples = [0i32; NB_SUBBANDS];
        for i in 0..2 {
            let (low, high) = polyphase_analysis(
                &mut self.inner_filter_signal[i],
                &QMF_INNER_COEFFS,
                [intermediate[2 * i], intermediate[2 * i + 1]],
            );
            subband_samples[2 * i] = low;
            subband_samples[2 * i + 1] = high;
        }
        subband_samples
    }

    /// Rebuild four samples from one sample per subband
    pub fn synthesis(&mut self, subband_samples: &[i32; NB_SUBBANDS]) -> [i32; 4] {
        let mut intermediate = [0i32; 4];
        for i in 0..2 {
            let pair = polyphase_synthesis(
                &mut self.inner_filter_signal[i],
                &QMF_INNER_COEFFS,
                SYNTHESIS_INNER_SHIFT,
                subband_samples[2 * i],
                subband_samples[2 * i + 1],
            );
            intermediate[2 * i..2 * i + 2].copy_from_slice(&pair);
        }

        let mut samples = [0i32; 4];
        for i in 0..2 {
            let pair = polyphase_synthesis(
                &mut self.outer_filter_signal,
                &QMF_OUTER_COEFFS,
                SYNTHESIS_OUTER_SHIFT,
                intermediate[i],
                intermediate[2 + i],
            );
            samples[2 * i..2 * i + 2].copy_from_slice(&pair);
        }
        samples
    }
}

/// Two-band split of a sample pair: returns `(low, high)`
fn polyphase_analysis(
    signal: &mut [FilterSignal; 2],
    coeffs: &[[i32; FILTER_TAPS]; 2],
    samples: [i32; 2],
) -> (i32, i32) {
    let mut subbands = [0i32; 2];
    for i in 0..2 {
        subbands[i] = signal[i].push_and_convolute(samples[1 - i], &coeffs[i], ANALYSIS_SHIFT);
    }
    (
        clip24(subbands[0] + subbands[1]),
        clip24(subbands[0] - subbands[1]),
    )
}

/// Two-band merge into a sample pair
fn polyphase_synthesis(
    signal: &mut [FilterSignal; 2],
    coeffs: &[[i32; FILTER_TAPS]; 2],
    shift: u32,
    low: i32,
    high: i32,
) -> [i32; 2] {
    let subbands = [low + high, low - high];
    let mut samples = [0i32; 2];
    for i in 0..2 {
        samples[i] = signal[i].push_and_convolute(subbands[1 - i], &coeffs[i], shift);
    }
    samples
}
