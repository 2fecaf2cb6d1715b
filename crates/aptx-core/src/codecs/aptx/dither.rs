//! Dither generation
//!
//! A deterministic pseudo-random word is derived from the low bits of the
//! previous quantized indices. Encoder and decoder both run it from the
//! same history, so they always agree on the dither values and on the
//! channel's dither parity bit.

use crate::codecs::aptx::state::Channel;

/// Multiplier of the pseudo-random generator
const DITHER_MULTIPLIER: i64 = 5_184_443;

/// Fold the previous low-band indices into the codeword history.
///
/// Takes two bits of the LF index, bit 1 of the MLF index and bit 0 of the
/// MHF index, positioned as a 4-bit nibble above eight zero bits.
#[inline]
pub fn update_codeword_history(channel: &mut Channel) {
    let q = &channel.quantize;
    let cw = (q[0].quantized_sample & 3)
        + ((q[1].quantized_sample & 2) << 1)
        + ((q[2].quantized_sample & 1) << 3);
    channel.codeword_history = (cw << 8).wrapping_add(channel.codeword_history.wrapping_shl(4));
}

/// Advance the history and derive this step's dither values and parity bit
pub fn generate_dither(channel: &mut Channel) {
    update_codeword_history(channel);

    let m = DITHER_MULTIPLIER * (channel.codeword_history >> 7) as i64;
    let d = (m.wrapping_mul(4).wrapping_add(m >> 22)) as i32;

    for (subband, dither) in channel.dither.iter_mut().enumerate() {
        *dither = d.wrapping_shl(23 - 5 * subband as u32);
    }
    channel.dither_parity = (d >> 25) & 1;
}
