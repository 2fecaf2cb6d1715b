//! Parity synchronisation
//!
//! The combined parity of both channels' indices follows a fixed cycle of
//! [`SYNC_PERIOD`] codewords: odd on the last codeword of the cycle, even
//! otherwise. The encoder enforces the cycle by flipping the index with the
//! smallest quantization error to its neighbour; the decoder checks it and
//! reports a mismatch as sync loss.

use crate::codecs::aptx::state::{AptxContext, Channel};
use crate::codecs::aptx::tables::{Subband, SYNC_PERIOD};

/// Subbands in the order they are considered for a parity flip
const SYNC_FLIP_ORDER: [Subband; 4] = [Subband::Mlf, Subband::Mhf, Subband::Lf, Subband::Hf];

/// Parity of one channel: dither parity xor the low bit of every index
#[inline]
pub fn channel_parity(channel: &Channel) -> i32 {
    let parity = channel
        .quantize
        .iter()
        .fold(channel.dither_parity, |acc, q| acc ^ q.quantized_sample);
    parity & 1
}

/// Advance the parity cycle and report whether the current codeword pair
/// breaks it (`true` means out of sync)
pub fn check_parity(ctx: &mut AptxContext) -> bool {
    let parity = channel_parity(&ctx.channels[0]) ^ channel_parity(&ctx.channels[1]);
    let eighth = (ctx.sync_idx == SYNC_PERIOD - 1) as i32;
    ctx.sync_idx = (ctx.sync_idx + 1) & (SYNC_PERIOD - 1);
    (parity ^ eighth) != 0
}

/// Force the parity cycle on freshly quantized indices
///
/// When the pair is off-cycle, the candidate with the smallest error is
/// replaced by its parity-change neighbour. Right channel is scanned first;
/// ties keep the earlier candidate.
pub fn insert_sync(ctx: &mut AptxContext) {
    if !check_parity(ctx) {
        return;
    }

    let mut best = (1usize, SYNC_FLIP_ORDER[0].index());
    let mut best_error = ctx.channels[best.0].quantize[best.1].error;
    for channel in [1usize, 0] {
        for subband in SYNC_FLIP_ORDER.map(Subband::index) {
            let error = ctx.channels[channel].quantize[subband].error;
            if error < best_error {
                best = (channel, subband);
                best_error = error;
            }
        }
    }

    let (channel, subband) = best;
    let quantize = &mut ctx.channels[channel].quantize[subband];
    tracing::trace!(
        channel,
        subband,
        error = best_error,
        "Flipping subband index to keep parity cycle"
    );
    quantize.quantized_sample = quantize.quantized_sample_parity_change;
}
