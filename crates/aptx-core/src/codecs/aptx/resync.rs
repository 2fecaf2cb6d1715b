//! Resynchronising stream decoder
//!
//! The core decoder only reports a broken parity cycle. [`SyncDecoder`]
//! wraps a decoder context with a byte buffer and recovers from
//! misalignment: on sync loss it resets the context, drops one byte and
//! tries again at the next offset. A new alignment is trusted once it has
//! survived [`RESYNC_CODEWORDS`] consecutive codeword pairs.

use bytes::{Buf, BytesMut};

use crate::codecs::aptx::codec::{aptx_decode_group, interleave, SampleGroup};
use crate::codecs::aptx::state::AptxContext;
use crate::codecs::aptx::tables::{CODEC_LATENCY, NB_CHANNELS, SAMPLES_PER_GROUP};
use crate::error::Result;
use crate::types::CodecType;

/// Codeword pairs a new alignment must survive before it is trusted,
/// enough to flush the filter latency plus half a pair
pub const RESYNC_CODEWORDS: usize = (CODEC_LATENCY + SAMPLES_PER_GROUP / 2) / SAMPLES_PER_GROUP;

/// Outcome of one [`SyncDecoder::decode`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStatus {
    /// Decoder is locked with no pending resynchronisation
    pub synced: bool,
    /// Bytes written off by resynchronisations that completed in this call,
    /// dropped bytes plus the bytes decoded while the new alignment was on
    /// probation
    pub dropped: usize,
}

/// Decoder for an unaligned, possibly damaged byte stream
#[derive(Debug, Clone)]
pub struct SyncDecoder {
    ctx: AptxContext,
    buffer: BytesMut,
    /// Bytes written off since the last loss, zero while locked
    pending_dropped: usize,
    /// Consecutive good pairs since the last loss
    probation: usize,
}

impl SyncDecoder {
    /// Create a decoder for the given profile
    pub fn new(codec_type: CodecType) -> Self {
        let ctx = AptxContext::new(codec_type);
        let buffer = BytesMut::with_capacity(ctx.block_size());
        Self {
            ctx,
            buffer,
            pending_dropped: 0,
            probation: 0,
        }
    }

    /// Decode as many codeword pairs as are available
    ///
    /// Bytes that do not complete a pair are kept for the next call. Samples
    /// of pairs failing the parity check are discarded; samples decoded on
    /// probation are kept.
    pub fn decode(&mut self, data: &[u8], output: &mut Vec<i32>) -> Result<SyncStatus> {
        self.buffer.extend_from_slice(data);

        let block = self.ctx.block_size();
        let mut status = SyncStatus::default();
        let mut group: SampleGroup = [[0; SAMPLES_PER_GROUP]; NB_CHANNELS];

        while self.buffer.len() >= block {
            if aptx_decode_group(&mut self.ctx, &self.buffer[..block], &mut group)? {
                self.buffer.advance(block);
                interleave(&group, output);

                if self.pending_dropped > 0 {
                    self.pending_dropped += block;
                    self.probation += 1;
                    if self.probation >= RESYNC_CODEWORDS {
                        tracing::info!(
                            dropped = self.pending_dropped,
                            "{} stream resynchronised",
                            self.ctx.codec_type()
                        );
                        status.dropped += self.pending_dropped;
                        self.pending_dropped = 0;
                        self.probation = 0;
                    }
                }
            } else {
                if self.pending_dropped == 0 {
                    tracing::warn!("{} stream lost sync, resynchronising", self.ctx.codec_type());
                }
                self.ctx.reset();
                self.buffer.advance(1);
                self.pending_dropped += 1;
                self.probation = 0;
                tracing::debug!(pending = self.pending_dropped, "Dropped one byte");
            }
        }

        status.synced = self.pending_dropped == 0;
        Ok(status)
    }

    /// Discard buffered bytes and reset the decoder
    ///
    /// # Returns
    /// * Number of buffered bytes discarded
    pub fn finish(&mut self) -> usize {
        let discarded = self.buffer.len();
        self.buffer.clear();
        self.ctx.reset();
        self.pending_dropped = 0;
        self.probation = 0;
        discarded
    }

    /// Bytes held back waiting for a complete codeword pair
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Whether a resynchronisation is in progress
    pub fn is_resynchronising(&self) -> bool {
        self.pending_dropped > 0
    }

    /// Profile of the decoded stream
    pub fn codec_type(&self) -> CodecType {
        self.ctx.codec_type()
    }
}
