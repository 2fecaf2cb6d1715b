//! aptX Codec Implementation
//!
//! This module provides the main aptX / aptX HD codec interface, plus the
//! group-level functions that drive one [`AptxContext`] directly.

use crate::codecs::aptx::bitstream::{pack_codeword, read_codeword, unpack_codeword, write_codeword};
use crate::codecs::aptx::dither::generate_dither;
use crate::codecs::aptx::math::clip24;
use crate::codecs::aptx::prediction::invert_quantize_and_prediction;
use crate::codecs::aptx::quantize::quantize_difference;
use crate::codecs::aptx::state::{AptxContext, Channel};
use crate::codecs::aptx::sync::{check_parity, insert_sync};
use crate::codecs::aptx::tables::{
    Subband, SubbandTables, CODEC_LATENCY, NB_CHANNELS, NB_SUBBANDS, SAMPLES_PER_GROUP,
};
use crate::error::{CodecError, Result};
use crate::types::{AudioCodec, AudioCodecExt, CodecConfig, CodecInfo, CodecType};
use crate::utils::validation::{validate_buffer_size, validate_codeword_block, validate_pcm_block};

/// aptX frame size in samples per channel (one codeword pair)
pub const APTX_FRAME_SIZE: usize = SAMPLES_PER_GROUP;

/// Interleaved samples in one frame
pub const APTX_FRAME_SAMPLES: usize = NB_CHANNELS * APTX_FRAME_SIZE;

/// One group of four samples per channel, left then right
pub type SampleGroup = [[i32; SAMPLES_PER_GROUP]; NB_CHANNELS];

/// aptX / aptX HD codec
///
/// Holds independent encoder and decoder contexts, so one instance can
/// encode a stream and decode another at the same time.
///
/// # Example
/// ```
/// use aptx_core::codecs::aptx::AptxCodec;
/// use aptx_core::types::CodecType;
///
/// let mut codec = AptxCodec::new_with_type(CodecType::Aptx);
///
/// // 64 stereo sample pairs, interleaved L/R, 24-bit
/// let input = vec![0i32; 128];
/// let encoded = codec.encode_frame(&input).unwrap();
/// assert_eq!(encoded.len(), 64);
///
/// let decoded = codec.decode_frame(&encoded).unwrap();
/// assert_eq!(decoded.len(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct AptxCodec {
    codec_type: CodecType,
    sample_rate: u32,

    /// Encoder context
    encoder: AptxContext,

    /// Decoder context
    decoder: AptxContext,
}

impl AptxCodec {
    /// Create a new aptX codec from configuration
    ///
    /// # Arguments
    /// * `config` - Codec configuration
    ///
    /// # Returns
    /// * Result containing the codec or an error
    pub fn new(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        let mut codec = Self::new_with_type(config.codec_type);
        codec.sample_rate = config.sample_rate.hz();
        Ok(codec)
    }

    /// Create a codec for a profile at the default sample rate
    ///
    /// Direct construction is not gated by the `aptx-hd` feature, which
    /// only applies to [`CodecFactory`](crate::codecs::CodecFactory).
    pub fn new_with_type(codec_type: CodecType) -> Self {
        tracing::debug!("Creating {} codec", codec_type);
        Self {
            codec_type,
            sample_rate: codec_type.default_sample_rate(),
            encoder: AptxContext::new(codec_type),
            decoder: AptxContext::new(codec_type),
        }
    }

    /// Reset encoder and decoder to their initial state
    pub fn reset(&mut self) {
        self.encoder.reset();
        self.decoder.reset();
    }

    /// Encode interleaved stereo samples
    ///
    /// # Arguments
    /// * `samples` - Interleaved L/R samples, a multiple of [`APTX_FRAME_SAMPLES`]
    ///
    /// # Returns
    /// * Concatenated codeword pairs
    pub fn encode_frame(&mut self, samples: &[i32]) -> Result<Vec<u8>> {
        validate_pcm_block(samples)?;

        let block = self.encoder.block_size();
        let mut encoded = vec![0u8; samples.len() / APTX_FRAME_SAMPLES * block];
        for (chunk, out) in samples
            .chunks_exact(APTX_FRAME_SAMPLES)
            .zip(encoded.chunks_exact_mut(block))
        {
            aptx_encode_group(&mut self.encoder, &deinterleave(chunk), out)?;
        }

        tracing::trace!("Encoded {} samples into {} bytes", samples.len(), encoded.len());
        Ok(encoded)
    }

    /// Decode concatenated codeword pairs
    ///
    /// Fails with [`CodecError::SyncLost`] at the first codeword pair that
    /// breaks the parity cycle; use [`AptxCodec::decode_into`] to keep the
    /// samples decoded before it.
    pub fn decode_frame(&mut self, data: &[u8]) -> Result<Vec<i32>> {
        let mut decoded = Vec::with_capacity(self.max_decoded_size(data.len()));
        self.decode_into(data, &mut decoded)?;
        Ok(decoded)
    }

    /// Decode codeword pairs, appending interleaved samples to `output`
    ///
    /// Stops at the first codeword pair failing the parity check and returns
    /// [`CodecError::SyncLost`] with its index. Samples of earlier pairs stay
    /// in `output`; the offending pair's samples are dropped. The decoder
    /// has already consumed that pair, so the caller may carry on at the
    /// same alignment or resynchronise.
    ///
    /// # Returns
    /// * Number of samples appended
    pub fn decode_into(&mut self, data: &[u8], output: &mut Vec<i32>) -> Result<usize> {
        validate_codeword_block(data, self.codec_type)?;

        let block = self.decoder.block_size();
        let start = output.len();
        let mut group: SampleGroup = [[0; SAMPLES_PER_GROUP]; NB_CHANNELS];
        for (index, chunk) in data.chunks_exact(block).enumerate() {
            if !aptx_decode_group(&mut self.decoder, chunk, &mut group)? {
                tracing::warn!("{} decoder lost sync at codeword pair {}", self.codec_type, index);
                return Err(CodecError::SyncLost { codeword: index });
            }
            interleave(&group, output);
        }

        tracing::trace!("Decoded {} bytes into {} samples", data.len(), output.len() - start);
        Ok(output.len() - start)
    }

    /// Codec profile
    pub fn codec_type(&self) -> CodecType {
        self.codec_type
    }

    /// Samples per channel by which decoder output trails encoder input
    pub fn latency(&self) -> usize {
        CODEC_LATENCY
    }

    /// Get encoder context
    pub fn encoder_context(&self) -> &AptxContext {
        &self.encoder
    }

    /// Get decoder context
    pub fn decoder_context(&self) -> &AptxContext {
        &self.decoder
    }

    /// Get mutable decoder context
    pub fn decoder_context_mut(&mut self) -> &mut AptxContext {
        &mut self.decoder
    }
}

impl Default for AptxCodec {
    fn default() -> Self {
        Self::new_with_type(CodecType::Aptx)
    }
}

impl AudioCodec for AptxCodec {
    fn encode(&mut self, samples: &[i32]) -> Result<Vec<u8>> {
        self.encode_frame(samples)
    }

    fn decode(&mut self, data: &[u8]) -> Result<Vec<i32>> {
        self.decode_frame(data)
    }

    fn info(&self) -> CodecInfo {
        CodecInfo {
            name: self.codec_type.name(),
            sample_rate: self.sample_rate,
            channels: NB_CHANNELS as u8,
            bitrate: self.codec_type.bitrate(self.sample_rate),
            frame_size: APTX_FRAME_SIZE,
            codeword_size: self.codec_type.codeword_size(),
        }
    }

    fn reset(&mut self) -> Result<()> {
        AptxCodec::reset(self);
        Ok(())
    }

    fn frame_size(&self) -> usize {
        APTX_FRAME_SIZE
    }
}

impl AudioCodecExt for AptxCodec {
    fn encode_to_buffer(&mut self, samples: &[i32], output: &mut [u8]) -> Result<usize> {
        validate_pcm_block(samples)?;
        let needed = self.max_encoded_size(samples.len());
        validate_buffer_size(needed, output.len())?;

        let block = self.encoder.block_size();
        for (chunk, out) in samples
            .chunks_exact(APTX_FRAME_SAMPLES)
            .zip(output.chunks_exact_mut(block))
        {
            aptx_encode_group(&mut self.encoder, &deinterleave(chunk), out)?;
        }
        Ok(needed)
    }

    fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i32]) -> Result<usize> {
        validate_codeword_block(data, self.codec_type)?;
        let needed = self.max_decoded_size(data.len());
        validate_buffer_size(needed, output.len())?;

        let block = self.decoder.block_size();
        let mut group: SampleGroup = [[0; SAMPLES_PER_GROUP]; NB_CHANNELS];
        for (index, (chunk, out)) in data
            .chunks_exact(block)
            .zip(output.chunks_exact_mut(APTX_FRAME_SAMPLES))
            .enumerate()
        {
            if !aptx_decode_group(&mut self.decoder, chunk, &mut group)? {
                tracing::warn!("{} decoder lost sync at codeword pair {}", self.codec_type, index);
                return Err(CodecError::SyncLost { codeword: index });
            }
            for (i, pair) in out.chunks_exact_mut(NB_CHANNELS).enumerate() {
                pair[0] = group[0][i];
                pair[1] = group[1][i];
            }
        }
        Ok(needed)
    }

    fn max_encoded_size(&self, input_samples: usize) -> usize {
        input_samples / APTX_FRAME_SAMPLES * self.encoder.block_size()
    }

    fn max_decoded_size(&self, input_bytes: usize) -> usize {
        input_bytes / self.decoder.block_size() * APTX_FRAME_SAMPLES
    }
}

/// Split one interleaved frame into per-channel groups
fn deinterleave(frame: &[i32]) -> SampleGroup {
    let mut group: SampleGroup = [[0; SAMPLES_PER_GROUP]; NB_CHANNELS];
    for (i, pair) in frame.chunks_exact(NB_CHANNELS).enumerate() {
        group[0][i] = pair[0];
        group[1][i] = pair[1];
    }
    group
}

/// Append one group as interleaved samples
pub(crate) fn interleave(group: &SampleGroup, output: &mut Vec<i32>) {
    for i in 0..SAMPLES_PER_GROUP {
        output.push(group[0][i]);
        output.push(group[1][i]);
    }
}

/// Split, predict and quantize one channel's samples
fn encode_channel(channel: &mut Channel, samples: &[i32; SAMPLES_PER_GROUP], tables: &[SubbandTables; NB_SUBBANDS]) {
    let subband_samples = channel.qmf.analysis(samples);
    generate_dither(channel);

    for i in Subband::ALL.map(Subband::index) {
        let difference = clip24(subband_samples[i] - channel.prediction[i].predicted_sample);
        quantize_difference(
            &mut channel.quantize[i],
            difference,
            channel.dither[i],
            channel.invert_quantize[i].quantization_factor,
            &tables[i],
        );
    }
}

/// Encode one group of four samples per channel into one codeword pair
///
/// # Arguments
/// * `ctx` - Encoder context
/// * `samples` - Left and right samples
/// * `output` - Receives the codeword pair (4 bytes for aptX, 6 for aptX HD)
///
/// # Returns
/// * Number of bytes written
pub fn aptx_encode_group(ctx: &mut AptxContext, samples: &SampleGroup, output: &mut [u8]) -> Result<usize> {
    let block = ctx.block_size();
    validate_buffer_size(block, output.len())?;

    let tables = ctx.tables();
    for (channel, channel_samples) in ctx.channels.iter_mut().zip(samples.iter()) {
        encode_channel(channel, channel_samples, tables);
    }

    insert_sync(ctx);

    let codec_type = ctx.codec_type();
    let size = ctx.codeword_size();
    for (channel, out) in ctx.channels.iter_mut().zip(output[..block].chunks_exact_mut(size)) {
        invert_quantize_and_prediction(channel, tables);
        write_codeword(pack_codeword(channel, codec_type), out);
    }

    Ok(block)
}

/// Decode one codeword pair into four samples per channel
///
/// # Arguments
/// * `ctx` - Decoder context
/// * `input` - Codeword pair (only the first pair is read)
/// * `output` - Receives left and right samples
///
/// # Returns
/// * `true` if the pair kept the parity cycle, `false` on sync loss. The
///   context advances and `output` is written either way.
pub fn aptx_decode_group(ctx: &mut AptxContext, input: &[u8], output: &mut SampleGroup) -> Result<bool> {
    let block = ctx.block_size();
    validate_buffer_size(block, input.len())?;

    let tables = ctx.tables();
    let codec_type = ctx.codec_type();
    let size = ctx.codeword_size();
    for (channel, codeword) in ctx.channels.iter_mut().zip(input[..block].chunks_exact(size)) {
        generate_dither(channel);
        unpack_codeword(channel, read_codeword(codeword), codec_type);
        invert_quantize_and_prediction(channel, tables);
    }

    let synced = !check_parity(ctx);

    for (channel, out) in ctx.channels.iter_mut().zip(output.iter_mut()) {
        let reconstructed = channel.reconstructed_samples();
        *out = channel.qmf.synthesis(&reconstructed);
    }

    Ok(synced)
}
