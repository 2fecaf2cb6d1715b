//! Input validation utilities for codec operations

use crate::codecs::aptx::tables::{NB_CHANNELS, SAMPLES_PER_GROUP};
use crate::error::{CodecError, Result};
use crate::types::{CodecType, SampleRate};

/// Validate that interleaved PCM covers a whole number of sample groups
pub fn validate_pcm_block(samples: &[i32]) -> Result<()> {
    let frame = NB_CHANNELS * SAMPLES_PER_GROUP;
    if samples.len() % frame != 0 {
        return Err(CodecError::InvalidFrameSize {
            expected: frame,
            actual: samples.len(),
        });
    }

    Ok(())
}

/// Validate that encoded data covers a whole number of codeword pairs
pub fn validate_codeword_block(data: &[u8], codec_type: CodecType) -> Result<()> {
    let block = NB_CHANNELS * codec_type.codeword_size();
    if data.len() % block != 0 {
        return Err(CodecError::InvalidFrameSize {
            expected: block,
            actual: data.len(),
        });
    }

    Ok(())
}

/// Validate that an output buffer can hold `needed` elements
pub fn validate_buffer_size(needed: usize, actual: usize) -> Result<()> {
    if actual < needed {
        return Err(CodecError::BufferTooSmall { needed, actual });
    }

    Ok(())
}

/// Validate sample rate for a specific codec
pub fn validate_sample_rate(codec_type: CodecType, sample_rate: SampleRate) -> Result<()> {
    let supported_rates = codec_type.supported_sample_rates();
    let rate_hz = sample_rate.hz();

    if !supported_rates.contains(&rate_hz) {
        return Err(CodecError::InvalidSampleRate {
            rate: rate_hz,
            supported: supported_rates.to_vec(),
        });
    }

    Ok(())
}

/// Validate channel count for a specific codec
pub fn validate_channels(codec_type: CodecType, channels: u8) -> Result<()> {
    let supported_channels = codec_type.supported_channels();

    if !supported_channels.contains(&channels) {
        return Err(CodecError::InvalidChannelCount {
            channels,
            supported: supported_channels.to_vec(),
        });
    }

    Ok(())
}
