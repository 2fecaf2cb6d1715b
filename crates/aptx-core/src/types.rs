//! Core types and traits for the codec library
//!
//! This module defines the fundamental types and traits that form the
//! foundation of the codec library's API.

use crate::error::Result;
use crate::utils::validation::{validate_channels, validate_sample_rate};
use std::fmt;

/// Primary trait for audio codecs
///
/// Samples cross this boundary as interleaved stereo (`L, R, L, R, ...`)
/// 24-bit signed integers carried in `i32`. Callers holding wider samples
/// shift them right by the extra bits before encoding and back left after
/// decoding.
pub trait AudioCodec: Send + Sync {
    /// Encode audio samples to compressed data
    ///
    /// # Arguments
    ///
    /// * `samples` - Interleaved stereo samples, a whole number of frames
    ///
    /// # Returns
    ///
    /// Concatenated codeword pairs
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a whole number of frames
    fn encode(&mut self, samples: &[i32]) -> Result<Vec<u8>>;

    /// Decode compressed data to audio samples
    ///
    /// # Arguments
    ///
    /// * `data` - Concatenated codeword pairs
    ///
    /// # Returns
    ///
    /// Interleaved stereo samples
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a whole number of codeword pairs
    /// or the decoder detects a loss of synchronisation
    fn decode(&mut self, data: &[u8]) -> Result<Vec<i32>>;

    /// Get codec information
    fn info(&self) -> CodecInfo;

    /// Reset codec state
    ///
    /// This clears all internal state and prepares the codec for fresh input.
    /// Useful for handling stream discontinuities.
    fn reset(&mut self) -> Result<()>;

    /// Get the frame size in samples per channel
    fn frame_size(&self) -> usize;

    /// Check if the codec supports variable frame sizes
    ///
    /// Any whole multiple of the frame size is accepted.
    fn supports_variable_frame_size(&self) -> bool {
        true
    }
}

/// Extended trait for codecs with advanced features
pub trait AudioCodecExt: AudioCodec {
    /// Encode with pre-allocated output buffer (zero-copy)
    ///
    /// # Returns
    ///
    /// Number of bytes written to output buffer
    fn encode_to_buffer(&mut self, samples: &[i32], output: &mut [u8]) -> Result<usize>;

    /// Decode with pre-allocated output buffer (zero-copy)
    ///
    /// # Returns
    ///
    /// Number of samples written to output buffer
    fn decode_to_buffer(&mut self, data: &[u8], output: &mut [i32]) -> Result<usize>;

    /// Get maximum encoded size for a given number of interleaved samples
    fn max_encoded_size(&self, input_samples: usize) -> usize;

    /// Get maximum decoded size for a given input size
    fn max_decoded_size(&self, input_bytes: usize) -> usize;
}

/// Audio codec information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    /// Codec name ("aptX" or "aptX HD")
    pub name: &'static str,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u8,
    /// Bitrate in bits per second
    pub bitrate: u32,
    /// Frame size in samples per channel
    pub frame_size: usize,
    /// Bytes of one channel codeword
    pub codeword_size: usize,
}

/// Codec profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecType {
    /// aptX, 16-bit codewords
    Aptx,
    /// aptX HD, 24-bit codewords
    AptxHd,
}

impl CodecType {
    /// Get the codec name
    pub fn name(self) -> &'static str {
        match self {
            Self::Aptx => "aptX",
            Self::AptxHd => "aptX HD",
        }
    }

    /// Get the default sample rate
    pub fn default_sample_rate(self) -> u32 {
        48000
    }

    /// Bytes of one channel codeword
    pub fn codeword_size(self) -> usize {
        match self {
            Self::Aptx => 2,
            Self::AptxHd => 3,
        }
    }

    /// Bitrate at the given sample rate: one codeword pair per four
    /// samples per channel
    pub fn bitrate(self, sample_rate: u32) -> u32 {
        // 2 channels * codeword bits / 4 samples
        sample_rate * 4 * self.codeword_size() as u32
    }

    /// Get supported sample rates
    pub fn supported_sample_rates(self) -> &'static [u32] {
        &[16000, 32000, 44100, 48000]
    }

    /// Get supported channel counts
    pub fn supported_channels(self) -> &'static [u8] {
        &[2]
    }

    /// Look up a profile by name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "aptx" => Some(Self::Aptx),
            "aptxhd" => Some(Self::AptxHd),
            _ => None,
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Sample rate enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRate {
    /// 16 kHz
    Rate16000,
    /// 32 kHz
    Rate32000,
    /// 44.1 kHz (CD quality)
    Rate44100,
    /// 48 kHz (professional)
    Rate48000,
    /// Custom sample rate
    Custom(u32),
}

impl SampleRate {
    /// Get the sample rate value in Hz
    pub fn hz(self) -> u32 {
        match self {
            Self::Rate16000 => 16000,
            Self::Rate32000 => 32000,
            Self::Rate44100 => 44100,
            Self::Rate48000 => 48000,
            Self::Custom(rate) => rate,
        }
    }

    /// Create from Hz value
    pub fn from_hz(hz: u32) -> Self {
        match hz {
            16000 => Self::Rate16000,
            32000 => Self::Rate32000,
            44100 => Self::Rate44100,
            48000 => Self::Rate48000,
            rate => Self::Custom(rate),
        }
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.hz())
    }
}

/// Codec configuration
///
/// The profile is fixed for the lifetime of a codec. The sample rate only
/// affects the reported bitrate; the algorithm itself is rate-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Codec type
    pub codec_type: CodecType,
    /// Sample rate
    pub sample_rate: SampleRate,
    /// Number of channels
    pub channels: u8,
}

impl CodecConfig {
    /// Create a new codec configuration
    pub fn new(codec_type: CodecType) -> Self {
        Self {
            codec_type,
            sample_rate: SampleRate::from_hz(codec_type.default_sample_rate()),
            channels: 2,
        }
    }

    /// Create aptX configuration
    pub fn aptx() -> Self {
        Self::new(CodecType::Aptx)
    }

    /// Create aptX HD configuration
    pub fn aptx_hd() -> Self {
        Self::new(CodecType::AptxHd)
    }

    /// Set sample rate
    pub fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set channel count
    pub fn with_channels(mut self, channels: u8) -> Self {
        self.channels = channels;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        validate_sample_rate(self.codec_type, self.sample_rate)?;
        validate_channels(self.codec_type, self.channels)
    }
}
