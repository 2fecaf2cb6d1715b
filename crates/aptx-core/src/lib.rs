//! # aptX-Core: aptX / aptX HD Audio Codec Library
//!
//! This library implements the aptX family of stereo sub-band ADPCM codecs
//! as used over Bluetooth A2DP. Audio is split into four subbands per
//! channel and every four stereo samples are coded into one pair of fixed
//! width codewords, a constant 4:1 compression of 16-bit (aptX) or 24-bit
//! (aptX HD) audio.
//!
//! ## Features
//!
//! - **aptX**: 16-bit codewords, 384 kbit/s at 48 kHz
//! - **aptX HD**: 24-bit codewords, 576 kbit/s at 48 kHz
//! - **Sync detection**: a parity cycle over eight codeword pairs exposes
//!   misaligned streams
//! - **Resynchronisation**: [`codecs::aptx::SyncDecoder`] recovers alignment
//!   on damaged byte streams
//!
//! ## Usage
//!
//! ```rust
//! use aptx_core::{AudioCodec, CodecConfig, CodecFactory};
//!
//! // Create an aptX codec
//! let config = CodecConfig::aptx();
//! let mut codec = CodecFactory::create(config)?;
//!
//! // Encode interleaved stereo 24-bit samples
//! let samples = vec![0i32; 256]; // 128 stereo samples
//! let encoded = codec.encode(&samples)?;
//! assert_eq!(encoded.len(), 128);
//!
//! // Decode back to samples
//! let decoded = codec.decode(&encoded)?;
//! assert_eq!(decoded.len(), samples.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `aptx-hd`: aptX HD profile through [`CodecFactory`] (enabled by default).
//!   It only gates name and config based selection; [`AptxCodec`] and the
//!   group functions construct either profile directly.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use codecs::aptx::{AptxCodec, SyncDecoder, SyncStatus};
pub use codecs::CodecFactory;
pub use error::{CodecError, Result};
pub use types::{AudioCodec, AudioCodecExt, CodecConfig, CodecInfo, CodecType, SampleRate};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported codec types
pub const SUPPORTED_CODECS: &[&str] = &[
    "aptX",
    #[cfg(feature = "aptx-hd")]
    "aptX HD",
];

/// Initialize the codec library
///
/// Installs a `tracing` subscriber honouring `RUST_LOG` if none is set yet.
/// It's safe to call multiple times.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for table self-checks.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    tracing::info!("aptX-Core v{} initialized", VERSION);
    tracing::info!("Supported codecs: {:?}", SUPPORTED_CODECS);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_codecs: SUPPORTED_CODECS.to_vec(),
        latency: codecs::aptx::tables::CODEC_LATENCY,
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// List of supported codec names
    pub supported_codecs: Vec<&'static str>,
    /// Decoder output delay in samples per channel
    pub latency: usize,
}
