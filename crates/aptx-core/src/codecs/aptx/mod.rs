//! aptX / aptX HD Audio Codec Implementation
//!
//! A 4:1 stereo sub-band ADPCM codec. Each channel is split into four
//! subbands by a two-stage QMF tree; every subband is coded by an adaptive
//! quantizer driven by a backward-adaptive predictor, so the decoder rebuilds
//! the same state from the indices alone. A parity cycle spread over eight
//! codeword pairs lets the decoder detect misalignment.
//!
//! # Architecture
//!
//! The implementation is split into several modules:
//! - `codec`: High-level codec implementation and group-level entry points
//! - `qmf`: QMF analysis and synthesis filter tree
//! - `dither`: Codeword-driven dither generator
//! - `quantize`: Forward quantizer
//! - `prediction`: Inverse quantizer and adaptive predictor
//! - `sync`: Parity cycle insertion and checking
//! - `bitstream`: Codeword packing
//! - `resync`: Resynchronising stream decoder
//! - `tables`: Quantization tables and constants
//! - `state`: State management structures
//! - `math`: Fixed-point helpers
//!
//! # Profiles
//!
//! | profile | codeword | bitrate at 48 kHz |
//! |---------|----------|-------------------|
//! | aptX    | 16 bits  | 384 kbit/s        |
//! | aptX HD | 24 bits  | 576 kbit/s        |

pub mod bitstream;
pub mod codec;
pub mod dither;
pub mod math;
pub mod prediction;
pub mod qmf;
pub mod quantize;
pub mod resync;
pub mod state;
pub mod sync;
pub mod tables;

#[cfg(test)]
mod tests;

// Re-export the main codec struct
pub use codec::{aptx_decode_group, aptx_encode_group, AptxCodec, SampleGroup};

// Re-export key types
pub use resync::{SyncDecoder, SyncStatus};
pub use state::{AptxContext, Channel};
