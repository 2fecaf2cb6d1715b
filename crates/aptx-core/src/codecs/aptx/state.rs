//! aptX State Management
//!
//! State structures of the codec. One [`AptxContext`] holds two
//! [`Channel`]s plus the shared parity-cycle counter; each channel holds a
//! filter tree, the dither history and one quantizer / inverse quantizer /
//! predictor triple per subband.
//!
//! Fields are public so the stage functions in the sibling modules (and the
//! tests) can drive the state directly, the same way the packing stage reads
//! the quantized samples.

use crate::codecs::aptx::qmf::QmfBank;
use crate::codecs::aptx::tables::{
    tables_for, SubbandTables, MAX_PREDICTION_ORDER, NB_CHANNELS, NB_SUBBANDS,
};
use crate::types::CodecType;

/// Forward quantizer output of one subband
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quantize {
    /// Committed quantization index
    pub quantized_sample: i32,
    /// Neighbouring index of opposite parity, used to force parity
    pub quantized_sample_parity_change: i32,
    /// Magnitude of the quantization error of the committed index
    pub error: i32,
}

impl Quantize {
    /// Create an empty quantizer output
    pub fn new() -> Self {
        Self::default()
    }
}

/// Inverse quantizer state of one subband
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvertQuantize {
    /// Current adaptive step size
    pub quantization_factor: i32,
    /// Step-size selector, bounded by the subband's `factor_max`
    pub factor_select: i32,
    /// Residual rebuilt from the last quantized index
    pub reconstructed_difference: i32,
}

impl InvertQuantize {
    /// Create a dequantizer with a zero step size
    pub fn new() -> Self {
        Self::default()
    }
}

/// Backward-adaptive predictor state of one subband
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    /// Signs of the last two reconstructed residuals (never zero)
    pub prev_sign: [i32; 2],
    /// Pole weights applied to the last two reconstructed samples
    pub s_weight: [i32; 2],
    /// Zero weights, one per predictor tap
    pub d_weight: [i32; MAX_PREDICTION_ORDER],
    /// Ring cursor into `reconstructed_differences`
    pub pos: usize,
    /// Residual history, stored twice so taps read a contiguous window
    pub reconstructed_differences: [i32; 2 * MAX_PREDICTION_ORDER],
    /// Reconstructed sample of the previous step
    pub previous_reconstructed_sample: i32,
    /// Contribution of the zero section to the next prediction
    pub predicted_difference: i32,
    /// Prediction of the next subband sample
    pub predicted_sample: i32,
}

impl Prediction {
    /// Create a predictor at its initial state
    pub fn new() -> Self {
        Self {
            prev_sign: [1, 1],
            s_weight: [0; 2],
            d_weight: [0; MAX_PREDICTION_ORDER],
            pos: 0,
            reconstructed_differences: [0; 2 * MAX_PREDICTION_ORDER],
            previous_reconstructed_sample: 0,
            predicted_difference: 0,
            predicted_sample: 0,
        }
    }

    /// Reset the predictor to its initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Prediction {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-channel codec state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    /// Rolling history of quantized low bits feeding the dither generator
    pub codeword_history: i32,
    /// Parity bit produced by the last dither generation
    pub dither_parity: i32,
    /// Dither value of each subband for the current step
    pub dither: [i32; NB_SUBBANDS],
    /// Analysis/synthesis filter tree
    pub qmf: QmfBank,
    /// Forward quantizer outputs
    pub quantize: [Quantize; NB_SUBBANDS],
    /// Inverse quantizer states
    pub invert_quantize: [InvertQuantize; NB_SUBBANDS],
    /// Predictor states
    pub prediction: [Prediction; NB_SUBBANDS],
}

impl Channel {
    /// Create a channel at its initial state
    pub fn new() -> Self {
        Self {
            codeword_history: 0,
            dither_parity: 0,
            dither: [0; NB_SUBBANDS],
            qmf: QmfBank::new(),
            quantize: [Quantize::new(); NB_SUBBANDS],
            invert_quantize: [InvertQuantize::new(); NB_SUBBANDS],
            prediction: Default::default(),
        }
    }

    /// Reset every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Quantized indices of the four subbands
    pub fn quantized_samples(&self) -> [i32; NB_SUBBANDS] {
        self.quantize.map(|q| q.quantized_sample)
    }

    /// Reconstructed subband samples of the last step, synthesis input
    pub fn reconstructed_samples(&self) -> [i32; NB_SUBBANDS] {
        std::array::from_fn(|i| self.prediction[i].previous_reconstructed_sample)
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete state of one encoder or one decoder stream
///
/// The profile is fixed at creation. Independent streams need independent
/// contexts: nothing here may be shared between two streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AptxContext {
    codec_type: CodecType,
    /// Left and right channel states
    pub channels: [Channel; NB_CHANNELS],
    /// Position in the parity cycle, `0..SYNC_PERIOD`
    pub sync_idx: u8,
}

impl AptxContext {
    /// Create a context for the given profile
    pub fn new(codec_type: CodecType) -> Self {
        tracing::debug!("Creating {} context", codec_type.name());
        Self {
            codec_type,
            channels: [Channel::new(), Channel::new()],
            sync_idx: 0,
        }
    }

    /// Reset both channels and the parity cycle, keeping the profile
    pub fn reset(&mut self) {
        tracing::debug!("Resetting {} context", self.codec_type.name());
        for channel in &mut self.channels {
            channel.reset();
        }
        self.sync_idx = 0;
    }

    /// Profile of this context
    pub fn codec_type(&self) -> CodecType {
        self.codec_type
    }

    /// Whether the context uses 24-bit codewords
    pub fn is_hd(&self) -> bool {
        self.codec_type == CodecType::AptxHd
    }

    /// Quantizer tables of this context's profile
    pub fn tables(&self) -> &'static [SubbandTables; NB_SUBBANDS] {
        tables_for(self.codec_type)
    }

    /// Bytes of one channel codeword (2 or 3)
    pub fn codeword_size(&self) -> usize {
        self.codec_type.codeword_size()
    }

    /// Bytes of one codeword pair, the unit of the byte stream
    pub fn block_size(&self) -> usize {
        NB_CHANNELS * self.codeword_size()
    }
}
