//! Utility functions shared by the codec implementations

pub mod validation;

pub use validation::{
    validate_buffer_size, validate_channels, validate_codeword_block, validate_pcm_block,
    validate_sample_rate,
};
