//! Basic aptX Tests
//!
//! Codec creation, configuration, state management and call-site
//! validation.

use super::utils::*;
use crate::codecs::aptx::codec::{APTX_FRAME_SAMPLES, APTX_FRAME_SIZE};
use crate::codecs::aptx::state::AptxContext;
use crate::codecs::aptx::AptxCodec;
use crate::error::CodecError;
use crate::types::{AudioCodec, AudioCodecExt, CodecConfig, CodecType, SampleRate};

/// Test codec creation for both profiles
#[test]
fn test_codec_creation() {
    for codec_type in PROFILES {
        let codec = AptxCodec::new(CodecConfig::new(codec_type)).unwrap();
        assert_eq!(codec.codec_type(), codec_type);
        assert_eq!(codec.encoder_context().codec_type(), codec_type);
        assert_eq!(codec.decoder_context().codec_type(), codec_type);
        assert_eq!(codec.frame_size(), APTX_FRAME_SIZE);
    }
}

/// Test invalid configurations are rejected
#[test]
fn test_codec_creation_invalid_config() {
    let mono = CodecConfig::aptx().with_channels(1);
    assert!(matches!(
        AptxCodec::new(mono),
        Err(CodecError::InvalidChannelCount { channels: 1, .. })
    ));

    let rate = CodecConfig::aptx_hd().with_sample_rate(SampleRate::Custom(96000));
    assert!(matches!(
        AptxCodec::new(rate),
        Err(CodecError::InvalidSampleRate { rate: 96000, .. })
    ));
}

/// Test reported bitrates follow the sample rate
#[test]
fn test_codec_info_bitrates() {
    let cases = [
        (CodecType::Aptx, SampleRate::Rate48000, 384_000),
        (CodecType::Aptx, SampleRate::Rate44100, 352_800),
        (CodecType::Aptx, SampleRate::Rate16000, 128_000),
        (CodecType::AptxHd, SampleRate::Rate48000, 576_000),
        (CodecType::AptxHd, SampleRate::Rate32000, 384_000),
    ];
    for (codec_type, rate, bitrate) in cases {
        let codec = AptxCodec::new(CodecConfig::new(codec_type).with_sample_rate(rate)).unwrap();
        let info = codec.info();
        assert_eq!(info.bitrate, bitrate, "{} at {}", codec_type, rate);
        assert_eq!(info.sample_rate, rate.hz());
        assert_eq!(info.channels, 2);
    }
}

/// Test context block geometry
#[test]
fn test_context_geometry() {
    let ctx = AptxContext::new(CodecType::Aptx);
    assert!(!ctx.is_hd());
    assert_eq!(ctx.codeword_size(), 2);
    assert_eq!(ctx.block_size(), 4);

    let ctx = AptxContext::new(CodecType::AptxHd);
    assert!(ctx.is_hd());
    assert_eq!(ctx.codeword_size(), 3);
    assert_eq!(ctx.block_size(), 6);
}

/// Test encoded size is exactly a quarter of 16/24-bit PCM
#[test]
fn test_compression_ratio() {
    let samples = interleave(&sine(1000.0, 0.5, 0.0, 256), &sine(500.0, 0.5, 0.0, 256));

    let encoded = encode_fresh(CodecType::Aptx, &samples);
    assert_eq!(encoded.len() * 4, samples.len() * 2);

    let encoded = encode_fresh(CodecType::AptxHd, &samples);
    assert_eq!(encoded.len() * 4, samples.len() * 3);
}

/// Test empty input produces empty output
#[test]
fn test_empty_input() {
    let mut codec = AptxCodec::default();
    assert!(codec.encode_frame(&[]).unwrap().is_empty());
    assert!(codec.decode_frame(&[]).unwrap().is_empty());
    assert_eq!(codec.encoder_context(), &AptxContext::new(CodecType::Aptx));
}

/// Test partial frames are rejected before any state changes
#[test]
fn test_partial_frames_rejected() {
    let mut codec = AptxCodec::new_with_type(CodecType::AptxHd);

    let result = codec.encode_frame(&[1; 12]);
    assert_eq!(
        result,
        Err(CodecError::InvalidFrameSize {
            expected: APTX_FRAME_SAMPLES,
            actual: 12
        })
    );
    assert_eq!(codec.encoder_context(), &AptxContext::new(CodecType::AptxHd));

    let result = codec.decode_frame(&[0; 8]);
    assert_eq!(result, Err(CodecError::InvalidFrameSize { expected: 6, actual: 8 }));
    assert_eq!(codec.decoder_context(), &AptxContext::new(CodecType::AptxHd));
}

/// Test reset returns the codec to a fresh state
#[test]
fn test_reset_matches_fresh_codec() {
    let samples = interleave(&noise(1, 400), &noise(2, 400));

    for codec_type in PROFILES {
        let mut codec = AptxCodec::new_with_type(codec_type);
        let first = codec.encode_frame(&samples).unwrap();
        codec.decode_frame(&first).unwrap();
        assert_ne!(codec.encoder_context(), &AptxContext::new(codec_type));

        AudioCodec::reset(&mut codec).unwrap();
        assert_eq!(codec.encoder_context(), &AptxContext::new(codec_type));
        assert_eq!(codec.decoder_context(), &AptxContext::new(codec_type));

        let second = codec.encode_frame(&samples).unwrap();
        assert_eq!(first, second);
    }
}

/// Test buffer APIs agree with the allocating APIs
#[test]
fn test_buffer_apis_match() {
    let samples = interleave(&sine(440.0, 0.4, 0.0, 512), &sine(660.0, 0.4, 0.0, 512));

    for codec_type in PROFILES {
        let mut codec = AptxCodec::new_with_type(codec_type);
        let expected = codec.encode_frame(&samples).unwrap();
        let expected_pcm = codec.decode_frame(&expected).unwrap();

        let mut codec = AptxCodec::new_with_type(codec_type);
        let mut encoded = vec![0u8; codec.max_encoded_size(samples.len())];
        let written = codec.encode_to_buffer(&samples, &mut encoded).unwrap();
        assert_eq!(written, expected.len());
        assert_eq!(encoded, expected);

        let mut decoded = vec![0i32; codec.max_decoded_size(encoded.len())];
        let written = codec.decode_to_buffer(&encoded, &mut decoded).unwrap();
        assert_eq!(written, samples.len());
        assert_eq!(decoded, expected_pcm);
    }
}

/// Test buffer APIs reject short output buffers
#[test]
fn test_buffer_apis_too_small() {
    let mut codec = AptxCodec::new_with_type(CodecType::Aptx);
    let samples = vec![0i32; 16];

    let mut encoded = vec![0u8; 7];
    assert_eq!(
        codec.encode_to_buffer(&samples, &mut encoded),
        Err(CodecError::BufferTooSmall { needed: 8, actual: 7 })
    );

    let mut decoded = vec![0i32; 15];
    assert_eq!(
        codec.decode_to_buffer(&[0u8; 8], &mut decoded),
        Err(CodecError::BufferTooSmall { needed: 16, actual: 15 })
    );
}

/// Test the codec is usable behind the trait object
#[test]
fn test_trait_object() {
    let mut codec: Box<dyn AudioCodec> = Box::new(AptxCodec::new_with_type(CodecType::AptxHd));
    assert!(codec.supports_variable_frame_size());

    let encoded = codec.encode(&[0; 64]).unwrap();
    assert_eq!(encoded.len(), 48);
    assert_eq!(codec.decode(&encoded).unwrap().len(), 64);
}

/// Test independent codecs do not share state
#[test]
fn test_independent_instances() {
    let samples = interleave(&noise(7, 64), &noise(8, 64));

    let mut a = AptxCodec::new_with_type(CodecType::Aptx);
    let mut b = AptxCodec::new_with_type(CodecType::Aptx);
    a.encode_frame(&noise(9, 128)).unwrap();

    let from_b = b.encode_frame(&samples).unwrap();
    assert_eq!(from_b, encode_fresh(CodecType::Aptx, &samples));
}
