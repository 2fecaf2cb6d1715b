//! aptX Property Tests
//!
//! Invariants that hold for arbitrary 24-bit input.

use proptest::prelude::*;

use super::utils::{encode_fresh, MAX_SAMPLE, MIN_SAMPLE};
use crate::codecs::aptx::dither::generate_dither;
use crate::codecs::aptx::state::Channel;
use crate::codecs::aptx::AptxCodec;
use crate::types::CodecType;

fn profile() -> impl Strategy<Value = CodecType> {
    prop_oneof![Just(CodecType::Aptx), Just(CodecType::AptxHd)]
}

/// Interleaved PCM of 1 to 64 whole groups
fn pcm() -> impl Strategy<Value = Vec<i32>> {
    (1usize..=64).prop_flat_map(|groups| prop::collection::vec(MIN_SAMPLE..=MAX_SAMPLE, groups * 8))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Encoding the same input twice from fresh state is bit-identical
    #[test]
    fn prop_encoding_is_deterministic(codec_type in profile(), samples in pcm()) {
        prop_assert_eq!(encode_fresh(codec_type, &samples), encode_fresh(codec_type, &samples));
    }

    /// The encoder's own output never trips the decoder's parity check, and
    /// decodes to the same number of in-range samples
    #[test]
    fn prop_roundtrip_keeps_sync(codec_type in profile(), samples in pcm()) {
        let encoded = encode_fresh(codec_type, &samples);
        prop_assert_eq!(encoded.len(), samples.len() / 8 * 2 * codec_type.codeword_size());

        let decoded = AptxCodec::new_with_type(codec_type).decode_frame(&encoded);
        prop_assert!(decoded.is_ok(), "{:?}", decoded.err());
        let decoded = decoded.unwrap();
        prop_assert_eq!(decoded.len(), samples.len());
        prop_assert!(decoded.iter().all(|&s| (MIN_SAMPLE..=MAX_SAMPLE).contains(&s)));
    }

    /// Two dither generators fed the same indices stay in lockstep
    #[test]
    fn prop_dither_generators_agree(indices in prop::collection::vec(prop::array::uniform4(-300i32..300), 1..50)) {
        let mut encoder = Channel::new();
        let mut decoder = Channel::new();
        for step in &indices {
            for (channel, value) in [(&mut encoder, step), (&mut decoder, step)] {
                for (q, &v) in channel.quantize.iter_mut().zip(value.iter()) {
                    q.quantized_sample = v;
                }
                generate_dither(channel);
            }
            prop_assert_eq!(encoder.dither, decoder.dither);
            prop_assert_eq!(encoder.dither_parity, decoder.dither_parity);
        }
    }
}
