//! aptX Synchronisation Tests
//!
//! Detection of misaligned and damaged streams, and recovery through the
//! resynchronising decoder.

use super::utils::*;
use crate::codecs::aptx::resync::RESYNC_CODEWORDS;
use crate::codecs::aptx::{AptxCodec, SyncDecoder};
use crate::error::CodecError;
use crate::types::CodecType;

/// Two tones, 512 groups per channel
fn tone_stream(codec_type: CodecType) -> Vec<u8> {
    let left = sine(440.0, 0.4, 0.0, 2048);
    let right = sine(660.0, 0.4, 0.0, 2048);
    encode_fresh(codec_type, &interleave(&left, &right))
}

/// Decode a stream into whole pairs only, returning the pair of first loss
fn first_sync_loss(codec_type: CodecType, stream: &[u8]) -> Option<usize> {
    let block = 2 * codec_type.codeword_size();
    let usable = stream.len() / block * block;
    match AptxCodec::new_with_type(codec_type).decode_frame(&stream[..usable]) {
        Ok(_) => None,
        Err(CodecError::SyncLost { codeword }) => Some(codeword),
        Err(e) => panic!("unexpected error: {}", e),
    }
}

/// Test a clean stream never reports sync loss
#[test]
fn test_clean_stream_stays_synced() {
    for codec_type in PROFILES {
        assert_eq!(first_sync_loss(codec_type, &tone_stream(codec_type)), None);
    }
}

/// Test a dropped byte is detected within one parity cycle
#[test]
fn test_dropped_byte_detected() {
    for codec_type in PROFILES {
        let stream = tone_stream(codec_type);
        let block = 2 * codec_type.codeword_size();

        for offset in 0..block {
            let cut = 100 * block + offset;
            let mut damaged = stream.clone();
            damaged.remove(cut);

            let loss = first_sync_loss(codec_type, &damaged)
                .unwrap_or_else(|| panic!("{} cut at {} undetected", codec_type, cut));
            assert!(
                (100..=108).contains(&loss),
                "{} cut at {} detected at pair {}",
                codec_type,
                cut,
                loss
            );
        }
    }
}

/// Test inserted bytes are detected too
#[test]
fn test_inserted_byte_detected() {
    for codec_type in PROFILES {
        let mut stream = tone_stream(codec_type);
        let block = 2 * codec_type.codeword_size();
        stream.insert(40 * block, 0x5A);

        let loss = first_sync_loss(codec_type, &stream).expect("insertion detected");
        assert!((40..=48).contains(&loss), "{} detected at {}", codec_type, loss);
    }
}

/// Test an inverted parity-carrying byte fails exactly at its pair
#[test]
fn test_corrupted_byte_detected_at_pair() {
    for codec_type in PROFILES {
        let mut stream = tone_stream(codec_type);
        let block = 2 * codec_type.codeword_size();
        stream[50 * block] ^= 0xFF;

        assert_eq!(first_sync_loss(codec_type, &stream), Some(50));
    }
}

/// Test the resynchronising decoder passes a clean stream through unchanged
#[test]
fn test_sync_decoder_clean_stream() {
    for codec_type in PROFILES {
        let stream = tone_stream(codec_type);
        let expected = AptxCodec::new_with_type(codec_type).decode_frame(&stream).unwrap();

        let mut decoder = SyncDecoder::new(codec_type);
        let mut output = Vec::new();
        for chunk in stream.chunks(37) {
            let status = decoder.decode(chunk, &mut output).unwrap();
            assert!(status.synced);
            assert_eq!(status.dropped, 0);
        }
        assert_eq!(output, expected);
        assert_eq!(decoder.finish(), 0);
    }
}

/// Test the resynchronising decoder recovers from a dropped byte
#[test]
fn test_sync_decoder_recovers_from_dropped_byte() {
    for codec_type in PROFILES {
        let block = 2 * codec_type.codeword_size();
        let mut stream = tone_stream(codec_type);
        stream.remove(100 * block);

        let mut decoder = SyncDecoder::new(codec_type);
        let mut output = Vec::new();
        let mut dropped = 0;
        let mut lost = false;
        for chunk in stream.chunks(37) {
            let status = decoder.decode(chunk, &mut output).unwrap();
            lost |= !status.synced;
            dropped += status.dropped;
        }

        assert!(lost, "{} loss not reported", codec_type);
        assert!(!decoder.is_resynchronising(), "{} never relocked", codec_type);
        // At least the probation window plus the slip back into alignment
        assert!(dropped >= RESYNC_CODEWORDS * block + block - 1, "{} dropped {}", codec_type, dropped);
        assert!(dropped < stream.len() / 2);

        // Everything but the discarded pairs came out as whole stereo groups
        assert_eq!(output.len() % 8, 0);
        assert!(output.len() >= (stream.len() - dropped) / block * 8);
    }
}

/// Test junk in front of a stream is skipped
#[test]
fn test_sync_decoder_skips_leading_junk() {
    for codec_type in PROFILES {
        let mut stream = vec![0x12, 0x34, 0x56];
        stream.extend(tone_stream(codec_type));

        let mut decoder = SyncDecoder::new(codec_type);
        let mut output = Vec::new();
        let mut dropped = 0;
        for chunk in stream.chunks(64) {
            dropped += decoder.decode(chunk, &mut output).unwrap().dropped;
        }

        assert!(!decoder.is_resynchronising());
        assert!(dropped >= 3);
    }
}

/// Test the tail of a stream that ends mid-pair is reported by finish
#[test]
fn test_sync_decoder_finish_reports_tail() {
    let mut stream = tone_stream(CodecType::AptxHd);
    stream.truncate(stream.len() - 4);

    let mut decoder = SyncDecoder::new(CodecType::AptxHd);
    let mut output = Vec::new();
    decoder.decode(&stream, &mut output).unwrap();
    assert_eq!(decoder.buffered(), 2);
    assert_eq!(decoder.finish(), 2);
    assert_eq!(output.len(), 511 * 8);
}
