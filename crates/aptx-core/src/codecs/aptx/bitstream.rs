//! Codeword packing
//!
//! One codeword carries the four subband indices of one channel, highest
//! subband in the most significant bits. The low bit of the HF field is
//! replaced by the channel parity. Codewords are 16 bits wide for aptX and
//! 24 bits wide for aptX HD, transmitted big-endian.
//!
//! | profile | LF | MLF | MHF | HF (incl. parity) |
//! |---------|----|-----|-----|-------------------|
//! | aptX    | 7  | 4   | 2   | 3                 |
//! | aptX HD | 9  | 6   | 4   | 5                 |

use crate::codecs::aptx::math::sign_extend;
use crate::codecs::aptx::state::Channel;
use crate::codecs::aptx::sync::channel_parity;
use crate::codecs::aptx::tables::NB_SUBBANDS;
use crate::types::CodecType;

/// Bit widths of the LF, MLF, MHF and HF fields of a standard codeword
pub const STANDARD_FIELD_WIDTHS: [u32; NB_SUBBANDS] = [7, 4, 2, 3];

/// Bit widths of the LF, MLF, MHF and HF fields of an HD codeword
pub const HD_FIELD_WIDTHS: [u32; NB_SUBBANDS] = [9, 6, 4, 5];

/// Field widths of a profile
pub fn field_widths(codec_type: CodecType) -> &'static [u32; NB_SUBBANDS] {
    match codec_type {
        CodecType::Aptx => &STANDARD_FIELD_WIDTHS,
        CodecType::AptxHd => &HD_FIELD_WIDTHS,
    }
}

/// Pack the channel's indices and parity into a codeword
pub fn pack_codeword(channel: &Channel, codec_type: CodecType) -> u32 {
    let parity = channel_parity(channel);
    let q = channel.quantized_samples();
    let widths = field_widths(codec_type);

    let mut codeword = 0u32;
    let mut shift = 0u32;
    for (subband, &width) in widths.iter().enumerate() {
        let mut field = q[subband] & ((1 << width) - 1);
        if subband == NB_SUBBANDS - 1 {
            field = (field & !1) | parity;
        }
        codeword |= (field as u32) << shift;
        shift += width;
    }
    codeword
}

/// Load the indices of a codeword into the channel
///
/// The HF low bit is replaced by the channel parity computed over the
/// received fields, so afterwards the channel parity equals the transmitted
/// parity bit. With matching dither state this restores the sender's
/// indices exactly.
pub fn unpack_codeword(channel: &mut Channel, codeword: u32, codec_type: CodecType) {
    let widths = field_widths(codec_type);
    let mut shift = 0u32;
    for (subband, &width) in widths.iter().enumerate() {
        channel.quantize[subband].quantized_sample = sign_extend((codeword >> shift) as i32, width);
        shift += width;
    }
    let parity = channel_parity(channel);
    let hf = &mut channel.quantize[NB_SUBBANDS - 1].quantized_sample;
    *hf = (*hf & !1) | parity;
}

/// Write a codeword big-endian into `out`, which holds exactly one codeword
pub fn write_codeword(codeword: u32, out: &mut [u8]) {
    let bytes = codeword.to_be_bytes();
    let size = out.len();
    out.copy_from_slice(&bytes[4 - size..]);
}

/// Read a big-endian codeword spanning all of `data`
pub fn read_codeword(data: &[u8]) -> u32 {
    data.iter().fold(0u32, |acc, &b| (acc << 8) | b as u32)
}
