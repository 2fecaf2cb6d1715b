//! Inverse quantizer and backward-adaptive predictor
//!
//! This is the state machine shared by encoder and decoder. On the encoder
//! it runs after quantization to roll the state forward; on the decoder it
//! runs on the received indices. Both sides must execute exactly the same
//! arithmetic, otherwise the two predictors drift apart for good.

use crate::codecs::aptx::math::{clip24, diffsign, rshift32, rshift64_clip24};
use crate::codecs::aptx::state::{Channel, InvertQuantize, Prediction};
use crate::codecs::aptx::tables::{SubbandTables, NB_SUBBANDS, QUANTIZATION_FACTORS};

/// Decay of the step-size selector, in 1/32768 units
const FACTOR_SELECT_DECAY: i32 = 32620;

/// Rebuild the residual of one index and adapt the step size
pub fn invert_quantization(
    invert_quantize: &mut InvertQuantize,
    quantized_sample: i32,
    dither: i32,
    tables: &SubbandTables,
) {
    let idx = ((quantized_sample ^ -((quantized_sample < 0) as i32)) + 1) as usize;

    let mut qr = tables.quantize_intervals[idx] / 2;
    if quantized_sample < 0 {
        qr = -qr;
    }

    let qr = rshift64_clip24(
        ((qr as i64) << 32) + dither as i64 * tables.invert_quantize_dither_factors[idx] as i64,
        32,
    );
    invert_quantize.reconstructed_difference =
        ((invert_quantize.quantization_factor as i64 * qr as i64) >> 19) as i32;

    let factor_select = FACTOR_SELECT_DECAY * invert_quantize.factor_select;
    let factor_select = rshift32(
        factor_select + ((tables.quantize_factor_select_offset[idx] as i32) << 15),
        15,
    );
    invert_quantize.factor_select = factor_select.clamp(0, tables.factor_max);

    let mantissa = QUANTIZATION_FACTORS[((invert_quantize.factor_select & 0xFF) >> 3) as usize] as i32;
    let exponent = (tables.factor_max - invert_quantize.factor_select) >> 8;
    invert_quantize.quantization_factor = (mantissa << 11) >> exponent;
}

/// Run the pole and zero sections on the new residual and form the
/// prediction of the next subband sample
pub fn prediction_filtering(prediction: &mut Prediction, reconstructed_difference: i32, order: usize) {
    let reconstructed_sample = clip24(reconstructed_difference + prediction.predicted_sample);
    let predictor = clip24(
        ((prediction.s_weight[0] as i64 * prediction.previous_reconstructed_sample as i64
            + prediction.s_weight[1] as i64 * reconstructed_sample as i64)
            >> 22) as i32,
    );
    prediction.previous_reconstructed_sample = reconstructed_sample;

    let history = &mut prediction.reconstructed_differences;
    let pos = prediction.pos;
    history[pos] = history[order + pos];
    let pos = (pos + 1) % order;
    prediction.pos = pos;
    history[order + pos] = reconstructed_difference;
    let newest = order + pos;

    let srd0 = diffsign(reconstructed_difference, 0) * (1 << 23);
    let mut predicted_difference: i64 = 0;
    for i in 0..order {
        let srd = (history[newest - i - 1] >> 31) | 1;
        let weight = &mut prediction.d_weight[i];
        *weight -= rshift32(*weight - srd * srd0, 8);
        predicted_difference += history[newest - i] as i64 * *weight as i64;
    }

    prediction.predicted_difference = clip24((predicted_difference >> 22) as i32);
    prediction.predicted_sample = clip24(predictor + prediction.predicted_difference);
}

/// Adapt the pole weights from the residual signs, then filter
pub fn process_subband(
    invert_quantize: &mut InvertQuantize,
    prediction: &mut Prediction,
    quantized_sample: i32,
    dither: i32,
    tables: &SubbandTables,
) {
    invert_quantization(invert_quantize, quantized_sample, dither, tables);

    let sign = diffsign(
        invert_quantize.reconstructed_difference,
        -prediction.predicted_difference,
    );
    let same_sign = [sign * prediction.prev_sign[0], sign * prediction.prev_sign[1]];
    prediction.prev_sign[0] = prediction.prev_sign[1];
    prediction.prev_sign[1] = sign | 1;

    let range = 0x10_0000;
    let sw1 = rshift32(-same_sign[1] * prediction.s_weight[1], 1);
    let sw1 = (sw1.clamp(-range, range) & !0xF) * 16;

    let range = 0x30_0000;
    let weight0 = 254 * prediction.s_weight[0] + 0x80_0000 * same_sign[0] + sw1;
    prediction.s_weight[0] = rshift32(weight0, 8).clamp(-range, range);

    let range = 0x3C_0000 - prediction.s_weight[0];
    let weight1 = 255 * prediction.s_weight[1] + 0xC0_0000 * same_sign[1];
    prediction.s_weight[1] = rshift32(weight1, 8).clamp(-range, range);

    prediction_filtering(
        prediction,
        invert_quantize.reconstructed_difference,
        tables.prediction_order,
    );
}

/// Roll all four subbands of a channel forward from its quantized indices
pub fn invert_quantize_and_prediction(channel: &mut Channel, tables: &[SubbandTables; NB_SUBBANDS]) {
    for subband in 0..NB_SUBBANDS {
        process_subband(
            &mut channel.invert_quantize[subband],
            &mut channel.prediction[subband],
            channel.quantize[subband].quantized_sample,
            channel.dither[subband],
            &tables[subband],
        );
    }
}
