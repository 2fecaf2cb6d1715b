//! Fixed-point arithmetic primitives
//!
//! Every stage of the codec works on 24-bit signed values carried in `i32`
//! (or `i64` accumulators). Encoder and decoder must agree bit for bit, so
//! all rounding and clamping goes through the helpers below.

/// Clamp `a` to the signed range of `p + 1` bits: `[-2^p, 2^p - 1]`
#[inline]
pub fn clip_intp2(a: i32, p: u32) -> i32 {
    let hi = (1i32 << p) - 1;
    a.clamp(-hi - 1, hi)
}

/// Saturate to 24-bit signed
#[inline]
pub fn clip24(a: i32) -> i32 {
    clip_intp2(a, 23)
}

/// Rounding right shift of a 32-bit value.
///
/// Adds half an LSB before shifting and subtracts one on an exact tie
/// whose result would be odd, so ties resolve to the even neighbour.
#[inline]
pub fn rshift32(value: i32, shift: u32) -> i32 {
    let rounding = 1i32 << (shift - 1);
    let mask = (1i32 << (shift + 1)).wrapping_sub(1);
    (value.wrapping_add(rounding) >> shift) - ((value & mask) == rounding) as i32
}

/// Rounding right shift of a 64-bit value, same tie rule as [`rshift32`]
#[inline]
pub fn rshift64(value: i64, shift: u32) -> i64 {
    let rounding = 1i64 << (shift - 1);
    let mask = (1i64 << (shift + 1)).wrapping_sub(1);
    (value.wrapping_add(rounding) >> shift) - ((value & mask) == rounding) as i64
}

/// [`rshift32`] followed by 24-bit saturation
#[inline]
pub fn rshift32_clip24(value: i32, shift: u32) -> i32 {
    clip24(rshift32(value, shift))
}

/// [`rshift64`] truncated to 32 bits, then saturated to 24 bits
#[inline]
pub fn rshift64_clip24(value: i64, shift: u32) -> i32 {
    clip24(rshift64(value, shift) as i32)
}

/// Sign-extend the low `bits` bits of `value`
#[inline]
pub fn sign_extend(value: i32, bits: u32) -> i32 {
    let shift = 32 - bits;
    value.wrapping_shl(shift) >> shift
}

/// `-1`, `0` or `1` as `x` is below, equal to or above `y`
#[inline]
pub fn diffsign(x: i32, y: i32) -> i32 {
    (x > y) as i32 - (x < y) as i32
}
